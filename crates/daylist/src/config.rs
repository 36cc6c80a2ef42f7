//! Configuration for the day-list windower.

use crate::error::DayListError;

/// Configuration for a [`DayListWindower`](crate::DayListWindower).
///
/// # Example
///
/// ```
/// use kalends_daylist::DayListConfig;
///
/// let config = DayListConfig::new().with_forward_days(14);
/// assert_eq!(config.forward_days(), 14);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayListConfig {
    forward_days: usize,
}

impl DayListConfig {
    /// Creates a configuration with defaults (31 forward days).
    pub fn new() -> Self {
        Self { forward_days: 31 }
    }

    /// Sets how many days, starting at the selected day, are materialized.
    pub fn with_forward_days(mut self, days: usize) -> Self {
        self.forward_days = days;
        self
    }

    /// Returns the number of forward days.
    pub fn forward_days(&self) -> usize {
        self.forward_days
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), DayListError> {
        if self.forward_days == 0 {
            return Err(DayListError::ZeroForwardDays);
        }
        Ok(())
    }
}

impl Default for DayListConfig {
    fn default() -> Self {
        Self::new()
    }
}
