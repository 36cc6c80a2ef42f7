//! Configuration for the synchronization layer.

use std::time::Duration;

use kalends_calendar::WeekStart;

use crate::error::SyncError;

/// Configuration shared by the coordinator and the expandable strip.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use kalends_sync::SyncConfig;
///
/// let config = SyncConfig::new()
///     .with_load_items_delay(Duration::from_millis(300))
///     .with_horizontal(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.load_items_delay(), Duration::from_millis(300));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    load_items_delay: Duration,
    visible_report_delay: Duration,
    calendar_offset: f64,
    horizontal: bool,
    week_start: WeekStart,
    closed_height: f64,
    week_height: f64,
    knob_height: f64,
}

impl SyncConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: load-items debounce 200 ms, visible reports coalesced per
    /// tick, no calendar offset, horizontal strip, Sunday week start,
    /// 120 px closed strip, 46 px week rows, 20 px knob.
    pub fn new() -> Self {
        Self {
            load_items_delay: Duration::from_millis(200),
            visible_report_delay: Duration::ZERO,
            calendar_offset: 0.0,
            horizontal: true,
            week_start: WeekStart::SUNDAY,
            closed_height: 120.0,
            week_height: 46.0,
            knob_height: 20.0,
        }
    }

    /// Sets the delay before a load-items request fires.
    pub fn with_load_items_delay(mut self, delay: Duration) -> Self {
        self.load_items_delay = delay;
        self
    }

    /// Sets the delay before a visible-range report is applied.
    pub fn with_visible_report_delay(mut self, delay: Duration) -> Self {
        self.visible_report_delay = delay;
        self
    }

    /// Sets the pixel offset used when the calendar scrolls to a day.
    pub fn with_calendar_offset(mut self, offset: f64) -> Self {
        self.calendar_offset = offset;
        self
    }

    /// Sets whether the strip pages horizontally.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the strip heights: closed strip, one week row, knob.
    pub fn with_strip_heights(mut self, closed: f64, week: f64, knob: f64) -> Self {
        self.closed_height = closed;
        self.week_height = week;
        self.knob_height = knob;
        self
    }

    /// Returns the load-items delay.
    pub fn load_items_delay(&self) -> Duration {
        self.load_items_delay
    }

    /// Returns the visible-report delay.
    pub fn visible_report_delay(&self) -> Duration {
        self.visible_report_delay
    }

    /// Returns the calendar scroll offset.
    pub fn calendar_offset(&self) -> f64 {
        self.calendar_offset
    }

    /// Returns whether the strip pages horizontally.
    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// Returns the first day of the week.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Height of the closed strip including the knob.
    pub fn closed_height(&self) -> f64 {
        self.closed_height + self.knob_height
    }

    /// Height of the open strip for a month with `weeks` week rows.
    pub fn open_height(&self, weeks: usize) -> f64 {
        self.closed_height + self.week_height * weeks.saturating_sub(1) as f64 + self.knob_height
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SyncError> {
        if !self.calendar_offset.is_finite() {
            return Err(SyncError::InvalidValue {
                name: "calendar_offset",
                value: self.calendar_offset,
            });
        }
        for (name, value) in [
            ("closed_height", self.closed_height),
            ("week_height", self.week_height),
            ("knob_height", self.knob_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SyncError::InvalidValue { name, value });
            }
        }
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn defaults() {
        let cfg = SyncConfig::default();
        assert_eq!(cfg.load_items_delay(), Duration::from_millis(200));
        assert_eq!(cfg.visible_report_delay(), Duration::ZERO);
        assert!(cfg.horizontal());
        assert_abs_diff_eq!(cfg.closed_height(), 140.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn open_height_grows_with_weeks() {
        let cfg = SyncConfig::new();
        assert_abs_diff_eq!(cfg.open_height(5), 120.0 + 4.0 * 46.0 + 20.0);
        assert_abs_diff_eq!(cfg.open_height(6) - cfg.open_height(5), 46.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SyncConfig::new().with_calendar_offset(f64::NAN).validate().is_err());
        let err = SyncConfig::new()
            .with_strip_heights(120.0, -1.0, 20.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            SyncError::InvalidValue {
                name: "week_height",
                value: -1.0
            }
        );
    }
}
