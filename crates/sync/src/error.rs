//! Error types for the kalends-sync crate.

use kalends_daylist::DayListError;
use kalends_window::WindowError;

/// Error type for all fallible operations in the kalends-sync crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    /// Returned when a configured height or offset is not a finite number
    /// in range.
    #[error("invalid {name}: {value}")]
    InvalidValue {
        /// Which setting was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A month window operation failed.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// A day list operation failed.
    #[error(transparent)]
    DayList(#[from] DayListError),
}
