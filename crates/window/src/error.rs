//! Error types for the kalends-window crate.

use kalends_calendar::CalendarDay;

/// Error type for all fallible operations in the kalends-window crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Returned when a configured pixel extent is not a positive finite number.
    #[error("invalid {name}: {value} (must be finite and > 0)")]
    InvalidExtent {
        /// Which extent was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when the month label format is empty.
    #[error("month label format must not be empty")]
    EmptyMonthFormat,

    /// Returned when a navigation target lies outside the constructed window.
    ///
    /// The window is never re-anchored; the caller has to build a new
    /// window around the target instead.
    #[error("month of {target} is outside the window ({first} ..= {last})")]
    OutOfWindow {
        /// The requested day.
        target: CalendarDay,
        /// Anchor of row 0.
        first: CalendarDay,
        /// Anchor of the last row.
        last: CalendarDay,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_extent() {
        let err = WindowError::InvalidExtent {
            name: "row_height",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid row_height: -1 (must be finite and > 0)");
    }

    #[test]
    fn error_out_of_window() {
        let err = WindowError::OutOfWindow {
            target: CalendarDay::new(2030, 1, 5).unwrap(),
            first: CalendarDay::new(2023, 12, 1).unwrap(),
            last: CalendarDay::new(2024, 2, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "month of 2030-01-05 is outside the window (2023-12-01 ..= 2024-02-01)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<WindowError>();
    }
}
