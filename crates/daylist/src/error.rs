//! Error types for the kalends-daylist crate.

/// Error type for all fallible operations in the kalends-daylist crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DayListError {
    /// Returned when the forward window would cover no days.
    #[error("forward_days must be > 0")]
    ZeroForwardDays,

    /// Returned when a measured row height is negative or not finite.
    #[error("invalid height {height} for row {index} (must be finite and >= 0)")]
    InvalidHeight {
        /// Row index the measurement was reported for.
        index: usize,
        /// The rejected height.
        height: f64,
    },
}
