//! Error types for the kalends-calendar crate.

/// Error type for all fallible operations in the kalends-calendar crate.
///
/// Date math itself is total; only construction from external input
/// (numbers, strings, locale names) can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a (year, month, day) triple is not a Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },

    /// Returned when a string cannot be parsed as a calendar day.
    #[error("unparseable date: {input:?} (expected yyyy-MM-dd)")]
    Unparseable {
        /// The input that failed to parse.
        input: String,
    },

    /// Returned when no built-in locale table matches a name.
    #[error("unknown locale: {name:?}")]
    UnknownLocale {
        /// The requested locale name.
        name: String,
    },
}
