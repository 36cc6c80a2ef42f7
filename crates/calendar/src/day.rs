//! Gregorian calendar day with a canonical string key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::error::CalendarError;

/// A local calendar date at day granularity.
///
/// Ordering and equality compare `(year, month, day)`. The string key
/// (`yyyy-MM-dd`, zero padded) is always produced by [`CalendarDay::key`]
/// and is the lookup key for day-keyed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
}

impl CalendarDay {
    /// Creates a new `CalendarDay` from year, month (1..=12) and day (1..=31).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple is not a
    /// Gregorian date (e.g. February 29 in a common year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_naive)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Wraps an existing [`NaiveDate`].
    pub fn from_naive(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns today's date in the local timezone.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// Returns the UTC calendar day containing a millisecond timestamp.
    pub fn from_timestamp_ms(ms: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| Self::from_naive(dt.date_naive()))
    }

    /// Parses a day from external input.
    ///
    /// Accepts `yyyy-MM-dd`, a date-time whose first ten characters are
    /// `yyyy-MM-dd` followed by `T` or a space, and `yyyy-MM` (first of the
    /// month). Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Unparseable`] for anything else.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let trimmed = input.trim();
        let unparseable = || CalendarError::Unparseable {
            input: input.to_string(),
        };

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::from_naive(date));
        }

        if let Some((head, rest)) = trimmed.split_at_checked(10) {
            if rest.starts_with(['T', ' ']) {
                return NaiveDate::parse_from_str(head, "%Y-%m-%d")
                    .map(Self::from_naive)
                    .map_err(|_| unparseable());
            }
        }

        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(Self::from_naive)
            .map_err(|_| unparseable())
    }

    /// Parses a day, falling back to today when the input is unusable.
    ///
    /// Calendar views always need something to show, so this never fails.
    pub fn parse_or_today(input: &str) -> Self {
        match Self::parse(input) {
            Ok(day) => day,
            Err(err) => {
                debug!(%err, "falling back to today");
                Self::today()
            }
        }
    }

    /// Returns the underlying [`NaiveDate`].
    pub fn naive(self) -> NaiveDate {
        self.date
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.date.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.date.day()
    }

    /// Returns the weekday as an index from Sunday (0) to Saturday (6).
    pub fn weekday(self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }

    /// Returns the ISO-8601 week number.
    pub fn iso_week(self) -> u32 {
        self.date.iso_week().week()
    }

    /// Returns the canonical `yyyy-MM-dd` key.
    pub fn key(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// Returns the millisecond timestamp of midnight (UTC) on this day.
    pub fn timestamp_ms(self) -> i64 {
        self.date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    /// Returns the first day of this day's month.
    pub fn first_of_month(self) -> Self {
        self.add_days(-i64::from(self.day() - 1))
    }

    /// Returns the last day of this day's month.
    pub fn last_of_month(self) -> Self {
        self.first_of_month().add_months(1).add_days(-1)
    }

    /// Returns the day `n` days away (negative moves backwards).
    pub fn add_days(self, n: i64) -> Self {
        let step = Days::new(n.unsigned_abs());
        let date = if n >= 0 {
            self.date.checked_add_days(step)
        } else {
            self.date.checked_sub_days(step)
        };
        Self::from_naive(date.expect("day offset within the supported date range"))
    }

    /// Returns the day `n` months away, clamping the day-of-month to the
    /// length of the target month (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(self, n: i32) -> Self {
        let step = Months::new(n.unsigned_abs());
        let date = if n >= 0 {
            self.date.checked_add_months(step)
        } else {
            self.date.checked_sub_months(step)
        };
        Self::from_naive(date.expect("month offset within the supported date range"))
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for CalendarDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}
