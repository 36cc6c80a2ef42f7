//! First-day-of-week convention.

use crate::day::CalendarDay;

/// Index of the weekday a displayed week starts on (0 = Sunday .. 6 = Saturday).
///
/// Any integer is accepted and normalized modulo 7, so `7` is Sunday and
/// `-1` is Saturday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekStart(u8);

impl WeekStart {
    /// Weeks start on Sunday.
    pub const SUNDAY: Self = Self(0);
    /// Weeks start on Monday.
    pub const MONDAY: Self = Self(1);

    /// Creates a week start from any integer, normalized modulo 7.
    pub fn new(index: i64) -> Self {
        Self(index.rem_euclid(7) as u8)
    }

    /// Returns the normalized index (0..=6).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the first day of the displayed week containing `day`.
    pub fn start_of_week(self, day: CalendarDay) -> CalendarDay {
        let back = (day.weekday() + 7 - u32::from(self.0)) % 7;
        day.add_days(-i64::from(back))
    }

    /// Returns the last day of the displayed week containing `day`.
    pub fn end_of_week(self, day: CalendarDay) -> CalendarDay {
        self.start_of_week(day).add_days(6)
    }
}
