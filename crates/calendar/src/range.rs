//! Inclusive day ranges and signed day/month distances.

use crate::day::CalendarDay;

/// Enumerates every day from `from` to `to`, both inclusive.
///
/// Returns an empty vector when `from > to`. Month and year boundaries are
/// crossed naturally.
///
/// # Example
///
/// ```
/// use kalends_calendar::{CalendarDay, date_range};
///
/// let from = CalendarDay::new(2023, 12, 30).unwrap();
/// let to = CalendarDay::new(2024, 1, 2).unwrap();
/// assert_eq!(date_range(from, to).len(), 4);
/// ```
pub fn date_range(from: CalendarDay, to: CalendarDay) -> Vec<CalendarDay> {
    if from > to {
        return Vec::new();
    }
    let mut days = Vec::with_capacity(days_between(from, to) as usize + 1);
    days.extend(
        from.naive()
            .iter_days()
            .take_while(|d| *d <= to.naive())
            .map(CalendarDay::from_naive),
    );
    days
}

/// Signed number of days from `a` to `b` (positive when `b` is later).
pub fn days_between(a: CalendarDay, b: CalendarDay) -> i64 {
    b.naive().signed_duration_since(a.naive()).num_days()
}

/// Signed number of calendar months from `a`'s month to `b`'s month.
///
/// Day-of-month is ignored: Jan 31 to Feb 1 is one month.
pub fn months_between(a: CalendarDay, b: CalendarDay) -> i32 {
    (b.year() - a.year()) * 12 + (b.month() as i32 - a.month() as i32)
}
