//! Day- and month-granularity comparisons.

use crate::day::CalendarDay;

/// Returns `true` if both days fall in the same year and month.
pub fn is_same_month(a: CalendarDay, b: CalendarDay) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Returns `true` if both values denote the same calendar day.
pub fn is_same_day(a: CalendarDay, b: CalendarDay) -> bool {
    a == b
}

/// Returns `true` if `a` is the same day as `b` or later.
pub fn is_on_or_after(a: CalendarDay, b: CalendarDay) -> bool {
    a >= b
}

/// Returns `true` if `a` is the same day as `b` or earlier.
pub fn is_on_or_before(a: CalendarDay, b: CalendarDay) -> bool {
    a <= b
}
