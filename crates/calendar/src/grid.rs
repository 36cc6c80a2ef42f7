//! Week-aligned month grids.

use std::slice::Chunks;

use crate::day::CalendarDay;
use crate::range::date_range;
use crate::week::WeekStart;

/// Every day of `anchor`'s month, in order.
pub fn month_days(anchor: CalendarDay) -> Vec<CalendarDay> {
    date_range(anchor.first_of_month(), anchor.last_of_month())
}

/// Builds the displayed grid for `anchor`'s month.
///
/// The grid starts on the first day of the week containing day 1 and ends on
/// the last day of the week containing the month's final day, so its length
/// is always a multiple of 7 (28, 35 or 42 days).
pub fn month_grid(anchor: CalendarDay, week_start: WeekStart) -> MonthGrid {
    let first = anchor.first_of_month();
    let last = anchor.last_of_month();
    let from = week_start.start_of_week(first);
    let to = week_start.end_of_week(last);
    MonthGrid {
        month: first,
        days: date_range(from, to),
    }
}

/// Ordered, week-aligned days of one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: CalendarDay,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Returns the first day of the month this grid displays.
    pub fn month(&self) -> CalendarDay {
        self.month
    }

    /// Returns all days of the grid, including leading and trailing days
    /// from adjacent months.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns the number of days in the grid.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`: a grid holds at least four weeks.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the number of week rows.
    pub fn week_count(&self) -> usize {
        self.days.len() / 7
    }

    /// Iterates the grid one week (7 days) at a time.
    pub fn weeks(&self) -> Chunks<'_, CalendarDay> {
        self.days.chunks(7)
    }

    /// Returns the zero-based week row containing `day`, if the grid shows it.
    pub fn week_index_of(&self, day: CalendarDay) -> Option<usize> {
        self.days.iter().position(|d| *d == day).map(|i| i / 7)
    }

    /// Returns `true` if `day` belongs to the displayed month (not padding).
    pub fn in_month(&self, day: CalendarDay) -> bool {
        day.year() == self.month.year() && day.month() == self.month.month()
    }
}
