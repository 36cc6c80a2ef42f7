//! Index space of a month window.

use kalends_calendar::{CalendarDay, months_between};

/// Fixed mapping between row indices and months.
///
/// Row `i` represents `open_date + (i - past)` months. The mapping never
/// changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    past: usize,
    future: usize,
    open_date: CalendarDay,
}

impl WindowRange {
    /// Creates a range of `past + future + 1` rows around `open_date`.
    pub fn new(open_date: CalendarDay, past: usize, future: usize) -> Self {
        Self {
            past,
            future,
            open_date,
        }
    }

    /// Returns the number of rows before the open date's row.
    pub fn past(&self) -> usize {
        self.past
    }

    /// Returns the number of rows after the open date's row.
    pub fn future(&self) -> usize {
        self.future
    }

    /// Returns the date the window was opened on.
    pub fn open_date(&self) -> CalendarDay {
        self.open_date
    }

    /// Total number of rows.
    pub fn len(&self) -> usize {
        self.past + self.future + 1
    }

    /// Always `false`: the open date has a row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Month anchor of row `index`, or `None` past the end.
    pub fn anchor_for(&self, index: usize) -> Option<CalendarDay> {
        (index < self.len()).then(|| self.open_date.add_months(index as i32 - self.past as i32))
    }

    /// Row index of `day`'s month, or `None` outside the window.
    pub fn index_of(&self, day: CalendarDay) -> Option<usize> {
        let index = self.past as i64 + i64::from(months_between(self.open_date, day));
        usize::try_from(index).ok().filter(|i| *i < self.len())
    }

    /// Anchor of row 0.
    pub fn first_anchor(&self) -> CalendarDay {
        self.open_date.add_months(-(self.past as i32))
    }

    /// Anchor of the last row.
    pub fn last_anchor(&self) -> CalendarDay {
        self.open_date.add_months(self.future as i32)
    }
}
