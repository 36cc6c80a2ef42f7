//! Per-cell display state and selectable date bounds.

use crate::compare::{is_on_or_after, is_on_or_before, is_same_month};
use crate::day::CalendarDay;

/// Optional inclusive lower and upper bounds on selectable days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    min: Option<CalendarDay>,
    max: Option<CalendarDay>,
}

impl DateBounds {
    /// Creates bounds; `None` leaves that side open.
    pub fn new(min: Option<CalendarDay>, max: Option<CalendarDay>) -> Self {
        Self { min, max }
    }

    /// Bounds that accept every day.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns the lower bound.
    pub fn min(&self) -> Option<CalendarDay> {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> Option<CalendarDay> {
        self.max
    }

    /// Returns `true` if `day` lies within both bounds.
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.min.is_none_or(|min| is_on_or_after(day, min))
            && self.max.is_none_or(|max| is_on_or_before(day, max))
    }
}

/// How a grid cell should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Selectable day of the displayed month.
    Normal,
    /// Selectable day that is today.
    Today,
    /// Outside the bounds, outside the displayed month, or disabled by default.
    Disabled,
}

/// Computes the display state of `day` in a grid showing `displayed_month`.
pub fn day_state(
    day: CalendarDay,
    displayed_month: CalendarDay,
    today: CalendarDay,
    bounds: &DateBounds,
    disabled_by_default: bool,
) -> DayState {
    if disabled_by_default || !bounds.contains(day) || !is_same_month(day, displayed_month) {
        DayState::Disabled
    } else if day == today {
        DayState::Today
    } else {
        DayState::Normal
    }
}
