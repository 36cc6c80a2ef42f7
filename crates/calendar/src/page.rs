//! Page turns for arrow and swipe navigation.

use crate::day::CalendarDay;
use crate::week::WeekStart;

/// What one page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// A full month grid is shown.
    Month,
    /// A single week row is shown.
    Week,
}

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards earlier dates.
    Previous,
    /// Towards later dates.
    Next,
}

impl Direction {
    /// `Next` when `later` is true.
    pub fn forward(later: bool) -> Self {
        if later { Self::Next } else { Self::Previous }
    }

    fn sign(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Returns the day a page turn lands on.
///
/// In [`PageMode::Month`] this is the first day of the adjacent month; in
/// [`PageMode::Week`] the first day of the adjacent displayed week.
pub fn page_step(
    day: CalendarDay,
    week_start: WeekStart,
    mode: PageMode,
    direction: Direction,
) -> CalendarDay {
    match mode {
        PageMode::Month => day.first_of_month().add_months(direction.sign()),
        PageMode::Week => week_start
            .start_of_week(day)
            .add_days(7 * i64::from(direction.sign())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn month_pages() {
        let d = day(2024, 1, 31);
        assert_eq!(
            page_step(d, WeekStart::SUNDAY, PageMode::Month, Direction::Next),
            day(2024, 2, 1)
        );
        assert_eq!(
            page_step(d, WeekStart::SUNDAY, PageMode::Month, Direction::Previous),
            day(2023, 12, 1)
        );
    }

    #[test]
    fn week_pages_sunday() {
        // Wednesday 2024-06-12.
        let d = day(2024, 6, 12);
        assert_eq!(
            page_step(d, WeekStart::SUNDAY, PageMode::Week, Direction::Next),
            day(2024, 6, 16)
        );
        assert_eq!(
            page_step(d, WeekStart::SUNDAY, PageMode::Week, Direction::Previous),
            day(2024, 6, 2)
        );
    }

    #[test]
    fn week_pages_monday_from_sunday() {
        // Sunday 2024-06-09 sits at the end of the Monday-started week of June 3.
        let d = day(2024, 6, 9);
        assert_eq!(
            page_step(d, WeekStart::MONDAY, PageMode::Week, Direction::Next),
            day(2024, 6, 10)
        );
        assert_eq!(
            page_step(d, WeekStart::MONDAY, PageMode::Week, Direction::Previous),
            day(2024, 5, 27)
        );
    }

    #[test]
    fn forward_helper() {
        assert_eq!(Direction::forward(true), Direction::Next);
        assert_eq!(Direction::forward(false), Direction::Previous);
    }
}
