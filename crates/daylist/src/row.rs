//! Flat agenda rows.

use kalends_calendar::CalendarDay;

use crate::sparse::{DayEntry, SparseDayMap};

/// One row of the agenda list.
///
/// `item == None` is the placeholder row of a day that was loaded but has no
/// items.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow<T> {
    /// Day the row belongs to.
    pub day: CalendarDay,
    /// The item shown in this row, if any.
    pub item: Option<T>,
    /// Whether this row starts its day (and shows the day header).
    pub first_of_day: bool,
}

impl<T> DayRow<T> {
    /// Returns `true` for an empty-day placeholder row.
    pub fn is_placeholder(&self) -> bool {
        self.item.is_none()
    }
}

/// Expands one day of `map` into rows.
///
/// Returns `None` for an unknown day, a single placeholder row for a known
/// empty day, and one row per item otherwise.
pub fn materialize_day<T: Clone>(day: CalendarDay, map: &SparseDayMap<T>) -> Option<Vec<DayRow<T>>> {
    match map.get(day) {
        DayEntry::Unknown => None,
        DayEntry::Empty => Some(vec![DayRow {
            day,
            item: None,
            first_of_day: true,
        }]),
        DayEntry::Items(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| DayRow {
                    day,
                    item: Some(item.clone()),
                    first_of_day: i == 0,
                })
                .collect(),
        ),
    }
}
