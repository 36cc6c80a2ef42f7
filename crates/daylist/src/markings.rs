//! Calendar markings derived from agenda data.

use std::collections::BTreeMap;

use kalends_calendar::CalendarDay;

use crate::sparse::SparseDayMap;

/// How a calendar cell should be decorated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marking {
    /// The day has at least one item.
    pub marked: bool,
    /// The day is the current selection.
    pub selected: bool,
}

/// Marks every day of `map` that has items, plus the selected day.
///
/// Keys are canonical day keys.
pub fn markings<T>(map: &SparseDayMap<T>, selected: CalendarDay) -> BTreeMap<String, Marking> {
    let mut out: BTreeMap<String, Marking> = map
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(key, _)| {
            (
                key.to_string(),
                Marking {
                    marked: true,
                    selected: false,
                },
            )
        })
        .collect();
    out.entry(selected.key()).or_default().selected = true;
    out
}
