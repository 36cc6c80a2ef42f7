//! The agenda row windower.

use kalends_calendar::{CalendarDay, date_range};
use kalends_viewport::ViewportHost;
use tracing::{debug, warn};

use crate::config::DayListConfig;
use crate::error::DayListError;
use crate::heights::RowHeightTable;
use crate::row::{DayRow, materialize_day};
use crate::sparse::SparseDayMap;

/// Who is currently moving the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// The user is dragging; scroll offsets are reported as day changes.
    #[default]
    User,
    /// The list is scrolling to a selection it was given; scroll offsets
    /// are not reported until the user touches the list again.
    Programmatic,
}

/// Result of one window build.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowBuild<T> {
    /// Lead-in rows followed by the forward window.
    pub rows: Vec<DayRow<T>>,
    /// Number of lead-in rows, i.e. the row index of the selected day's
    /// first row.
    pub scroll_position: usize,
}

/// What the list should currently show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListContent<'a, T> {
    /// The selected day has not been loaded yet.
    Loading,
    /// The materialized rows.
    Rows(&'a [DayRow<T>]),
}

/// Expands a [`SparseDayMap`] into the flat row list of an agenda.
///
/// The list starts at the selected day and runs forward
/// [`forward_days`](DayListConfig::forward_days) days. When the selection
/// moves forward, the rows from the previous first day up to the new
/// selection are carried over as a lead-in so the list does not jump; when
/// any day of that span is unknown the lead-in is dropped.
#[derive(Debug, Clone)]
pub struct DayListWindower<T> {
    config: DayListConfig,
    rows: Vec<DayRow<T>>,
    heights: RowHeightTable,
    selected: CalendarDay,
    top_day: CalendarDay,
    mounted: bool,
    mode: ScrollMode,
}

impl<T: Clone> DayListWindower<T> {
    /// Creates an empty windower for `selected`.
    ///
    /// # Errors
    ///
    /// Returns [`DayListError`] if the configuration is invalid.
    pub fn new(selected: CalendarDay, config: DayListConfig) -> Result<Self, DayListError> {
        config.validate()?;
        Ok(Self {
            config,
            rows: Vec::new(),
            heights: RowHeightTable::new(),
            selected,
            top_day: selected,
            mounted: false,
            mode: ScrollMode::User,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DayListConfig {
        &self.config
    }

    /// Current rows.
    pub fn rows(&self) -> &[DayRow<T>] {
        &self.rows
    }

    /// Measured heights.
    pub fn heights(&self) -> &RowHeightTable {
        &self.heights
    }

    /// Selected day as last seen by the list.
    pub fn selected(&self) -> CalendarDay {
        self.selected
    }

    /// Day the list was last reset to.
    pub fn top_day(&self) -> CalendarDay {
        self.top_day
    }

    /// Whether the host list is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current scroll mode.
    pub fn scroll_mode(&self) -> ScrollMode {
        self.mode
    }

    /// Builds rows for `selected` against the current row list without
    /// changing any state.
    pub fn build(&self, map: &SparseDayMap<T>, selected: CalendarDay) -> WindowBuild<T> {
        let mut rows = self.lead_in(map, selected);
        let scroll_position = rows.len();

        let last = selected.add_days(self.config.forward_days() as i64 - 1);
        for day in date_range(selected, last) {
            if let Some(day_rows) = materialize_day(day, map) {
                rows.extend(day_rows);
            }
        }

        WindowBuild {
            rows,
            scroll_position,
        }
    }

    fn lead_in(&self, map: &SparseDayMap<T>, selected: CalendarDay) -> Vec<DayRow<T>> {
        let Some(first) = self.rows.first().map(|r| r.day) else {
            return Vec::new();
        };
        if first >= selected {
            return Vec::new();
        }

        let mut rows = Vec::new();
        for day in date_range(first, selected.add_days(-1)) {
            match materialize_day(day, map) {
                Some(day_rows) => rows.extend(day_rows),
                None => {
                    warn!(gap = %day, from = %first, to = %selected, "lead-in abandoned at unknown day");
                    return Vec::new();
                }
            }
        }
        rows
    }

    /// Rebuilds the rows for the current selection, e.g. after the map
    /// changed. Never scrolls.
    pub fn refresh(&mut self, map: &SparseDayMap<T>) {
        let built = self.build(map, self.selected);
        self.rows = built.rows;
        debug!(rows = self.rows.len(), "day list refreshed");
    }

    /// Applies a new selection.
    ///
    /// When the list is mounted and the day actually changed, the host is
    /// scrolled (animated) to the first row of the selection and the list
    /// stops reporting scroll-driven day changes until the next touch.
    /// Returns the offset that was scrolled to.
    pub fn select_day(
        &mut self,
        day: CalendarDay,
        map: &SparseDayMap<T>,
        host: &mut impl ViewportHost,
    ) -> Option<f64> {
        let built = self.build(map, day);
        let mut scrolled = None;
        if self.mounted && day != self.selected {
            let offset = self.heights.offset_of(built.scroll_position);
            self.mode = ScrollMode::Programmatic;
            host.scroll_to_offset(offset, true);
            scrolled = Some(offset);
        }
        debug!(
            selected = %day,
            rows = built.rows.len(),
            lead_in = built.scroll_position,
            "day list rebuilt"
        );
        self.selected = day;
        self.rows = built.rows;
        scrolled
    }

    /// Applies a new top day together with a selection.
    ///
    /// A changed top day clears the rows first, so no lead-in is carried.
    pub fn set_top_day(
        &mut self,
        top_day: CalendarDay,
        selected: CalendarDay,
        map: &SparseDayMap<T>,
        host: &mut impl ViewportHost,
    ) -> Option<f64> {
        if top_day != self.top_day {
            self.top_day = top_day;
            self.rows.clear();
        }
        self.select_day(selected, map, host)
    }

    /// Handles a vertical scroll offset from the host.
    ///
    /// Returns the newly visible day when the user scrolled onto a day other
    /// than the selection; the selection follows it.
    pub fn on_scroll(&mut self, offset: f64) -> Option<CalendarDay> {
        let index = self.heights.row_at_offset(offset);
        let day = self.rows.get(index)?.day;
        if day == self.selected || self.mode != ScrollMode::User {
            return None;
        }
        debug!(day = %day, offset, "visible day changed by scroll");
        self.selected = day;
        Some(day)
    }

    /// The user touched the list: scroll offsets are reported again.
    pub fn on_touch(&mut self) {
        self.mode = ScrollMode::User;
    }

    /// Stores a measured row height. Invalid measurements are ignored.
    pub fn on_row_measured(&mut self, index: usize, height: f64) {
        if let Err(err) = self.heights.record(index, height) {
            warn!(%err, "ignoring row measurement");
        }
    }

    /// The host list appeared.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// The host list went away.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// What the host should render for `map`.
    pub fn content<'a>(&'a self, map: &SparseDayMap<T>) -> ListContent<'a, T> {
        if map.contains(self.selected) {
            ListContent::Rows(&self.rows)
        } else {
            ListContent::Loading
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalends_viewport::ScrollCommand;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    fn windower(selected: CalendarDay) -> DayListWindower<&'static str> {
        DayListWindower::new(selected, DayListConfig::new()).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let result: Result<DayListWindower<u8>, _> =
            DayListWindower::new(day(2024, 1, 1), DayListConfig::new().with_forward_days(0));
        assert_eq!(result.unwrap_err(), DayListError::ZeroForwardDays);
    }

    #[test]
    fn forward_window_is_bounded() {
        let mut map = SparseDayMap::new();
        map.insert(day(2024, 6, 1), vec!["in"]);
        map.insert(day(2024, 7, 1), vec!["last"]);
        map.insert(day(2024, 7, 2), vec!["out"]);
        let w = windower(day(2024, 6, 1));
        let built = w.build(&map, day(2024, 6, 1));
        let items: Vec<_> = built.rows.iter().filter_map(|r| r.item).collect();
        assert_eq!(items, vec!["in", "last"]);
        assert_eq!(built.scroll_position, 0);
    }

    #[test]
    fn unmounted_select_does_not_scroll() {
        let mut map = SparseDayMap::new();
        map.insert(day(2024, 6, 10), vec!["a"]);
        let mut w = windower(day(2024, 6, 10));
        let mut host: Vec<ScrollCommand> = Vec::new();
        assert_eq!(w.select_day(day(2024, 6, 11), &map, &mut host), None);
        assert!(host.is_empty());
        assert_eq!(w.selected(), day(2024, 6, 11));
        assert_eq!(w.scroll_mode(), ScrollMode::User);
    }

    #[test]
    fn programmatic_scroll_suppresses_reports_until_touch() {
        let mut map = SparseDayMap::new();
        map.insert(day(2024, 6, 10), vec!["a"]);
        map.insert(day(2024, 6, 11), vec!["b"]);
        let mut w = windower(day(2024, 6, 10));
        let mut host: Vec<ScrollCommand> = Vec::new();
        w.refresh(&map);
        w.mount();
        w.on_row_measured(0, 100.0);
        w.on_row_measured(1, 100.0);

        assert_eq!(w.select_day(day(2024, 6, 11), &map, &mut host), Some(100.0));
        assert_eq!(w.scroll_mode(), ScrollMode::Programmatic);
        assert_eq!(w.on_scroll(0.0), None);

        w.on_touch();
        assert_eq!(w.on_scroll(0.0), Some(day(2024, 6, 10)));
        assert_eq!(w.selected(), day(2024, 6, 10));
        // Same day again is not re-reported.
        assert_eq!(w.on_scroll(10.0), None);
    }

    #[test]
    fn reselecting_same_day_does_not_scroll() {
        let mut map = SparseDayMap::new();
        map.insert(day(2024, 6, 10), vec!["a"]);
        let mut w = windower(day(2024, 6, 10));
        let mut host: Vec<ScrollCommand> = Vec::new();
        w.mount();
        assert_eq!(w.select_day(day(2024, 6, 10), &map, &mut host), None);
        assert!(host.is_empty());
    }

    #[test]
    fn scroll_past_rows_is_ignored() {
        let mut map = SparseDayMap::new();
        map.insert(day(2024, 6, 10), vec!["a"]);
        let mut w = windower(day(2024, 6, 10));
        w.refresh(&map);
        w.on_row_measured(0, 50.0);
        assert_eq!(w.on_scroll(500.0), None);
    }

    #[test]
    fn top_day_change_clears_lead_in() {
        let mut map = SparseDayMap::new();
        for d in 1..=5 {
            map.insert(day(2024, 6, d), vec!["x"]);
        }
        let mut w = windower(day(2024, 6, 1));
        let mut host: Vec<ScrollCommand> = Vec::new();
        w.refresh(&map);

        w.set_top_day(day(2024, 6, 1), day(2024, 6, 3), &map, &mut host);
        assert_eq!(w.rows()[0].day, day(2024, 6, 1));

        w.set_top_day(day(2024, 6, 4), day(2024, 6, 4), &map, &mut host);
        assert_eq!(w.rows()[0].day, day(2024, 6, 4));
        assert_eq!(w.top_day(), day(2024, 6, 4));
    }

    #[test]
    fn invalid_measurement_is_ignored() {
        let mut w = windower(day(2024, 6, 10));
        w.on_row_measured(2, f64::NAN);
        assert!(w.heights().is_empty());
    }

    #[test]
    fn content_reports_loading_for_unknown_selection() {
        let mut map = SparseDayMap::new();
        let mut w = windower(day(2024, 6, 10));
        assert_eq!(w.content(&map), ListContent::Loading);

        map.mark_empty(day(2024, 6, 10));
        w.refresh(&map);
        match w.content(&map) {
            ListContent::Rows(rows) => assert_eq!(rows.len(), 1),
            ListContent::Loading => panic!("selected day is known"),
        }
    }
}
