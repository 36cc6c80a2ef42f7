//! Agenda coordinator: one month window, one day list, one focus date.

use std::collections::BTreeMap;
use std::time::Duration;

use kalends_calendar::{CalendarDay, is_same_month};
use kalends_daylist::{DayListConfig, DayListWindower, ListContent, Marking, SparseDayMap, markings};
use kalends_viewport::ViewportHost;
use kalends_window::{MonthWindow, WindowConfig};
use tracing::{debug, info};

use crate::config::SyncConfig;
use crate::debounce::Debouncer;
use crate::error::SyncError;
use crate::origin::{Reaction, UpdateSource, View, reaction};
use crate::provider::{FocusProvider, ProviderEvent};

/// Callback receiving the months the calendar shows, in row order.
pub type VisibleMonthsCallback = Box<dyn FnMut(&[CalendarDay])>;
/// Callback receiving a focus date and the origin of the change.
pub type DayCallback = Box<dyn FnMut(CalendarDay, UpdateSource)>;
/// Callback asking the data source to load the month of a day.
pub type LoadItemsCallback = Box<dyn FnMut(CalendarDay)>;

/// Keeps a [`MonthWindow`] and a [`DayListWindower`] on the same focus date.
///
/// Every change goes through the [`FocusProvider`] first, so its origin is
/// known before either view reacts. The calendar host `C` and list host `L`
/// receive the scroll commands. Deferred work runs in [`tick`](Self::tick).
pub struct CalendarSync<T, C, L> {
    config: SyncConfig,
    provider: FocusProvider,
    window: MonthWindow,
    list: DayListWindower<T>,
    items: Option<SparseDayMap<T>>,
    first_load_pending: bool,
    calendar_scrollable: bool,
    calendar_host: C,
    list_host: L,
    visible: Debouncer<Vec<usize>>,
    load: Debouncer<CalendarDay>,
    visible_months_cb: Option<VisibleMonthsCallback>,
    day_cb: Option<DayCallback>,
    month_cb: Option<DayCallback>,
    load_cb: Option<LoadItemsCallback>,
}

impl<T: Clone, C: ViewportHost, L: ViewportHost> CalendarSync<T, C, L> {
    /// Builds the coordinator around `selected`.
    ///
    /// The month window is opened on `selected`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] if any of the configurations is invalid.
    pub fn new(
        selected: CalendarDay,
        window_config: WindowConfig,
        list_config: DayListConfig,
        config: SyncConfig,
        calendar_host: C,
        list_host: L,
    ) -> Result<Self, SyncError> {
        config.validate()?;
        let window = MonthWindow::new(selected, window_config)?;
        let list = DayListWindower::new(selected, list_config)?;
        Ok(Self {
            visible: Debouncer::new(config.visible_report_delay()),
            load: Debouncer::new(config.load_items_delay()),
            config,
            provider: FocusProvider::new(selected),
            window,
            list,
            items: None,
            first_load_pending: false,
            calendar_scrollable: false,
            calendar_host,
            list_host,
            visible_months_cb: None,
            day_cb: None,
            month_cb: None,
            load_cb: None,
        })
    }

    /// Registers the visible-months callback.
    pub fn on_visible_months_changed(&mut self, cb: impl FnMut(&[CalendarDay]) + 'static) {
        self.visible_months_cb = Some(Box::new(cb));
    }

    /// Registers the day-changed callback.
    pub fn on_day_changed(&mut self, cb: impl FnMut(CalendarDay, UpdateSource) + 'static) {
        self.day_cb = Some(Box::new(cb));
    }

    /// Registers the month-changed callback.
    pub fn on_month_changed(&mut self, cb: impl FnMut(CalendarDay, UpdateSource) + 'static) {
        self.month_cb = Some(Box::new(cb));
    }

    /// Registers the load-items callback.
    pub fn on_load_items(&mut self, cb: impl FnMut(CalendarDay) + 'static) {
        self.load_cb = Some(Box::new(cb));
    }

    /// The focus provider.
    pub fn provider(&self) -> &FocusProvider {
        &self.provider
    }

    /// Currently selected day.
    pub fn selected(&self) -> CalendarDay {
        self.provider.date()
    }

    /// The month window.
    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    /// The day list.
    pub fn list(&self) -> &DayListWindower<T> {
        &self.list
    }

    /// Items supplied so far.
    pub fn items(&self) -> Option<&SparseDayMap<T>> {
        self.items.as_ref()
    }

    /// Calendar viewport host.
    pub fn calendar_host(&self) -> &C {
        &self.calendar_host
    }

    /// Mutable calendar viewport host.
    pub fn calendar_host_mut(&mut self) -> &mut C {
        &mut self.calendar_host
    }

    /// List viewport host.
    pub fn list_host(&self) -> &L {
        &self.list_host
    }

    /// Mutable list viewport host.
    pub fn list_host_mut(&mut self) -> &mut L {
        &mut self.list_host
    }

    /// Whether the calendar is expanded and scrollable.
    pub fn is_calendar_scrollable(&self) -> bool {
        self.calendar_scrollable
    }

    /// The views appeared. Requests the first load when there are no items.
    pub fn mount(&mut self) {
        self.list.mount();
        self.request_first_load();
    }

    /// The views went away. Pending deferred work is dropped.
    pub fn unmount(&mut self) {
        self.list.unmount();
        self.visible.cancel();
        self.load.cancel();
    }

    /// Supplies a new item map.
    pub fn update_items(&mut self, items: SparseDayMap<T>) {
        self.first_load_pending = false;
        self.list.refresh(&items);
        debug!(days = items.len(), "items updated");
        self.items = Some(items);
    }

    fn request_first_load(&mut self) {
        let empty = self.items.as_ref().is_none_or(SparseDayMap::is_empty);
        if empty && !self.first_load_pending {
            self.first_load_pending = true;
            let day = self.provider.date();
            info!(day = %day, "requesting first load");
            self.emit_load(day);
        }
    }

    /// Scrolls the calendar to `day`.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to_day(
        &mut self,
        day: CalendarDay,
        pixel_offset: f64,
        animated: bool,
    ) -> Result<f64, SyncError> {
        Ok(self
            .window
            .scroll_to_day(day, pixel_offset, animated, &mut self.calendar_host)?)
    }

    /// Scrolls the calendar to the month of `day`.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to_month(&mut self, day: CalendarDay) -> Result<f64, SyncError> {
        Ok(self.window.scroll_to_month(day, &mut self.calendar_host)?)
    }

    /// Applies a selection supplied by the embedding application.
    ///
    /// Nothing happens unless the supplied value changed. A day whose month
    /// has no calendar row is rejected before any state moves.
    #[tracing::instrument(skip(self))]
    pub fn set_selected_day(&mut self, day: CalendarDay) -> Result<(), SyncError> {
        self.window.row_index(day)?;
        let events = self.provider.set_prop_date(day);
        if events.is_empty() {
            return Ok(());
        }
        self.apply_focus()?;
        self.dispatch(&events);
        Ok(())
    }

    /// Jumps to `today`.
    #[tracing::instrument(skip(self))]
    pub fn today_pressed(&mut self, today: CalendarDay) -> Result<(), SyncError> {
        if self.provider.is_disabled() {
            return Ok(());
        }
        self.window.row_index(today)?;
        let events = self.provider.today_pressed(today);
        if events.is_empty() {
            return Ok(());
        }
        self.apply_focus()?;
        self.dispatch(&events);
        Ok(())
    }

    fn apply_focus(&mut self) -> Result<(), SyncError> {
        let focus = self.provider.snapshot();
        if reaction(focus.source, View::MonthWindow) == Reaction::Scroll {
            if focus.source == UpdateSource::PropUpdate {
                self.window.set_focus(focus.date, &mut self.calendar_host)?;
            } else {
                self.window.scroll_to_day(
                    focus.date,
                    self.config.calendar_offset(),
                    true,
                    &mut self.calendar_host,
                )?;
            }
        }
        if reaction(focus.source, View::DayList) == Reaction::Scroll {
            self.select_in_list(focus.date);
        }
        Ok(())
    }

    fn select_in_list(&mut self, day: CalendarDay) {
        let empty = SparseDayMap::new();
        let items = self.items.as_ref().unwrap_or(&empty);
        self.list.select_day(day, items, &mut self.list_host);
    }

    /// A calendar day was tapped.
    ///
    /// While the calendar is expanded the list restarts at the day;
    /// otherwise it scrolls there keeping earlier rows.
    pub fn day_pressed(&mut self, day: CalendarDay) -> Result<(), SyncError> {
        let optimistic = !self.calendar_scrollable;
        self.choose_day(day, optimistic)
    }

    /// Selects `day` from the calendar.
    ///
    /// With `optimistic_scroll` the list keeps its rows and scrolls;
    /// without it the list is reset to start at `day`. The calendar
    /// collapses and a load for the day's month is requested right away.
    #[tracing::instrument(skip(self))]
    pub fn choose_day(&mut self, day: CalendarDay, optimistic_scroll: bool) -> Result<(), SyncError> {
        self.window.row_index(day)?;
        self.calendar_scrollable = false;
        let events = self.provider.set_date(day, UpdateSource::DayPress);

        let empty = SparseDayMap::new();
        let items = self.items.as_ref().unwrap_or(&empty);
        if optimistic_scroll {
            self.list.select_day(day, items, &mut self.list_host);
        } else {
            self.list.set_top_day(day, day, items, &mut self.list_host);
        }

        self.window.scroll_to_day(
            day,
            self.config.calendar_offset(),
            true,
            &mut self.calendar_host,
        )?;
        self.emit_load(day);
        self.dispatch(&events);
        Ok(())
    }

    /// Expands the calendar and scrolls it back to the selection.
    pub fn open_calendar(&mut self) -> Result<(), SyncError> {
        self.calendar_scrollable = true;
        let day = self.provider.date();
        self.window.scroll_to_day(
            day,
            self.config.calendar_offset() + 1.0,
            true,
            &mut self.calendar_host,
        )?;
        Ok(())
    }

    /// Header arrows: moves the calendar by `count` months.
    pub fn page(&mut self, count: i32) -> Result<Option<CalendarDay>, SyncError> {
        let moved = self.window.add_month(count, &mut self.calendar_host)?;
        if let Some(month) = moved {
            if let Some(cb) = self.month_cb.as_mut() {
                cb(month, UpdateSource::PageScroll);
            }
        }
        Ok(moved)
    }

    /// Queues a visible-range report from the calendar host.
    pub fn report_visible_indices(&mut self, now: Duration, indices: &[usize]) {
        self.visible.schedule(now, indices.to_vec());
    }

    /// Handles a scroll offset from the list host.
    ///
    /// A day change inferred from a user drag moves the focus, rebuilds the
    /// list forward from the new day and scrolls the calendar, animated only
    /// within the same month.
    #[tracing::instrument(skip(self))]
    pub fn list_scrolled(&mut self, offset: f64) -> Result<Option<CalendarDay>, SyncError> {
        let Some(day) = self.list.on_scroll(offset) else {
            return Ok(None);
        };
        let animated = is_same_month(day, self.provider.date());
        let events = self.provider.set_date(day, UpdateSource::ListDrag);
        // The list already sits on `day`, so this only extends the rows.
        self.select_in_list(day);
        if reaction(UpdateSource::ListDrag, View::MonthWindow) == Reaction::Scroll {
            self.window.scroll_to_day(
                day,
                self.config.calendar_offset(),
                animated,
                &mut self.calendar_host,
            )?;
        }
        self.dispatch(&events);
        Ok(Some(day))
    }

    /// The user touched the list.
    pub fn list_touched(&mut self) {
        self.list.on_touch();
    }

    /// A list row was measured.
    pub fn row_measured(&mut self, index: usize, height: f64) {
        self.list.on_row_measured(index, height);
    }

    /// Runs deferred work that is due at `now`.
    pub fn tick(&mut self, now: Duration) {
        if let Some(indices) = self.visible.poll(now) {
            let months = self.window.report_visible(&indices);
            if !months.is_empty() {
                if let Some(cb) = self.visible_months_cb.as_mut() {
                    cb(&months);
                }
                if self.items.is_some() && !self.first_load_pending {
                    self.load.schedule(now, months[0]);
                }
            }
        }
        if let Some(month) = self.load.poll(now) {
            self.emit_load(month);
        }
    }

    /// Calendar markings for the current items and selection.
    pub fn markings(&self) -> BTreeMap<String, Marking> {
        match &self.items {
            Some(items) => markings(items, self.provider.date()),
            None => markings(&SparseDayMap::<T>::new(), self.provider.date()),
        }
    }

    /// What the list should render.
    pub fn content(&self) -> ListContent<'_, T> {
        match &self.items {
            Some(items) => self.list.content(items),
            None => ListContent::Loading,
        }
    }

    fn emit_load(&mut self, day: CalendarDay) {
        debug!(month = %day, "load items");
        if let Some(cb) = self.load_cb.as_mut() {
            cb(day);
        }
    }

    fn dispatch(&mut self, events: &[ProviderEvent]) {
        for event in events {
            match *event {
                ProviderEvent::DateChanged { date, source } => {
                    if let Some(cb) = self.day_cb.as_mut() {
                        cb(date, source);
                    }
                }
                ProviderEvent::MonthChanged { month, source } => {
                    if let Some(cb) = self.month_cb.as_mut() {
                        cb(month, source);
                    }
                }
            }
        }
    }
}
