//! Expandable week/month strip above an agenda.

use std::time::Duration;

use kalends_calendar::{CalendarDay, Direction, PageMode, is_same_month, month_grid, page_step};
use kalends_viewport::ViewportHost;
use kalends_window::{MonthWindow, WindowError};
use tracing::debug;

use crate::config::SyncConfig;
use crate::debounce::Debouncer;
use crate::origin::{Reaction, UpdateSource, View, reaction};
use crate::provider::{FocusProvider, FocusSnapshot, ProviderEvent};

/// Whether the strip shows one week or the whole month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StripPosition {
    /// Full month grid.
    Open,
    /// Single week row.
    #[default]
    Closed,
}

/// A calendar strip that collapses to one week and expands to a month.
///
/// Horizontal strips page month by month when open and week by week when
/// closed; vertical strips follow the focus by scrolling to the day.
#[derive(Debug, Clone)]
pub struct ExpandableStrip {
    config: SyncConfig,
    position: StripPosition,
    height: f64,
    visible_month: CalendarDay,
    week_count: usize,
    collapse: Debouncer<()>,
}

impl ExpandableStrip {
    /// Creates a strip showing `focus` in the given position.
    pub fn new(focus: CalendarDay, config: SyncConfig, position: StripPosition) -> Self {
        let week_count = month_grid(focus, config.week_start()).week_count();
        let height = match position {
            StripPosition::Open => config.open_height(week_count),
            StripPosition::Closed => config.closed_height(),
        };
        Self {
            config,
            position,
            height,
            visible_month: focus.first_of_month(),
            week_count,
            collapse: Debouncer::new(Duration::ZERO),
        }
    }

    /// Current position.
    pub fn position(&self) -> StripPosition {
        self.position
    }

    /// Current height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// First day of the month currently shown.
    pub fn visible_month(&self) -> CalendarDay {
        self.visible_month
    }

    /// Week rows of the focused month.
    pub fn week_count(&self) -> usize {
        self.week_count
    }

    /// Height of the open strip for the focused month.
    pub fn open_height(&self) -> f64 {
        self.config.open_height(self.week_count)
    }

    /// Whether a collapse is waiting for the next tick.
    pub fn collapse_pending(&self) -> bool {
        self.collapse.is_pending()
    }

    /// Follows a focus change.
    ///
    /// Vertical strips scroll to the day. Horizontal strips scroll to the
    /// month only when it is not the one already showing. Returns the
    /// requested offset, if any.
    pub fn on_focus_changed(
        &mut self,
        focus: FocusSnapshot,
        window: &MonthWindow,
        host: &mut impl ViewportHost,
    ) -> Result<Option<f64>, WindowError> {
        if reaction(focus.source, View::Strip) == Reaction::Skip {
            return Ok(None);
        }
        if !self.config.horizontal() {
            return window.scroll_to_day(focus.date, 0.0, true, host).map(Some);
        }
        if is_same_month(focus.date, self.visible_month) {
            return Ok(None);
        }
        window.scroll_to_month(focus.date, host).map(Some)
    }

    /// Handles the months reported visible by the month window.
    ///
    /// A swipe onto another month turns the page in that direction, unless
    /// the focus was just set by a day press. The open height then follows
    /// the week count of the (possibly new) focus month.
    pub fn on_visible_months(
        &mut self,
        months: &[CalendarDay],
        provider: &mut FocusProvider,
    ) -> Vec<ProviderEvent> {
        let Some(first) = months.first().map(|m| m.first_of_month()) else {
            return Vec::new();
        };
        if first == self.visible_month {
            return Vec::new();
        }
        self.visible_month = first;

        let focus = provider.snapshot();
        let mut events = Vec::new();
        if !is_same_month(first, focus.date) && focus.source != UpdateSource::DayPress {
            events = self.page(first > focus.date, provider);
        }

        let week_count = month_grid(provider.date(), self.config.week_start()).week_count();
        if week_count != self.week_count {
            self.week_count = week_count;
            if self.position == StripPosition::Open {
                self.bounce_to(Some(self.open_height()));
            }
        }
        events
    }

    /// Turns one page forward or back (header arrows or swipe).
    ///
    /// Open strips move to the first of the adjacent month, closed strips to
    /// the first day of the adjacent week. Vertical strips do not page.
    pub fn page(&mut self, next: bool, provider: &mut FocusProvider) -> Vec<ProviderEvent> {
        if !self.config.horizontal() {
            return Vec::new();
        }
        let mode = match self.position {
            StripPosition::Open => PageMode::Month,
            StripPosition::Closed => PageMode::Week,
        };
        let target = page_step(
            provider.date(),
            self.config.week_start(),
            mode,
            Direction::forward(next),
        );
        debug!(target = %target, ?mode, "strip page turn");
        provider.set_date(target, UpdateSource::PageScroll)
    }

    /// A day in the strip was tapped: focus it, then collapse on the next
    /// tick.
    pub fn day_pressed(
        &mut self,
        day: CalendarDay,
        now: Duration,
        provider: &mut FocusProvider,
    ) -> Vec<ProviderEvent> {
        let events = provider.set_date(day, UpdateSource::DayPress);
        self.collapse.schedule(now, ());
        events
    }

    /// Runs deferred work. Returns `true` if the strip collapsed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.collapse.poll(now).is_some() && self.position == StripPosition::Open {
            self.bounce_to(Some(self.config.closed_height()));
            return true;
        }
        false
    }

    /// Follows the knob while it is being dragged.
    pub fn drag_to(&mut self, height: f64) {
        self.height = height.clamp(self.config.closed_height(), self.open_height());
    }

    /// Knob released: snap open or closed.
    pub fn release(&mut self) {
        self.bounce_to(None);
    }

    fn bounce_to(&mut self, target: Option<f64>) {
        let threshold = self.open_height() / 1.75;
        let snapped = if self.height >= threshold {
            self.open_height()
        } else {
            self.config.closed_height()
        };
        self.height = target.unwrap_or(snapped);
        self.position = if self.height >= threshold {
            StripPosition::Open
        } else {
            StripPosition::Closed
        };
        debug!(height = self.height, position = ?self.position, "strip bounced");
    }
}
