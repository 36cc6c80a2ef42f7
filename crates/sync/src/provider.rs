//! The single authoritative focus date.

use kalends_calendar::{CalendarDay, is_same_month};
use tracing::debug;

use crate::origin::UpdateSource;

/// Notification produced by a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The focus date was set.
    DateChanged {
        /// New focus date.
        date: CalendarDay,
        /// Origin of the change.
        source: UpdateSource,
    },
    /// The focus moved to another month.
    MonthChanged {
        /// New focus date.
        month: CalendarDay,
        /// Origin of the change.
        source: UpdateSource,
    },
}

/// Focus date and the origin of its last change, by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusSnapshot {
    /// Current focus date.
    pub date: CalendarDay,
    /// Origin of the last change.
    pub source: UpdateSource,
}

/// State of the "today" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayButton {
    /// The focus is today; the button is tucked away.
    pub is_today: bool,
    /// The focus is in the past; the icon points down towards today.
    pub points_down: bool,
    /// The button ignores presses while a list is flinging.
    pub disabled: bool,
}

/// Holds the focus date every view follows.
#[derive(Debug, Clone)]
pub struct FocusProvider {
    date: CalendarDay,
    source: UpdateSource,
    prop_date: CalendarDay,
    disabled: bool,
}

impl FocusProvider {
    /// Starts at `date` with origin [`UpdateSource::CalendarInit`].
    pub fn new(date: CalendarDay) -> Self {
        Self {
            date,
            source: UpdateSource::CalendarInit,
            prop_date: date,
            disabled: false,
        }
    }

    /// Current focus date.
    pub fn date(&self) -> CalendarDay {
        self.date
    }

    /// Origin of the last change.
    pub fn source(&self) -> UpdateSource {
        self.source
    }

    /// Copy of the current focus.
    pub fn snapshot(&self) -> FocusSnapshot {
        FocusSnapshot {
            date: self.date,
            source: self.source,
        }
    }

    /// Sets the focus. The origin is recorded before any event is returned.
    ///
    /// Always yields [`ProviderEvent::DateChanged`], followed by
    /// [`ProviderEvent::MonthChanged`] when the month differs.
    pub fn set_date(&mut self, date: CalendarDay, source: UpdateSource) -> Vec<ProviderEvent> {
        let month_changed = !is_same_month(date, self.date);
        self.date = date;
        self.source = source;
        debug!(date = %date, %source, month_changed, "focus set");

        let mut events = vec![ProviderEvent::DateChanged { date, source }];
        if month_changed {
            events.push(ProviderEvent::MonthChanged {
                month: date,
                source,
            });
        }
        events
    }

    /// Applies the date supplied by the embedding application.
    ///
    /// Only a change of the supplied value moves the focus; re-supplying the
    /// same value after the user navigated elsewhere does nothing.
    pub fn set_prop_date(&mut self, date: CalendarDay) -> Vec<ProviderEvent> {
        if date == self.prop_date {
            return Vec::new();
        }
        self.prop_date = date;
        self.set_date(date, UpdateSource::PropUpdate)
    }

    /// Jumps to `today`.
    pub fn today_pressed(&mut self, today: CalendarDay) -> Vec<ProviderEvent> {
        if self.disabled {
            return Vec::new();
        }
        self.set_date(today, UpdateSource::TodayPress)
    }

    /// Enables or disables the today button. Returns whether it changed.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        let changed = disabled != self.disabled;
        self.disabled = disabled;
        changed
    }

    /// Whether the today button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Today button state relative to `today`.
    pub fn today_button(&self, today: CalendarDay) -> TodayButton {
        TodayButton {
            is_today: self.date == today,
            points_down: self.date < today,
            disabled: self.disabled,
        }
    }
}
