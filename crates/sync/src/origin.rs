//! Origins of focus changes and how each view reacts to them.

use std::fmt;

/// Where the last focus change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateSource {
    /// Initial mount.
    CalendarInit,
    /// The embedding application supplied a new date.
    PropUpdate,
    /// A calendar day was tapped.
    DayPress,
    /// The agenda list was dragged onto another day.
    ListDrag,
    /// The calendar was dragged onto another month.
    CalendarDrag,
    /// A page turn (header arrows or swipe).
    PageScroll,
    /// The today button was pressed.
    TodayPress,
}

impl UpdateSource {
    /// Name used in logs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CalendarInit => "calendarInit",
            Self::PropUpdate => "propUpdate",
            Self::DayPress => "dayPress",
            Self::ListDrag => "listDrag",
            Self::CalendarDrag => "calendarDrag",
            Self::PageScroll => "pageScroll",
            Self::TodayPress => "todayPress",
        }
    }

    /// Returns `true` if the change was produced by dragging `view`.
    pub fn dragged(self, view: View) -> bool {
        match self {
            Self::ListDrag => view.is_list(),
            Self::CalendarDrag => !view.is_list(),
            _ => false,
        }
    }
}

impl fmt::Display for UpdateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view that consumes focus changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// The scrolling month list.
    MonthWindow,
    /// The expandable week/month strip.
    Strip,
    /// The agenda day list.
    DayList,
    /// The agenda section list.
    Sections,
}

impl View {
    /// Returns `true` for the list-style views.
    pub fn is_list(self) -> bool {
        matches!(self, Self::DayList | Self::Sections)
    }
}

/// What a view does about a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Issue an imperative scroll to the new focus.
    Scroll,
    /// Leave the viewport alone; it is already there.
    Skip,
}

/// Reaction of `view` to a change from `source`.
///
/// Nothing scrolls on initial mount, and the view that was dragged does not
/// scroll to where the user already put it. Everything else scrolls.
pub fn reaction(source: UpdateSource, view: View) -> Reaction {
    if source == UpdateSource::CalendarInit || source.dragged(view) {
        Reaction::Skip
    } else {
        Reaction::Scroll
    }
}
