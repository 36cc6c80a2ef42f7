//! Agenda section list bound to the focus date.

use kalends_calendar::{CalendarDay, Locale, format_day};
use kalends_viewport::ViewportHost;
use tracing::debug;

use crate::origin::{Reaction, UpdateSource, View, reaction};
use crate::provider::{FocusProvider, FocusSnapshot, ProviderEvent};

/// A list of per-day sections kept in step with the focus date.
///
/// Focus changes scroll the list to the matching section. Dragging the list
/// moves the focus to the top section, but only once the user has actually
/// scrolled and never while the list is scrolling to a section itself.
#[derive(Debug, Clone)]
pub struct AgendaSections {
    sections: Vec<CalendarDay>,
    top: Option<CalendarDay>,
    did_scroll: bool,
    section_scroll: bool,
}

impl AgendaSections {
    /// Creates the section list. The first section starts on top.
    pub fn new(sections: Vec<CalendarDay>) -> Self {
        let top = sections.first().copied();
        Self {
            sections,
            top,
            did_scroll: false,
            section_scroll: false,
        }
    }

    /// Section days in list order.
    pub fn sections(&self) -> &[CalendarDay] {
        &self.sections
    }

    /// Replaces the sections, keeping the scroll state.
    pub fn set_sections(&mut self, sections: Vec<CalendarDay>) {
        self.sections = sections;
    }

    /// Section currently on top.
    pub fn top(&self) -> Option<CalendarDay> {
        self.top
    }

    /// Whether a programmatic section scroll is in flight.
    pub fn is_section_scrolling(&self) -> bool {
        self.section_scroll
    }

    /// Index of the section for `day`.
    pub fn section_index(&self, day: CalendarDay) -> Option<usize> {
        self.sections.iter().position(|s| *s == day)
    }

    /// Follows a focus change by scrolling to its section.
    ///
    /// Returns the section index scrolled to. Days without a section are
    /// left alone.
    pub fn on_focus_changed(
        &mut self,
        focus: FocusSnapshot,
        host: &mut impl ViewportHost,
    ) -> Option<usize> {
        if reaction(focus.source, View::Sections) == Reaction::Skip {
            return None;
        }
        let index = self.section_index(focus.date)?;
        self.section_scroll = true;
        self.top = Some(focus.date);
        host.scroll_to_index(index, true);
        debug!(section = index, day = %focus.date, "scroll to section");
        Some(index)
    }

    /// The host scrolled the list.
    pub fn on_scroll(&mut self) {
        self.did_scroll = true;
    }

    /// The host reports which section is now on top.
    pub fn on_top_section(
        &mut self,
        top: CalendarDay,
        provider: &mut FocusProvider,
    ) -> Vec<ProviderEvent> {
        if self.section_scroll || self.top == Some(top) {
            return Vec::new();
        }
        self.top = Some(top);
        if !self.did_scroll {
            return Vec::new();
        }
        provider.set_date(top, UpdateSource::ListDrag)
    }

    /// A fling started: the today button is disabled until it settles.
    pub fn on_momentum_begin(&mut self, provider: &mut FocusProvider) {
        provider.set_disabled(true);
    }

    /// A fling or a section scroll ended.
    pub fn on_momentum_end(&mut self, provider: &mut FocusProvider) {
        self.section_scroll = false;
        provider.set_disabled(false);
    }
}

/// Uppercased section header, prefixed with the locale's "today" word when
/// `day` is today.
pub fn section_title(day: CalendarDay, today: CalendarDay, pattern: &str, locale: &Locale) -> String {
    let title = format_day(day, pattern, locale).to_uppercase();
    if day == today {
        format!("{}, {title}", locale.today().to_uppercase())
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalends_calendar::DEFAULT_DAY_FORMAT;
    use kalends_viewport::ScrollCommand;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    fn sections() -> AgendaSections {
        AgendaSections::new(vec![day(2024, 6, 10), day(2024, 6, 12), day(2024, 6, 15)])
    }

    #[test]
    fn focus_change_scrolls_to_section() {
        let mut s = sections();
        let mut host: Vec<ScrollCommand> = Vec::new();
        let focus = FocusSnapshot {
            date: day(2024, 6, 12),
            source: UpdateSource::DayPress,
        };
        assert_eq!(s.on_focus_changed(focus, &mut host), Some(1));
        assert_eq!(
            host,
            vec![ScrollCommand::ToIndex {
                index: 1,
                animated: true
            }]
        );
        assert!(s.is_section_scrolling());
    }

    #[test]
    fn list_drag_and_init_do_not_scroll() {
        let mut s = sections();
        let mut host: Vec<ScrollCommand> = Vec::new();
        for source in [UpdateSource::ListDrag, UpdateSource::CalendarInit] {
            let focus = FocusSnapshot {
                date: day(2024, 6, 15),
                source,
            };
            assert_eq!(s.on_focus_changed(focus, &mut host), None);
        }
        assert!(host.is_empty());
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut s = sections();
        let mut host: Vec<ScrollCommand> = Vec::new();
        let focus = FocusSnapshot {
            date: day(2024, 6, 11),
            source: UpdateSource::PropUpdate,
        };
        assert_eq!(s.on_focus_changed(focus, &mut host), None);
        assert!(!s.is_section_scrolling());
    }

    #[test]
    fn top_section_sets_focus_only_after_user_scroll() {
        let mut s = sections();
        let mut provider = FocusProvider::new(day(2024, 6, 10));

        assert!(s.on_top_section(day(2024, 6, 12), &mut provider).is_empty());
        assert_eq!(provider.date(), day(2024, 6, 10));

        s.on_scroll();
        let events = s.on_top_section(day(2024, 6, 15), &mut provider);
        assert_eq!(events.len(), 1);
        assert_eq!(provider.snapshot().source, UpdateSource::ListDrag);
        assert_eq!(provider.date(), day(2024, 6, 15));
    }

    #[test]
    fn section_scroll_suppresses_top_reports_until_momentum_end() {
        let mut s = sections();
        let mut provider = FocusProvider::new(day(2024, 6, 10));
        let mut host: Vec<ScrollCommand> = Vec::new();
        s.on_scroll();
        s.on_focus_changed(
            FocusSnapshot {
                date: day(2024, 6, 15),
                source: UpdateSource::TodayPress,
            },
            &mut host,
        );

        assert!(s.on_top_section(day(2024, 6, 12), &mut provider).is_empty());
        s.on_momentum_end(&mut provider);
        assert_eq!(s.on_top_section(day(2024, 6, 12), &mut provider).len(), 1);
    }

    #[test]
    fn momentum_toggles_today_button() {
        let mut s = sections();
        let mut provider = FocusProvider::new(day(2024, 6, 10));
        s.on_momentum_begin(&mut provider);
        assert!(provider.is_disabled());
        s.on_momentum_end(&mut provider);
        assert!(!provider.is_disabled());
    }

    #[test]
    fn titles() {
        let locale = Locale::english();
        let today = day(2024, 6, 10);
        assert_eq!(
            section_title(day(2024, 6, 11), today, DEFAULT_DAY_FORMAT, &locale),
            "TUESDAY, JUN 11"
        );
        assert_eq!(
            section_title(today, today, DEFAULT_DAY_FORMAT, &locale),
            "TODAY, MONDAY, JUN 10"
        );
    }
}
