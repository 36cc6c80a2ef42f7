use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use approx::assert_abs_diff_eq;
use kalends_calendar::CalendarDay;
use kalends_daylist::{DayListConfig, SparseDayMap};
use kalends_sync::{CalendarSync, SyncConfig, SyncError, UpdateSource};
use kalends_viewport::ScrollCommand;
use kalends_window::{WindowConfig, WindowError};

type Agenda = CalendarSync<&'static str, Vec<ScrollCommand>, Vec<ScrollCommand>>;

fn day(y: i32, m: u32, d: u32) -> CalendarDay {
    CalendarDay::new(y, m, d).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn agenda(selected: CalendarDay) -> Agenda {
    CalendarSync::new(
        selected,
        WindowConfig::new().with_ranges(12, 12),
        DayListConfig::new(),
        SyncConfig::new(),
        Vec::new(),
        Vec::new(),
    )
    .unwrap()
}

fn june_items() -> SparseDayMap<&'static str> {
    let mut items = SparseDayMap::new();
    items.insert(day(2024, 6, 10), vec!["a", "b"]);
    items.insert(day(2024, 6, 11), vec!["c"]);
    items.mark_empty(day(2024, 6, 12));
    items.insert(day(2024, 7, 2), vec!["d"]);
    items
}

fn measured(mut agenda: Agenda, rows: usize, height: f64) -> Agenda {
    for i in 0..rows {
        agenda.row_measured(i, height);
    }
    agenda
}

#[test]
fn list_drag_moves_focus_and_scrolls_only_the_calendar() {
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    a.mount();
    let mut a = measured(a, 4, 100.0);

    let days = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&days);
    a.on_day_changed(move |d, source| sink.borrow_mut().push((d, source)));

    let changed = a.list_scrolled(220.0).unwrap();

    assert_eq!(changed, Some(day(2024, 6, 11)));
    assert_eq!(a.selected(), day(2024, 6, 11));
    assert_eq!(*days.borrow(), vec![(day(2024, 6, 11), UpdateSource::ListDrag)]);
    assert!(a.list_host().is_empty());
    assert_eq!(a.calendar_host().len(), 1);
    // Same month: animated.
    assert!(a.calendar_host()[0].animated());
}

#[test]
fn list_drag_into_other_month_is_not_animated() {
    let mut items = SparseDayMap::new();
    items.insert(day(2024, 6, 30), vec!["late"]);
    items.insert(day(2024, 7, 1), vec!["early"]);
    let mut a = agenda(day(2024, 6, 30));
    a.update_items(items);
    a.mount();
    let mut a = measured(a, 2, 100.0);

    assert_eq!(a.list_scrolled(150.0).unwrap(), Some(day(2024, 7, 1)));
    assert!(!a.calendar_host()[0].animated());
}

#[test]
fn programmatic_list_scroll_does_not_feed_back() {
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    a.mount();
    let mut a = measured(a, 4, 100.0);

    // Day press scrolls the list to 06-11 ...
    a.day_pressed(day(2024, 6, 11)).unwrap();
    assert_eq!(a.list_host().len(), 1);
    assert_abs_diff_eq!(a.list_host()[0].offset().unwrap(), 200.0);

    // ... and the scroll events it causes are not turned into day changes.
    assert_eq!(a.list_scrolled(0.0).unwrap(), None);
    assert_eq!(a.selected(), day(2024, 6, 11));

    // Until the user touches the list.
    a.list_touched();
    assert_eq!(a.list_scrolled(0.0).unwrap(), Some(day(2024, 6, 10)));
}

#[test]
fn day_press_requests_month_load_immediately() {
    let loads = Rc::new(RefCell::new(Vec::new()));
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    let sink = Rc::clone(&loads);
    a.on_load_items(move |d| sink.borrow_mut().push(d));

    a.day_pressed(day(2024, 7, 2)).unwrap();
    assert_eq!(*loads.borrow(), vec![day(2024, 7, 2)]);
}

#[test]
fn expanded_calendar_press_resets_list_top() {
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    a.open_calendar().unwrap();
    assert!(a.is_calendar_scrollable());

    a.day_pressed(day(2024, 6, 11)).unwrap();
    assert!(!a.is_calendar_scrollable());
    assert_eq!(a.list().top_day(), day(2024, 6, 11));
    assert_eq!(a.list().rows()[0].day, day(2024, 6, 11));
}

#[test]
fn collapsed_calendar_press_keeps_lead_in() {
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    a.day_pressed(day(2024, 6, 11)).unwrap();
    assert_eq!(a.list().rows()[0].day, day(2024, 6, 10));
}

#[test]
fn visible_months_trigger_debounced_load() {
    let loads = Rc::new(RefCell::new(Vec::new()));
    let months = Rc::new(RefCell::new(Vec::new()));
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    let load_sink = Rc::clone(&loads);
    a.on_load_items(move |d| load_sink.borrow_mut().push(d));
    let month_sink = Rc::clone(&months);
    a.on_visible_months_changed(move |m| month_sink.borrow_mut().push(m.to_vec()));

    a.report_visible_indices(ms(0), &[13]);
    a.report_visible_indices(ms(10), &[14]);
    a.tick(ms(10));
    assert_eq!(*months.borrow(), vec![vec![day(2024, 8, 10)]]);
    assert!(loads.borrow().is_empty());

    a.report_visible_indices(ms(100), &[15]);
    a.tick(ms(100));
    a.tick(ms(250));
    assert!(loads.borrow().is_empty());
    a.tick(ms(300));
    assert_eq!(*loads.borrow(), vec![day(2024, 9, 10)]);
}

#[test]
fn no_month_loads_while_first_load_is_pending() {
    let loads = Rc::new(RefCell::new(Vec::new()));
    let mut a = agenda(day(2024, 6, 10));
    let sink = Rc::clone(&loads);
    a.on_load_items(move |d| sink.borrow_mut().push(d));
    a.mount();
    a.report_visible_indices(ms(0), &[12]);
    a.tick(ms(0));
    a.tick(ms(1000));
    assert_eq!(*loads.borrow(), vec![day(2024, 6, 10)]);
}

#[test]
fn prop_update_scrolls_calendar_to_month_and_list_to_day() {
    let months = Rc::new(RefCell::new(Vec::new()));
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    a.mount();
    let mut a = measured(a, 4, 50.0);
    let sink = Rc::clone(&months);
    a.on_month_changed(move |d, source| sink.borrow_mut().push((d, source)));

    a.set_selected_day(day(2024, 7, 2)).unwrap();

    assert_eq!(
        a.calendar_host().as_slice(),
        &[ScrollCommand::ToOffset {
            offset: 360.0 * 13.0,
            animated: false
        }]
    );
    assert_eq!(a.list_host().len(), 1);
    assert_eq!(*months.borrow(), vec![(day(2024, 7, 2), UpdateSource::PropUpdate)]);

    // Same prop again: nothing.
    a.set_selected_day(day(2024, 7, 2)).unwrap();
    assert_eq!(a.calendar_host().len(), 1);
}

#[test]
fn out_of_window_prop_is_reported() {
    let mut a = agenda(day(2024, 6, 10));
    let err = a.set_selected_day(day(2030, 1, 1)).unwrap_err();
    assert!(matches!(
        err,
        SyncError::Window(WindowError::OutOfWindow { .. })
    ));
    assert!(a.calendar_host().is_empty());
}

#[test]
fn out_of_window_prop_leaves_every_view_on_the_old_day() {
    let days = Rc::new(RefCell::new(Vec::new()));
    let mut a = agenda(day(2024, 6, 10));
    a.update_items(june_items());
    a.mount();
    let sink = Rc::clone(&days);
    a.on_day_changed(move |d, source| sink.borrow_mut().push((d, source)));

    assert!(a.set_selected_day(day(2030, 1, 1)).is_err());
    assert_eq!(a.selected(), day(2024, 6, 10));
    assert_eq!(a.list().selected(), day(2024, 6, 10));
    assert_eq!(a.window().focus(), day(2024, 6, 10));
    assert!(days.borrow().is_empty());
    assert!(a.list_host().is_empty());

    // The rejected value is not remembered as the current prop.
    a.set_selected_day(day(2024, 6, 11)).unwrap();
    a.set_selected_day(day(2024, 6, 10)).unwrap();
    assert_eq!(a.selected(), day(2024, 6, 10));
    assert_eq!(days.borrow().len(), 2);
}

#[test]
fn out_of_window_today_press_changes_nothing() {
    let mut a = agenda(day(2024, 6, 10));
    assert!(a.today_pressed(day(2031, 3, 3)).is_err());
    assert_eq!(a.selected(), day(2024, 6, 10));
    assert_eq!(a.provider().source(), UpdateSource::CalendarInit);
    assert!(a.calendar_host().is_empty());
}

#[test]
fn list_drag_extends_rows_past_the_first_window() {
    let mut items = SparseDayMap::new();
    for d in kalends_calendar::date_range(day(2024, 6, 1), day(2024, 7, 30)) {
        items.insert(d, vec!["slot"]);
    }
    let mut a = agenda(day(2024, 6, 1));
    a.update_items(items);
    a.mount();
    let mut a = measured(a, 31, 100.0);
    assert_eq!(a.list().rows().last().map(|r| r.day), Some(day(2024, 7, 1)));

    let changed = a.list_scrolled(1900.0).unwrap();

    assert_eq!(changed, Some(day(2024, 6, 20)));
    assert_eq!(a.list().selected(), day(2024, 6, 20));
    // Earlier days stay in place as lead-in; the window runs 31 days on.
    assert_eq!(a.list().rows()[0].day, day(2024, 6, 1));
    assert_eq!(a.list().rows()[19].day, day(2024, 6, 20));
    assert_eq!(a.list().rows().last().map(|r| r.day), Some(day(2024, 7, 20)));
    assert!(a.list_host().is_empty());
}

#[test]
fn today_press_scrolls_both_views() {
    let mut a = agenda(day(2024, 5, 20));
    a.update_items(june_items());
    a.mount();
    a.today_pressed(day(2024, 6, 10)).unwrap();
    assert_eq!(a.selected(), day(2024, 6, 10));
    assert_eq!(a.provider().source(), UpdateSource::TodayPress);
    assert_eq!(a.calendar_host().len(), 1);
    assert_eq!(a.list_host().len(), 1);
}

#[test]
fn header_arrows_emit_month_change() {
    let months = Rc::new(RefCell::new(Vec::new()));
    let mut a = agenda(day(2024, 6, 10));
    let sink = Rc::clone(&months);
    a.on_month_changed(move |d, source| sink.borrow_mut().push((d, source)));

    assert_eq!(a.page(1).unwrap(), Some(day(2024, 7, 10)));
    assert_eq!(a.page(-2).unwrap(), Some(day(2024, 5, 10)));
    assert_eq!(
        *months.borrow(),
        vec![
            (day(2024, 7, 10), UpdateSource::PageScroll),
            (day(2024, 5, 10), UpdateSource::PageScroll),
        ]
    );
    // Paging does not move the selection.
    assert_eq!(a.selected(), day(2024, 6, 10));
}
