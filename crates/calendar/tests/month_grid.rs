use kalends_calendar::{CalendarDay, WeekStart, month_days, month_grid};

fn every_month() -> impl Iterator<Item = CalendarDay> {
    (1999..=2025).flat_map(|y| (1..=12).map(move |m| CalendarDay::new(y, m, 1).unwrap()))
}

#[test]
fn grid_length_is_whole_weeks() {
    for anchor in every_month() {
        for start in 0..7 {
            let grid = month_grid(anchor, WeekStart::new(start));
            assert_eq!(
                grid.len() % 7,
                0,
                "grid for {anchor} (week start {start}) has {} days",
                grid.len()
            );
            assert!((4..=6).contains(&grid.week_count()));
        }
    }
}

#[test]
fn grid_contains_each_month_day_once() {
    for anchor in every_month() {
        let grid = month_grid(anchor, WeekStart::SUNDAY);
        for d in month_days(anchor) {
            let hits = grid.days().iter().filter(|g| **g == d).count();
            assert_eq!(hits, 1, "{d} appears {hits} times in grid for {anchor}");
        }
    }
}

#[test]
fn first_cell_weekday_matches_week_start() {
    for anchor in every_month() {
        for start in 0..7u32 {
            let grid = month_grid(anchor, WeekStart::new(i64::from(start)));
            assert_eq!(grid.days()[0].weekday(), start);
            assert_eq!(grid.days()[grid.len() - 1].weekday(), (start + 6) % 7);
        }
    }
}

#[test]
fn grid_is_gapless() {
    for anchor in every_month() {
        let grid = month_grid(anchor, WeekStart::MONDAY);
        for pair in grid.days().windows(2) {
            assert_eq!(pair[0].add_days(1), pair[1]);
        }
    }
}

#[test]
fn anchor_day_is_irrelevant() {
    let a = month_grid(CalendarDay::new(2024, 2, 1).unwrap(), WeekStart::SUNDAY);
    let b = month_grid(CalendarDay::new(2024, 2, 29).unwrap(), WeekStart::SUNDAY);
    assert_eq!(a, b);
}

#[test]
fn leap_february_year_rollover() {
    // December 2024 grid spills into January 2025.
    let grid = month_grid(CalendarDay::new(2024, 12, 1).unwrap(), WeekStart::SUNDAY);
    let last = *grid.days().last().unwrap();
    assert_eq!(last, CalendarDay::new(2025, 1, 4).unwrap());

    let feb = month_grid(CalendarDay::new(2024, 2, 1).unwrap(), WeekStart::SUNDAY);
    assert!(feb.days().contains(&CalendarDay::new(2024, 2, 29).unwrap()));
}
