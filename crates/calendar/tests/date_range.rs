use kalends_calendar::{CalendarDay, date_range, days_between};

#[test]
fn length_matches_day_difference() {
    let start = CalendarDay::new(2023, 12, 1).unwrap();
    for span in [0i64, 1, 27, 28, 29, 30, 31, 59, 365, 366, 800] {
        let end = start.add_days(span);
        let days = date_range(start, end);
        assert_eq!(
            days.len() as i64,
            days_between(start, end) + 1,
            "span {span}"
        );
        assert_eq!(days.first(), Some(&start));
        assert_eq!(days.last(), Some(&end));
    }
}

#[test]
fn reversed_range_is_empty() {
    let a = CalendarDay::new(2024, 6, 10).unwrap();
    for back in 1..40 {
        assert!(date_range(a, a.add_days(-back)).is_empty());
    }
}

#[test]
fn strictly_increasing() {
    let a = CalendarDay::new(2024, 1, 15).unwrap();
    let days = date_range(a, a.add_days(100));
    assert!(days.windows(2).all(|w| w[0] < w[1]));
}
