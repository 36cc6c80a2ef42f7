//! Month command: print one week-aligned month grid.

use anyhow::Result;
use tracing::{debug, info_span};

use kalends_calendar::{
    CalendarDay, DateBounds, DayState, Locale, WeekStart, day_state, format_day, month_grid,
    weekday_labels,
};

use crate::cli::MonthArgs;
use crate::config::load_config;
use crate::convert;

/// Run the month command.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let config = load_config(&args.config)?;
    let selected = convert::parse_day_arg(args.date.as_deref())?;
    let locale = convert::build_locale(&config.calendar)?;
    let week_start = WeekStart::new(args.first_day.unwrap_or(config.calendar.first_day));
    debug!(%selected, week_start = week_start.index(), "rendering month");

    print!(
        "{}",
        render_month(
            selected,
            CalendarDay::today(),
            week_start,
            &config.calendar.month_format,
            &locale
        )
    );
    Ok(())
}

/// Renders the grid of `selected`'s month.
///
/// Each week line starts with its ISO week number. Days outside the month
/// are shown as `.`, today is suffixed with `*` and the selected day is
/// bracketed.
pub fn render_month(
    selected: CalendarDay,
    today: CalendarDay,
    week_start: WeekStart,
    month_format: &str,
    locale: &Locale,
) -> String {
    let grid = month_grid(selected, week_start);
    let bounds = DateBounds::unbounded();
    let mut out = format!("{}\n", format_day(grid.month(), month_format, locale));

    out.push_str("    ");
    for label in weekday_labels(locale, week_start) {
        out.push_str(&format!(" {label:>4}"));
    }
    out.push('\n');

    for week in grid.weeks() {
        out.push_str(&format!("W{:02}", week[0].iso_week()));
        out.push(' ');
        for &day in week {
            let cell = match day_state(day, grid.month(), today, &bounds, false) {
                DayState::Disabled => ".".to_string(),
                DayState::Today => format!("{}*", day.day()),
                DayState::Normal => day.day().to_string(),
            };
            let cell = if day == selected {
                format!("[{cell}]")
            } else {
                cell
            };
            out.push_str(&format!(" {cell:>4}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalends_calendar::DEFAULT_MONTH_FORMAT;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn june_2024_starting_sunday() {
        let out = render_month(
            day(2024, 6, 12),
            day(2024, 6, 10),
            WeekStart::SUNDAY,
            DEFAULT_MONTH_FORMAT,
            &Locale::english(),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Jun 2024");
        assert!(lines[1].trim_start().starts_with("Sun"));
        // title, header and six week rows
        assert_eq!(lines.len(), 8);
        assert!(lines[2].ends_with("   1"));
        assert!(lines[4].contains(" 10*"));
        assert!(lines[4].contains("[12]"));
        assert!(lines[7].contains("30"));
    }

    #[test]
    fn monday_start_shifts_header_and_padding() {
        let out = render_month(
            day(2024, 6, 1),
            day(2000, 1, 1),
            WeekStart::MONDAY,
            DEFAULT_MONTH_FORMAT,
            &Locale::english(),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].trim_start().starts_with("Mon"));
        assert!(lines[2].starts_with("W22"));
        assert_eq!(lines[2].matches(" .").count(), 5);
        assert!(lines[2].contains(" [1]"));
        assert!(lines[2].ends_with("    2"));
    }
}
