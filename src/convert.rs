//! Pure conversion functions: TOML config structs -> crate API config types.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use kalends_calendar::{CalendarDay, Locale, WeekStart};
use kalends_daylist::DayListConfig;
use kalends_sync::SyncConfig;
use kalends_window::{Orientation, WindowConfig};

use crate::config::{CalendarToml, ListToml, SyncToml, WindowToml};

/// Parses a scroll orientation name.
pub fn parse_orientation(s: &str) -> Result<Orientation> {
    match s.to_lowercase().as_str() {
        "vertical" => Ok(Orientation::Vertical),
        "horizontal" => Ok(Orientation::Horizontal),
        other => bail!("unknown orientation: {other:?}"),
    }
}

/// Parses a date argument, defaulting to today when absent.
pub fn parse_day_arg(arg: Option<&str>) -> Result<CalendarDay> {
    match arg {
        Some(s) => CalendarDay::parse(s).with_context(|| format!("invalid date argument: {s:?}")),
        None => Ok(CalendarDay::today()),
    }
}

/// Resolves the `[calendar].locale` name to a built-in locale table.
pub fn build_locale(calendar: &CalendarToml) -> Result<Locale> {
    Locale::by_name(&calendar.locale).context("invalid [calendar].locale")
}

/// Builds a [`WindowConfig`] from the TOML calendar and window sections.
pub fn build_window_config(calendar: &CalendarToml, window: &WindowToml) -> Result<WindowConfig> {
    let cfg = WindowConfig::new()
        .with_ranges(window.past_range, window.future_range)
        .with_orientation(parse_orientation(&window.orientation)?)
        .with_row_width(window.row_width)
        .with_row_height(window.row_height)
        .with_week_row_height(window.week_row_height)
        .with_realize_radius(window.realize_radius)
        .with_week_start(WeekStart::new(calendar.first_day))
        .with_month_format(&calendar.month_format)
        .with_locale(build_locale(calendar)?);
    cfg.validate().context("invalid [window] config")?;
    Ok(cfg)
}

/// Builds a [`DayListConfig`] from the TOML list section.
pub fn build_daylist_config(list: &ListToml) -> Result<DayListConfig> {
    let cfg = DayListConfig::new().with_forward_days(list.forward_days);
    cfg.validate().context("invalid [list] config")?;
    Ok(cfg)
}

/// Builds a [`SyncConfig`] from the TOML calendar and sync sections.
pub fn build_sync_config(calendar: &CalendarToml, sync: &SyncToml) -> Result<SyncConfig> {
    let cfg = SyncConfig::new()
        .with_load_items_delay(Duration::from_millis(sync.load_items_delay_ms))
        .with_visible_report_delay(Duration::from_millis(sync.visible_report_delay_ms))
        .with_calendar_offset(sync.calendar_offset)
        .with_horizontal(sync.horizontal)
        .with_week_start(WeekStart::new(calendar.first_day))
        .with_strip_heights(sync.closed_height, sync.week_height, sync.knob_height);
    cfg.validate().context("invalid [sync] config")?;
    Ok(cfg)
}
