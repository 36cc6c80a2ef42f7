//! Agenda command: print the day-list rows for a selected day.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kalends_calendar::{CalendarDay, Locale};
use kalends_daylist::{DayListConfig, ListContent, SparseDayMap};
use kalends_sync::{CalendarSync, SyncConfig, section_title};
use kalends_viewport::ScrollCommand;
use kalends_window::WindowConfig;

use crate::cli::AgendaArgs;
use crate::config::{load_config, load_items};
use crate::convert;

type HeadlessSync = CalendarSync<String, Vec<ScrollCommand>, Vec<ScrollCommand>>;

/// Run the agenda command.
pub fn run(args: AgendaArgs) -> Result<()> {
    let _cmd = info_span!("agenda").entered();
    let config = load_config(&args.config)?;
    let window_cfg = convert::build_window_config(&config.calendar, &config.window)?;
    let list_cfg = convert::build_daylist_config(&config.list)?;
    let sync_cfg = convert::build_sync_config(&config.calendar, &config.sync)?;
    let locale = convert::build_locale(&config.calendar)?;
    let selected = convert::parse_day_arg(args.selected.as_deref())?;
    let items = load_items(&args.items)?;

    let sync = agenda_sync(selected, items, window_cfg, list_cfg, sync_cfg)?;
    print!(
        "{}",
        render_agenda(
            &sync,
            CalendarDay::today(),
            &config.calendar.day_format,
            &locale
        )
    );
    Ok(())
}

/// Builds a mounted coordinator on `selected` holding `items`.
fn agenda_sync(
    selected: CalendarDay,
    items: SparseDayMap<String>,
    window_cfg: WindowConfig,
    list_cfg: DayListConfig,
    sync_cfg: SyncConfig,
) -> Result<HeadlessSync> {
    let mut sync = CalendarSync::new(
        selected,
        window_cfg,
        list_cfg,
        sync_cfg,
        Vec::new(),
        Vec::new(),
    )
    .context("failed to build agenda")?;
    sync.update_items(items);
    sync.mount();

    let marked = sync.markings().values().filter(|m| m.marked).count();
    info!(%selected, marked, "agenda ready");
    Ok(sync)
}

/// Renders the agenda rows, or a loading notice when the selected day has
/// not been loaded.
fn render_agenda(sync: &HeadlessSync, today: CalendarDay, day_format: &str, locale: &Locale) -> String {
    let rows = match sync.content() {
        ListContent::Loading => return format!("{}: loading...\n", sync.selected()),
        ListContent::Rows(rows) => rows,
    };

    let mut out = String::new();
    for row in rows {
        if row.first_of_day {
            out.push_str(&section_title(row.day, today, day_format, locale));
            out.push('\n');
        }
        match &row.item {
            Some(title) => out.push_str(&format!("  - {title}\n")),
            None => out.push_str("  (nothing planned)\n"),
        }
    }
    out
}
