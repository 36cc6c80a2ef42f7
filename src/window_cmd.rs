//! Window command: print month window rows and a scroll offset.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kalends_calendar::CalendarDay;
use kalends_viewport::ScrollCommand;
use kalends_window::{MonthWindow, WindowConfig, WindowRow};

use crate::cli::WindowArgs;
use crate::config::load_config;
use crate::convert;

/// Run the window command.
pub fn run(args: WindowArgs) -> Result<()> {
    let _cmd = info_span!("window").entered();
    let config = load_config(&args.config)?;
    let window_cfg = convert::build_window_config(&config.calendar, &config.window)?;
    let open_date = convert::parse_day_arg(args.date.as_deref())?;
    let scroll_to = args
        .scroll_to
        .as_deref()
        .map(|s| convert::parse_day_arg(Some(s)))
        .transpose()?;

    print!(
        "{}",
        render_window(open_date, window_cfg, &args.visible, scroll_to)?
    );
    Ok(())
}

/// Builds a window on `open_date`, reports `visible` rows and renders the
/// rows, followed by the scroll offset for `scroll_to` when given.
pub fn render_window(
    open_date: CalendarDay,
    config: WindowConfig,
    visible: &[usize],
    scroll_to: Option<CalendarDay>,
) -> Result<String> {
    let mut window = MonthWindow::new(open_date, config).context("invalid month window")?;
    if !visible.is_empty() {
        let months = window.report_visible(visible);
        info!(visible = months.len(), "visible rows reported");
    }

    let mut out = format!(
        "current month: {}\nrealized rows: {}/{}\n",
        window.current_month(),
        window.realized_count(),
        window.rows().len()
    );
    for (index, row) in window.rows().iter().enumerate() {
        let line = match row {
            WindowRow::Realized { anchor, generation } => {
                format!("{index:>5}  {anchor}  (generation {generation})")
            }
            WindowRow::Placeholder { label } => format!("{index:>5}  {label}"),
        };
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(day) = scroll_to {
        let mut host: Vec<ScrollCommand> = Vec::new();
        let offset = window
            .scroll_to_day(day, 0.0, false, &mut host)
            .with_context(|| format!("cannot scroll to {day}"))?;
        out.push_str(&format!("scroll to {day}: offset {offset}\n"));
    }
    Ok(out)
}
