use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kalends calendar and agenda windowing tool.
#[derive(Parser)]
#[command(
    name = "kalends",
    version,
    about = "Calendar grids, month windows and agenda lists"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the grid of one month.
    Month(MonthArgs),
    /// Print the agenda rows for a selected day.
    Agenda(AgendaArgs),
    /// Print the month window rows and a scroll offset.
    Window(WindowArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kalends.toml")]
    pub config: PathBuf,

    /// Day to show and select (defaults to today).
    #[arg(short, long)]
    pub date: Option<String>,

    /// Override the first day of the week (0 = Sunday).
    #[arg(long = "first-day", allow_hyphen_values = true)]
    pub first_day: Option<i64>,
}

/// Arguments for the `agenda` subcommand.
#[derive(clap::Args)]
pub struct AgendaArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kalends.toml")]
    pub config: PathBuf,

    /// Path to the TOML items file.
    #[arg(short, long)]
    pub items: PathBuf,

    /// Selected day (defaults to today).
    #[arg(short, long)]
    pub selected: Option<String>,
}

/// Arguments for the `window` subcommand.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kalends.toml")]
    pub config: PathBuf,

    /// Day the window opens on (defaults to today).
    #[arg(short, long)]
    pub date: Option<String>,

    /// Row indices reported visible before printing.
    #[arg(long, num_args = 1..)]
    pub visible: Vec<usize>,

    /// Day to compute a scroll offset for.
    #[arg(long = "scroll-to")]
    pub scroll_to: Option<String>,
}
