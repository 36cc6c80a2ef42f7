use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use kalends_calendar::{CalendarDay, DEFAULT_DAY_FORMAT, DEFAULT_MONTH_FORMAT};
use kalends_daylist::SparseDayMap;

/// Top-level Kalends configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KalendsConfig {
    /// Calendar display settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Month window settings.
    #[serde(default)]
    pub window: WindowToml,

    /// Day list settings.
    #[serde(default)]
    pub list: ListToml,

    /// Synchronization settings.
    #[serde(default)]
    pub sync: SyncToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default)]
    pub first_day: i64,
    #[serde(default = "default_month_format")]
    pub month_format: String,
    #[serde(default = "default_day_format")]
    pub day_format: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            first_day: 0,
            month_format: default_month_format(),
            day_format: default_day_format(),
            locale: default_locale(),
        }
    }
}

fn default_month_format() -> String {
    DEFAULT_MONTH_FORMAT.to_string()
}
fn default_day_format() -> String {
    DEFAULT_DAY_FORMAT.to_string()
}
fn default_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    #[serde(default = "default_range")]
    pub past_range: usize,
    #[serde(default = "default_range")]
    pub future_range: usize,
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_row_width")]
    pub row_width: f64,
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    #[serde(default = "default_week_row_height")]
    pub week_row_height: f64,
    #[serde(default = "default_realize_radius")]
    pub realize_radius: usize,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            past_range: default_range(),
            future_range: default_range(),
            orientation: default_orientation(),
            row_width: default_row_width(),
            row_height: default_row_height(),
            week_row_height: default_week_row_height(),
            realize_radius: default_realize_radius(),
        }
    }
}

fn default_range() -> usize {
    50
}
fn default_orientation() -> String {
    "vertical".to_string()
}
fn default_row_width() -> f64 {
    375.0
}
fn default_row_height() -> f64 {
    360.0
}
fn default_week_row_height() -> f64 {
    46.0
}
fn default_realize_radius() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListToml {
    #[serde(default = "default_forward_days")]
    pub forward_days: usize,
}

impl Default for ListToml {
    fn default() -> Self {
        Self {
            forward_days: default_forward_days(),
        }
    }
}

fn default_forward_days() -> usize {
    31
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncToml {
    #[serde(default = "default_load_items_delay_ms")]
    pub load_items_delay_ms: u64,
    #[serde(default)]
    pub visible_report_delay_ms: u64,
    #[serde(default)]
    pub calendar_offset: f64,
    #[serde(default = "default_true")]
    pub horizontal: bool,
    #[serde(default = "default_closed_height")]
    pub closed_height: f64,
    #[serde(default = "default_week_row_height")]
    pub week_height: f64,
    #[serde(default = "default_knob_height")]
    pub knob_height: f64,
}

impl Default for SyncToml {
    fn default() -> Self {
        Self {
            load_items_delay_ms: default_load_items_delay_ms(),
            visible_report_delay_ms: 0,
            calendar_offset: 0.0,
            horizontal: true,
            closed_height: default_closed_height(),
            week_height: default_week_row_height(),
            knob_height: default_knob_height(),
        }
    }
}

fn default_load_items_delay_ms() -> u64 {
    200
}
fn default_true() -> bool {
    true
}
fn default_closed_height() -> f64 {
    120.0
}
fn default_knob_height() -> f64 {
    20.0
}

/// Items file: `[items]` maps `yyyy-MM-dd` keys to item titles.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemsToml {
    #[serde(default)]
    pub items: BTreeMap<String, Vec<String>>,
}

/// Loads the project config, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<KalendsConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok(KalendsConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Loads an items file into a sparse day map.
///
/// Keys that are not dates are skipped with a warning. Several keys naming
/// the same day are merged in file order.
pub fn load_items(path: &Path) -> Result<SparseDayMap<String>> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items file: {}", path.display()))?;
    let parsed: ItemsToml = toml::from_str(&toml_str).context("failed to parse items TOML")?;
    Ok(items_to_map(parsed))
}

fn items_to_map(parsed: ItemsToml) -> SparseDayMap<String> {
    let mut map = SparseDayMap::new();
    for (key, titles) in parsed.items {
        match CalendarDay::parse(&key) {
            Ok(day) => {
                map.mark_empty(day);
                for title in titles {
                    map.push(day, title);
                }
            }
            Err(e) => warn!(key = %key, error = %e, "skipping items entry"),
        }
    }
    info!(days = map.len(), items = map.item_count(), "items loaded");
    map
}
