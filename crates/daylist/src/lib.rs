//! # kalends-daylist
//!
//! Expands sparse, day-keyed agenda data into a flat, height-tracked row list.
//!
//! A day that was never loaded is *unknown* and produces no rows. A day that
//! was loaded with nothing in it produces one placeholder row. The
//! [`DayListWindower`] keeps the rows, the measured heights and the scroll
//! mode of one agenda list.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["SparseDayMap"] -->|"materialize_day()"| B["Vec of DayRow"]
//!     A -->|"DayListWindower::select_day()"| C["rows + lead-in"]
//!     C -->|"scroll_to_offset"| D["ViewportHost"]
//!     D -->|"on_scroll() / on_row_measured()"| E["RowHeightTable"]
//!     E -->|"visible day"| F["caller"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::CalendarDay;
//! use kalends_daylist::{DayListConfig, DayListWindower, SparseDayMap};
//!
//! let june = |d| CalendarDay::new(2024, 6, d).unwrap();
//!
//! let mut map = SparseDayMap::new();
//! map.insert(june(10), vec!["dentist"]);
//! map.mark_empty(june(12));
//!
//! let mut list = DayListWindower::new(june(10), DayListConfig::new()).unwrap();
//! list.refresh(&map);
//!
//! assert_eq!(list.rows().len(), 2);
//! assert_eq!(list.rows()[0].item, Some("dentist"));
//! assert!(list.rows()[1].is_placeholder());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sparse` | Day-keyed items with unknown vs. empty days |
//! | `row` | Agenda rows and per-day materialization |
//! | `heights` | Measured row heights and offset math |
//! | `windower` | Row list state for one agenda |
//! | `markings` | Calendar marks derived from items |
//! | `config` | Windower configuration |
//! | `error` | Error types |

mod config;
mod error;
mod heights;
mod markings;
mod row;
mod sparse;
mod windower;

pub use config::DayListConfig;
pub use error::DayListError;
pub use heights::RowHeightTable;
pub use markings::{Marking, markings};
pub use row::{DayRow, materialize_day};
pub use sparse::{DayEntry, SparseDayMap};
pub use windower::{DayListWindower, ListContent, ScrollMode, WindowBuild};
