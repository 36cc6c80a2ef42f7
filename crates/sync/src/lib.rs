//! # kalends-sync
//!
//! Keeps the month window, the agenda list and the expandable strip on one
//! focus date without feedback loops.
//!
//! Every focus change carries an [`UpdateSource`]. Whether a view scrolls in
//! response is a pure function of that origin and the view ([`reaction`]):
//! the view the user dragged stays put, and nothing scrolls on initial
//! mount. Deferred work (visible-range reports, load requests, strip
//! collapse) goes through single-slot [`Debouncer`]s driven by the caller's
//! clock.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     P["FocusProvider (date + UpdateSource)"]
//!     W["MonthWindow"] -->|"visible months"| S["ExpandableStrip"]
//!     S -->|"PageScroll / DayPress"| P
//!     L["DayListWindower"] -->|"ListDrag"| P
//!     A["AgendaSections"] -->|"ListDrag"| P
//!     P -->|"reaction() == Scroll"| W
//!     P -->|"reaction() == Scroll"| L
//!     P -->|"reaction() == Scroll"| A
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::CalendarDay;
//! use kalends_daylist::{DayListConfig, SparseDayMap};
//! use kalends_sync::{CalendarSync, SyncConfig};
//! use kalends_viewport::ScrollCommand;
//! use kalends_window::WindowConfig;
//!
//! let june = |d| CalendarDay::new(2024, 6, d).unwrap();
//! let mut sync: CalendarSync<&str, Vec<ScrollCommand>, Vec<ScrollCommand>> = CalendarSync::new(
//!     june(10),
//!     WindowConfig::new(),
//!     DayListConfig::new(),
//!     SyncConfig::new(),
//!     Vec::new(),
//!     Vec::new(),
//! )
//! .unwrap();
//!
//! let mut items = SparseDayMap::new();
//! items.insert(june(12), vec!["lunch"]);
//! sync.update_items(items);
//!
//! sync.day_pressed(june(12)).unwrap();
//! assert_eq!(sync.selected(), june(12));
//! assert_eq!(sync.calendar_host().len(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `origin` | Update sources, views and the reaction rule |
//! | `provider` | Focus date, change events, today button |
//! | `debounce` | Single-slot deferred channels |
//! | `strip` | Expandable week/month strip |
//! | `sections` | Agenda section list |
//! | `coordinator` | Month window + day list coordinator |
//! | `config` | Synchronization configuration |
//! | `error` | Error types |

mod config;
mod coordinator;
mod debounce;
mod error;
mod origin;
mod provider;
mod sections;
mod strip;

pub use config::SyncConfig;
pub use coordinator::{CalendarSync, DayCallback, LoadItemsCallback, VisibleMonthsCallback};
pub use debounce::Debouncer;
pub use error::SyncError;
pub use origin::{Reaction, UpdateSource, View, reaction};
pub use provider::{FocusProvider, FocusSnapshot, ProviderEvent, TodayButton};
pub use sections::{AgendaSections, section_title};
pub use strip::{ExpandableStrip, StripPosition};
