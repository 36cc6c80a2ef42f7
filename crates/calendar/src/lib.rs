//! # kalends-calendar
//!
//! Pure Gregorian date arithmetic for calendar views.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str"] -->|"CalendarDay::parse()"| B["CalendarDay"]
//!     B -->|".key()"| A
//!     B -->|"month_grid()"| C["MonthGrid"]
//!     B -->|"date_range()"| D["Vec of CalendarDay"]
//!     B -->|"page_step()"| B
//!     E["Locale + WeekStart"] -->|"weekday_labels()"| F["[&str; 7]"]
//!     B -->|"format_day()"| G["display String"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::{CalendarDay, Locale, WeekStart, month_grid, weekday_labels};
//!
//! let day = CalendarDay::parse("2024-06-10").unwrap();
//! assert_eq!(day.key(), "2024-06-10");
//!
//! let grid = month_grid(day, WeekStart::MONDAY);
//! assert_eq!(grid.len() % 7, 0);
//!
//! let locale = Locale::english();
//! let labels = weekday_labels(&locale, WeekStart::MONDAY);
//! assert_eq!(labels[0], "Mon");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day` | Calendar day with canonical `yyyy-MM-dd` key |
//! | `week` | First-day-of-week convention |
//! | `range` | Inclusive day ranges, day/month distances |
//! | `compare` | Day and month granularity comparisons |
//! | `grid` | Week-aligned month grids |
//! | `locale` | Month and weekday name tables |
//! | `format` | Pattern formatting for labels and titles |
//! | `page` | Month/week page turns |
//! | `state` | Grid cell state and selectable bounds |
//! | `error` | Error types |

mod compare;
mod day;
mod error;
mod format;
mod grid;
mod locale;
mod page;
mod range;
mod state;
mod week;

pub use compare::{is_on_or_after, is_on_or_before, is_same_day, is_same_month};
pub use day::CalendarDay;
pub use error::CalendarError;
pub use format::{DEFAULT_DAY_FORMAT, DEFAULT_MONTH_FORMAT, format_day, month_label};
pub use grid::{MonthGrid, month_days, month_grid};
pub use locale::{Locale, weekday_labels};
pub use page::{Direction, PageMode, page_step};
pub use range::{date_range, days_between, months_between};
pub use state::{DateBounds, DayState, day_state};
pub use week::WeekStart;
