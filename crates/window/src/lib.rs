//! # kalends-window
//!
//! Bounded, lazily realized window of month rows around an open date.
//!
//! Row `i` of a window always represents `open_date + (i - past)` months.
//! Rows near the viewport are [`WindowRow::Realized`], the rest are cheap
//! placeholder labels. Navigation computes pixel offsets and sends them to a
//! [`ViewportHost`](kalends_viewport::ViewportHost).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["WindowConfig"] -->|"MonthWindow::new()"| B["MonthWindow"]
//!     C["visible indices"] -->|"report_visible()"| B
//!     B -->|"visible months"| D["caller"]
//!     B -->|"scroll_to_day() / scroll_to_month()"| E["ViewportHost"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::CalendarDay;
//! use kalends_viewport::ScrollCommand;
//! use kalends_window::{MonthWindow, WindowConfig};
//!
//! let open = CalendarDay::new(2024, 1, 1).unwrap();
//! let mut window = MonthWindow::new(open, WindowConfig::new().with_ranges(12, 12)).unwrap();
//!
//! let months = window.report_visible(&[14]);
//! assert_eq!(months[0].key(), "2024-03-01");
//!
//! let mut host: Vec<ScrollCommand> = Vec::new();
//! let june = CalendarDay::new(2024, 6, 1).unwrap();
//! window.scroll_to_month(june, &mut host).unwrap();
//! assert_eq!(host[0].offset(), Some(360.0 * 17.0));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Window configuration |
//! | `range` | Fixed index-to-month mapping |
//! | `row` | Realized and placeholder rows |
//! | `window` | The window state machine |
//! | `error` | Error types |

mod config;
mod error;
mod range;
mod row;
mod window;

pub use config::{Orientation, WindowConfig};
pub use error::WindowError;
pub use range::WindowRange;
pub use row::WindowRow;
pub use window::MonthWindow;
