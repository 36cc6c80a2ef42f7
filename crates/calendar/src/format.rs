//! Pattern formatting for display strings.
//!
//! Display formats are configurable; the day key is not (see
//! [`CalendarDay::key`]).
//!
//! | Token | Output |
//! |-------|--------|
//! | `yyyy` | four-digit year |
//! | `yy` | two-digit year |
//! | `MMMM` / `MMM` | full / short month name |
//! | `MM` / `M` | zero-padded / plain month number |
//! | `dddd` / `ddd` | full / short weekday name |
//! | `dd` / `d` | zero-padded / plain day of month |
//! | `'text'` | literal text |

use crate::day::CalendarDay;
use crate::locale::Locale;

/// Default month label, e.g. `Jun 2024`.
pub const DEFAULT_MONTH_FORMAT: &str = "MMM yyyy";

/// Default agenda section title, e.g. `Monday, Jun 10`.
pub const DEFAULT_DAY_FORMAT: &str = "dddd, MMM d";

/// Formats `day` with an XDate-style `pattern`.
pub fn format_day(day: CalendarDay, pattern: &str, locale: &Locale) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                for lit in chars.by_ref() {
                    if lit == '\'' {
                        break;
                    }
                    out.push(lit);
                }
            }
            'y' | 'M' | 'd' => {
                let mut run = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    run += 1;
                }
                push_token(&mut out, day, c, run, locale);
            }
            other => out.push(other),
        }
    }
    out
}

fn push_token(out: &mut String, day: CalendarDay, token: char, run: usize, locale: &Locale) {
    match (token, run) {
        ('y', 2) => out.push_str(&format!("{:02}", day.year().rem_euclid(100))),
        ('y', _) => out.push_str(&format!("{:04}", day.year())),
        ('M', 1) => out.push_str(&day.month().to_string()),
        ('M', 2) => out.push_str(&format!("{:02}", day.month())),
        ('M', 3) => out.push_str(locale.month_name_short(day.month())),
        ('M', _) => out.push_str(locale.month_name(day.month())),
        ('d', 1) => out.push_str(&day.day().to_string()),
        ('d', 2) => out.push_str(&format!("{:02}", day.day())),
        ('d', 3) => out.push_str(locale.day_name_short(day.weekday())),
        (_, _) => out.push_str(locale.day_name(day.weekday())),
    }
}

/// Formats the placeholder label for a month row (`MMM yyyy` by default).
pub fn month_label(day: CalendarDay, locale: &Locale) -> String {
    format_day(day, DEFAULT_MONTH_FORMAT, locale)
}
