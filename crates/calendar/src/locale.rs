//! Locale name tables.
//!
//! Tables are plain values handed to the formatting functions; there is no
//! process-wide current locale.

use crate::error::CalendarError;
use crate::week::WeekStart;

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const EN_DAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const FR_MONTHS: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];
const FR_MONTHS_SHORT: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avril", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];
const FR_DAYS: [&str; 7] = [
    "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
];
const FR_DAYS_SHORT: [&str; 7] = ["Dim.", "Lun.", "Mar.", "Mer.", "Jeu.", "Ven.", "Sam."];

/// Month and weekday names for one language.
///
/// Weekday tables are indexed from Sunday (0) to Saturday (6); month tables
/// from January (0) to December (11).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    month_names: [String; 12],
    month_names_short: [String; 12],
    day_names: [String; 7],
    day_names_short: [String; 7],
    today: String,
}

impl Locale {
    /// Creates a locale from explicit tables.
    pub fn new(
        month_names: [String; 12],
        month_names_short: [String; 12],
        day_names: [String; 7],
        day_names_short: [String; 7],
        today: impl Into<String>,
    ) -> Self {
        Self {
            month_names,
            month_names_short,
            day_names,
            day_names_short,
            today: today.into(),
        }
    }

    /// The English table.
    pub fn english() -> Self {
        Self::from_static(EN_MONTHS, EN_MONTHS_SHORT, EN_DAYS, EN_DAYS_SHORT, "today")
    }

    /// The French table.
    pub fn french() -> Self {
        Self::from_static(
            FR_MONTHS,
            FR_MONTHS_SHORT,
            FR_DAYS,
            FR_DAYS_SHORT,
            "aujourd'hui",
        )
    }

    /// Looks up a built-in table by language tag (`"en"`, `"fr"`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownLocale`] for any other name.
    pub fn by_name(name: &str) -> Result<Self, CalendarError> {
        match name.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            "fr" | "french" => Ok(Self::french()),
            _ => Err(CalendarError::UnknownLocale {
                name: name.to_string(),
            }),
        }
    }

    fn from_static(
        months: [&str; 12],
        months_short: [&str; 12],
        days: [&str; 7],
        days_short: [&str; 7],
        today: &str,
    ) -> Self {
        Self::new(
            months.map(String::from),
            months_short.map(String::from),
            days.map(String::from),
            days_short.map(String::from),
            today,
        )
    }

    /// Full month name for `month` in 1..=12.
    pub fn month_name(&self, month: u32) -> &str {
        &self.month_names[month_slot(month)]
    }

    /// Abbreviated month name for `month` in 1..=12.
    pub fn month_name_short(&self, month: u32) -> &str {
        &self.month_names_short[month_slot(month)]
    }

    /// Full weekday name, `weekday` counted from Sunday.
    pub fn day_name(&self, weekday: u32) -> &str {
        &self.day_names[(weekday % 7) as usize]
    }

    /// Abbreviated weekday name, `weekday` counted from Sunday.
    pub fn day_name_short(&self, weekday: u32) -> &str {
        &self.day_names_short[(weekday % 7) as usize]
    }

    /// The word for "today".
    pub fn today(&self) -> &str {
        &self.today
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

fn month_slot(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

/// Short weekday names rotated so index 0 is the first day of the week.
pub fn weekday_labels(locale: &Locale, week_start: WeekStart) -> [&str; 7] {
    let shift = u32::from(week_start.index());
    std::array::from_fn(|i| locale.day_name_short(i as u32 + shift))
}
