//! Configuration for a month window.

use kalends_calendar::{DEFAULT_MONTH_FORMAT, Locale, WeekStart};

use crate::error::WindowError;

/// Scroll axis of the month list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Months side by side; one row is `row_width` wide.
    Horizontal,
    /// Months stacked; one row is `row_height` tall.
    #[default]
    Vertical,
}

/// Configuration for a [`MonthWindow`](crate::MonthWindow).
///
/// # Example
///
/// ```
/// use kalends_window::{Orientation, WindowConfig};
///
/// let config = WindowConfig::new()
///     .with_ranges(12, 12)
///     .with_orientation(Orientation::Horizontal)
///     .with_row_width(390.0);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.row_extent(), 390.0);
/// ```
#[derive(Debug, Clone)]
pub struct WindowConfig {
    past_range: usize,
    future_range: usize,
    orientation: Orientation,
    row_width: f64,
    row_height: f64,
    week_row_height: f64,
    realize_radius: usize,
    week_start: WeekStart,
    month_format: String,
    locale: Locale,
}

impl WindowConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: 50 months back and forward, vertical, rows 375×360 px,
    /// week rows 46 px, realize radius 1, Sunday week start, `MMM yyyy`
    /// labels in English.
    pub fn new() -> Self {
        Self {
            past_range: 50,
            future_range: 50,
            orientation: Orientation::Vertical,
            row_width: 375.0,
            row_height: 360.0,
            week_row_height: 46.0,
            realize_radius: 1,
            week_start: WeekStart::SUNDAY,
            month_format: DEFAULT_MONTH_FORMAT.to_string(),
            locale: Locale::english(),
        }
    }

    /// Sets how many months precede and follow the open date.
    pub fn with_ranges(mut self, past: usize, future: usize) -> Self {
        self.past_range = past;
        self.future_range = future;
        self
    }

    /// Sets the scroll axis.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the row width used by horizontal layouts.
    pub fn with_row_width(mut self, width: f64) -> Self {
        self.row_width = width;
        self
    }

    /// Sets the row height used by vertical layouts.
    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Sets the height of one week row inside a month.
    pub fn with_week_row_height(mut self, height: f64) -> Self {
        self.week_row_height = height;
        self
    }

    /// Sets how many rows around a visible row stay realized.
    pub fn with_realize_radius(mut self, radius: usize) -> Self {
        self.realize_radius = radius;
        self
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the placeholder label pattern.
    pub fn with_month_format(mut self, format: impl Into<String>) -> Self {
        self.month_format = format.into();
        self
    }

    /// Sets the locale used for placeholder labels.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the number of months before the open date.
    pub fn past_range(&self) -> usize {
        self.past_range
    }

    /// Returns the number of months after the open date.
    pub fn future_range(&self) -> usize {
        self.future_range
    }

    /// Returns the scroll axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the configured row width.
    pub fn row_width(&self) -> f64 {
        self.row_width
    }

    /// Returns the configured row height.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Returns the week row height.
    pub fn week_row_height(&self) -> f64 {
        self.week_row_height
    }

    /// Returns the realize radius.
    pub fn realize_radius(&self) -> usize {
        self.realize_radius
    }

    /// Returns the first day of the week.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns the placeholder label pattern.
    pub fn month_format(&self) -> &str {
        &self.month_format
    }

    /// Returns the label locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Extent of one month row along the scroll axis.
    pub fn row_extent(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.row_width,
            Orientation::Vertical => self.row_height,
        }
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), WindowError> {
        for (name, value) in [
            ("row_width", self.row_width),
            ("row_height", self.row_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(WindowError::InvalidExtent { name, value });
            }
        }
        if !self.week_row_height.is_finite() || self.week_row_height < 0.0 {
            return Err(WindowError::InvalidExtent {
                name: "week_row_height",
                value: self.week_row_height,
            });
        }
        if self.month_format.trim().is_empty() {
            return Err(WindowError::EmptyMonthFormat);
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}
