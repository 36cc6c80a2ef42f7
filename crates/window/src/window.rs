//! The month window state machine.

use kalends_calendar::{CalendarDay, format_day, is_same_month, month_grid};
use kalends_viewport::{ItemLayout, ViewportHost};
use tracing::{debug, warn};

use crate::config::{Orientation, WindowConfig};
use crate::error::WindowError;
use crate::range::WindowRange;
use crate::row::WindowRow;

/// Index-addressable window of month rows around an open date.
///
/// Only rows near the viewport are [`WindowRow::Realized`]; everything else is
/// a placeholder label, so the number of expensive rows stays bounded no
/// matter how wide the window is.
#[derive(Debug, Clone)]
pub struct MonthWindow {
    config: WindowConfig,
    range: WindowRange,
    rows: Vec<WindowRow>,
    labels: Vec<String>,
    current_month: CalendarDay,
    focus: CalendarDay,
    generation: u32,
}

impl MonthWindow {
    /// Builds a window around `open_date`.
    ///
    /// The open date's row and its immediate neighbours start realized (the
    /// first three rows when there is no past range); all other rows start
    /// as placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] if the configuration is invalid.
    pub fn new(open_date: CalendarDay, config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        let range = WindowRange::new(open_date, config.past_range(), config.future_range());
        let past = range.past();

        let mut rows = Vec::with_capacity(range.len());
        let mut labels = Vec::with_capacity(range.len());
        for i in 0..range.len() {
            let anchor = open_date.add_months(i as i32 - past as i32);
            let label = format_day(anchor, config.month_format(), config.locale());
            let initially_realized = if past == 0 {
                i <= 2
            } else {
                (past - 1..=past + 1).contains(&i)
            };
            rows.push(if initially_realized {
                WindowRow::Realized {
                    anchor,
                    generation: 0,
                }
            } else {
                WindowRow::Placeholder {
                    label: label.clone(),
                }
            });
            labels.push(label);
        }

        debug!(rows = range.len(), open = %open_date, "month window built");
        Ok(Self {
            config,
            range,
            rows,
            labels,
            current_month: open_date,
            focus: open_date,
            generation: 0,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Returns the index space.
    pub fn range(&self) -> &WindowRange {
        &self.range
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[WindowRow] {
        &self.rows
    }

    /// Returns row `index`, if any.
    pub fn row(&self, index: usize) -> Option<&WindowRow> {
        self.rows.get(index)
    }

    /// Number of rows currently realized.
    pub fn realized_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_realized()).count()
    }

    /// The month the window considers current (first visible month).
    pub fn current_month(&self) -> CalendarDay {
        self.current_month
    }

    /// The last focus date the window was told about.
    pub fn focus(&self) -> CalendarDay {
        self.focus
    }

    /// Focus generation; bumped by every accepted focus change.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Row index of `day`'s month.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::OutOfWindow`] if the month has no row.
    pub fn row_index(&self, day: CalendarDay) -> Result<usize, WindowError> {
        self.index_for(day)
    }

    /// Extent of one row along the scroll axis.
    pub fn row_extent(&self) -> f64 {
        self.config.row_extent()
    }

    /// Row the host should show first.
    pub fn initial_scroll_index(&self) -> usize {
        self.range.past()
    }

    /// Answers the host's layout query for row `index`.
    pub fn item_layout(&self, index: usize) -> ItemLayout {
        let length = self.row_extent();
        ItemLayout {
            length,
            offset: length * index as f64,
            index,
        }
    }

    /// Applies a visible-range report from the host.
    ///
    /// Rows within the realize radius of a visible index are realized with the
    /// current focus generation; every other row falls back
    /// to its placeholder. Returns the anchors of the visible rows in
    /// ascending index order; the first one becomes the current month.
    /// Indices outside the window are ignored.
    pub fn report_visible(&mut self, visible: &[usize]) -> Vec<CalendarDay> {
        let mut visible: Vec<usize> = visible
            .iter()
            .copied()
            .filter(|i| *i < self.rows.len())
            .collect();
        visible.sort_unstable();
        visible.dedup();

        let radius = self.config.realize_radius();
        let mut months = Vec::with_capacity(visible.len());

        for (i, row) in self.rows.iter_mut().enumerate() {
            let near = visible.iter().any(|v| v.abs_diff(i) <= radius);
            if near {
                if !row.is_realized() {
                    if let Some(anchor) = self.range.anchor_for(i) {
                        *row = WindowRow::Realized {
                            anchor,
                            generation: self.generation,
                        };
                    }
                }
            } else if row.is_realized() {
                *row = WindowRow::Placeholder {
                    label: self.labels[i].clone(),
                };
            }

            if visible.binary_search(&i).is_ok() {
                months.extend(row.anchor());
            }
        }

        if let Some(first) = months.first() {
            self.current_month = *first;
        }
        debug!(
            visible = visible.len(),
            realized = self.realized_count(),
            "visible range applied"
        );
        months
    }

    /// Offset of `day`'s month row plus `pixel_offset`, with the week row
    /// inside the month added for vertical layouts.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::OutOfWindow`] if `day`'s month has no row.
    pub fn day_offset(&self, day: CalendarDay, pixel_offset: f64) -> Result<f64, WindowError> {
        let mut amount = self.month_offset(day)? + pixel_offset;
        if self.config.orientation() == Orientation::Vertical {
            let grid = month_grid(day, self.config.week_start());
            if let Some(week) = grid.week_index_of(day) {
                amount += self.config.week_row_height() * week as f64;
            }
        }
        Ok(amount)
    }

    /// Offset of `day`'s month row.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::OutOfWindow`] if `day`'s month has no row.
    pub fn month_offset(&self, day: CalendarDay) -> Result<f64, WindowError> {
        let index = self.index_for(day)?;
        Ok(self.row_extent() * index as f64)
    }

    /// Scrolls the host to `day`, `pixel_offset` pixels past its position.
    ///
    /// Row state is not touched. Returns the offset that was requested.
    pub fn scroll_to_day(
        &self,
        day: CalendarDay,
        pixel_offset: f64,
        animated: bool,
        host: &mut impl ViewportHost,
    ) -> Result<f64, WindowError> {
        let offset = self.day_offset(day, pixel_offset)?;
        debug!(day = %day, offset, animated, "scroll to day");
        host.scroll_to_offset(offset, animated);
        Ok(offset)
    }

    /// Scrolls the host to the top of `day`'s month, without animation.
    pub fn scroll_to_month(
        &self,
        day: CalendarDay,
        host: &mut impl ViewportHost,
    ) -> Result<f64, WindowError> {
        let offset = self.month_offset(day)?;
        debug!(month = %day, offset, "scroll to month");
        host.scroll_to_offset(offset, false);
        Ok(offset)
    }

    /// Applies a focus date supplied from outside.
    ///
    /// When the date differs from the last known focus the host is scrolled
    /// to its month and every realized row gets a new generation. Returns
    /// whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::OutOfWindow`] without changing any state if the
    /// month has no row.
    pub fn set_focus(
        &mut self,
        day: CalendarDay,
        host: &mut impl ViewportHost,
    ) -> Result<bool, WindowError> {
        if day == self.focus {
            return Ok(false);
        }
        self.month_offset(day)?;
        self.focus = day;
        self.generation = self.generation.wrapping_add(1);
        for row in &mut self.rows {
            if let WindowRow::Realized { generation, .. } = row {
                *generation = self.generation;
            }
        }
        self.scroll_to_month(day, host)?;
        Ok(true)
    }

    /// Moves the current month (header arrows) and scrolls to it.
    ///
    /// Returns the new current month, or `None` when `day` is already in the
    /// current month.
    pub fn update_month(
        &mut self,
        day: CalendarDay,
        host: &mut impl ViewportHost,
    ) -> Result<Option<CalendarDay>, WindowError> {
        if is_same_month(day, self.current_month) {
            return Ok(None);
        }
        self.scroll_to_month(day, host)?;
        self.current_month = day;
        Ok(Some(day))
    }

    /// Moves the current month by `count` months.
    pub fn add_month(
        &mut self,
        count: i32,
        host: &mut impl ViewportHost,
    ) -> Result<Option<CalendarDay>, WindowError> {
        self.update_month(self.current_month.add_months(count), host)
    }

    fn index_for(&self, day: CalendarDay) -> Result<usize, WindowError> {
        self.range.index_of(day).ok_or_else(|| {
            let err = WindowError::OutOfWindow {
                target: day,
                first: self.range.first_anchor(),
                last: self.range.last_anchor(),
            };
            warn!(%err, "navigation target outside month window");
            err
        })
    }
}
