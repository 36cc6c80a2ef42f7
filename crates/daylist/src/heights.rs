//! Measured row heights.

use crate::error::DayListError;

/// Last measured pixel height per row index.
///
/// Unmeasured rows count as 0. The table only grows: a measurement for a
/// row that has since scrolled away or been replaced is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowHeightTable {
    heights: Vec<f64>,
}

impl RowHeightTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the height of row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DayListError::InvalidHeight`] for negative or non-finite
    /// heights; the table is left unchanged.
    pub fn record(&mut self, index: usize, height: f64) -> Result<(), DayListError> {
        if !height.is_finite() || height < 0.0 {
            return Err(DayListError::InvalidHeight { index, height });
        }
        if index >= self.heights.len() {
            self.heights.resize(index + 1, 0.0);
        }
        self.heights[index] = height;
        Ok(())
    }

    /// Height of row `index`, 0 when unmeasured.
    pub fn height(&self, index: usize) -> f64 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    /// Number of slots in the table (highest measured index + 1).
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Pixel offset of the top of row `count`, i.e. the sum of the heights
    /// of rows `0..count`.
    pub fn offset_of(&self, count: usize) -> f64 {
        self.heights.iter().take(count).sum()
    }

    /// Row index under a vertical scroll offset.
    ///
    /// Walks the table until a row's midpoint reaches `offset`. When every
    /// measured row lies above the offset the result is [`len`](Self::len).
    pub fn row_at_offset(&self, offset: f64) -> usize {
        let mut top = 0.0;
        for (i, h) in self.heights.iter().enumerate() {
            if top + h / 2.0 >= offset {
                return i;
            }
            top += h;
        }
        self.heights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn table(heights: &[f64]) -> RowHeightTable {
        let mut t = RowHeightTable::new();
        for (i, h) in heights.iter().enumerate() {
            t.record(i, *h).unwrap();
        }
        t
    }

    #[test]
    fn unmeasured_rows_are_zero() {
        let mut t = RowHeightTable::new();
        t.record(3, 80.0).unwrap();
        assert_eq!(t.len(), 4);
        assert_abs_diff_eq!(t.height(0), 0.0);
        assert_abs_diff_eq!(t.height(3), 80.0);
        assert_abs_diff_eq!(t.height(9), 0.0);
        assert_abs_diff_eq!(t.offset_of(10), 80.0);
    }

    #[test]
    fn never_shrinks() {
        let mut t = table(&[10.0, 20.0, 30.0]);
        t.record(0, 15.0).unwrap();
        assert_eq!(t.len(), 3);
        assert_abs_diff_eq!(t.offset_of(3), 65.0);
    }

    #[test]
    fn rejects_bad_heights() {
        let mut t = table(&[10.0]);
        assert!(t.record(0, -1.0).is_err());
        assert!(t.record(5, f64::INFINITY).is_err());
        assert_eq!(t.len(), 1);
        assert_abs_diff_eq!(t.height(0), 10.0);
    }

    #[test]
    fn row_at_offset_uses_midpoints() {
        let t = table(&[100.0, 100.0, 100.0]);
        assert_eq!(t.row_at_offset(0.0), 0);
        assert_eq!(t.row_at_offset(50.0), 0);
        assert_eq!(t.row_at_offset(50.5), 1);
        assert_eq!(t.row_at_offset(150.0), 1);
        assert_eq!(t.row_at_offset(251.0), 3);
    }
}
