//! Rectangular grids of scalar samples.

use crate::error::{ContourError, Result};

/// A rectangular, row-major grid of finite samples.
///
/// Used both for the caller's sample grid and for the upsampled grid the
/// interpolator produces. Once constructed a grid is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Create a grid from row-major data.
    ///
    /// Requires at least 2 rows and 2 columns, `data.len() == rows * cols`,
    /// and every value finite.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(ContourError::malformed_grid(format!(
                "grid must be at least 2x2, got {}x{}",
                rows, cols
            )));
        }
        if data.len() != rows * cols {
            return Err(ContourError::malformed_grid(format!(
                "expected {} values for a {}x{} grid, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )));
        }
        if let Some(idx) = data.iter().position(|v| !v.is_finite()) {
            return Err(ContourError::malformed_grid(format!(
                "non-finite value {} at row {}, column {}",
                data[idx],
                idx / cols,
                idx % cols
            )));
        }

        Ok(Self { rows, cols, data })
    }

    /// Create a grid from a vector of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ContourError::malformed_grid(format!(
                "ragged grid: row {} has {} values, expected {}",
                idx,
                row.len(),
                width
            )));
        }

        Self::new(rows.into_iter().flatten().collect(), height, width)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of all values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Value at `(row, col)`. Panics when out of range, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Value at signed indices, replicating edge samples outside the grid.
    #[inline]
    pub fn get_clamped(&self, row: isize, col: isize) -> f64 {
        let r = row.clamp(0, self.rows as isize - 1) as usize;
        let c = col.clamp(0, self.cols as isize - 1) as usize;
        self.data[r * self.cols + c]
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `(min, max)` in a single pass.
    pub fn range(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Number of 2x2 cells as `(rows, cols)`.
    pub fn cell_dims(&self) -> (usize, usize) {
        (self.rows - 1, self.cols - 1)
    }
}
