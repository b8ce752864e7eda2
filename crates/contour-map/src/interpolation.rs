//! Bicubic upsampling of sample grids.
//!
//! The upsampled grid has `(rows - 1) * factor + 1` rows and
//! `(cols - 1) * factor + 1` columns, so every source sample lands on an
//! output position and is reproduced exactly. Values are clamped into the
//! source range because the cubic kernel overshoots next to sharp steps.

use crate::error::{ContourError, Result};
use crate::grid::Grid;
use rayon::prelude::*;

/// Upper limit on the number of values in an upsampled grid.
pub const MAX_DENSE_VALUES: usize = 1 << 26;

/// Dimensions `(rows, cols)` of a grid upsampled by `factor`.
///
/// Fails when the dense grid would hold more than [`MAX_DENSE_VALUES`] values.
pub fn upsampled_dims(rows: usize, cols: usize, factor: usize) -> Result<(usize, usize)> {
    let scale = |n: usize| {
        n.checked_sub(1)
            .and_then(|n| n.checked_mul(factor))
            .and_then(|n| n.checked_add(1))
    };

    match (scale(rows), scale(cols)) {
        (Some(r), Some(c)) if r.checked_mul(c).is_some_and(|n| n <= MAX_DENSE_VALUES) => Ok((r, c)),
        _ => Err(ContourError::invalid_configuration(format!(
            "interpolation factor {} on a {}x{} grid exceeds {} dense values",
            factor, rows, cols, MAX_DENSE_VALUES
        ))),
    }
}

/// Upsample `grid` by an integer `factor` using Catmull-Rom bicubic interpolation.
///
/// # Arguments
/// * `grid` - Source samples
/// * `factor` - Upsampling factor, `1` returns an identical grid
///
/// # Returns
/// The dense grid, every value within `[grid.min(), grid.max()]`
pub fn interpolate(grid: &Grid, factor: usize) -> Result<Grid> {
    if factor == 0 {
        return Err(ContourError::invalid_configuration(
            "interpolation factor must be >= 1",
        ));
    }
    if factor == 1 {
        return Ok(grid.clone());
    }

    let (min, max) = grid.range();
    let (rows, cols) = upsampled_dims(grid.rows(), grid.cols(), factor)?;
    let scale = factor as f64;

    let mut output = vec![0.0f64; rows * cols];

    // Rows are independent; each writes only its own slice.
    output
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(i, out_row)| {
            let y = i as f64 / scale;
            for (j, slot) in out_row.iter_mut().enumerate() {
                let x = j as f64 / scale;
                *slot = cubic_interpolate(grid, x, y).clamp(min, max);
            }
        });

    tracing::debug!(
        src_rows = grid.rows(),
        src_cols = grid.cols(),
        factor,
        rows,
        cols,
        "Interpolated grid"
    );

    Grid::new(output, rows, cols)
}

/// Bicubic interpolation at fractional `(x, y)` = (column, row).
///
/// Uses the 16 surrounding samples; samples outside the grid replicate the
/// nearest edge value. Not clamped.
pub fn cubic_interpolate(grid: &Grid, x: f64, y: f64) -> f64 {
    let xi = x.floor() as isize;
    let yi = y.floor() as isize;

    let xf = x - xi as f64;
    let yf = y - yi as f64;

    let mut row_values = [0.0f64; 4];
    for (j, slot) in row_values.iter_mut().enumerate() {
        let r = yi + j as isize - 1;
        *slot = cubic_1d(
            grid.get_clamped(r, xi - 1),
            grid.get_clamped(r, xi),
            grid.get_clamped(r, xi + 1),
            grid.get_clamped(r, xi + 2),
            xf,
        );
    }

    cubic_1d(row_values[0], row_values[1], row_values[2], row_values[3], yf)
}

/// 1D cubic interpolation using a Catmull-Rom spline. Returns `p1` at `t = 0`.
#[inline]
fn cubic_1d(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let a = -0.5 * p0 + 1.5 * p1 - 1.5 * p2 + 0.5 * p3;
    let b = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
    let c = -0.5 * p0 + 0.5 * p2;

    ((a * t + b) * t + c) * t + p1
}
