//! Sample grid generators for contour map tests.
//!
//! These generators create predictable, verifiable sample patterns as
//! vectors of rows, ready for `Grid::from_rows`.

/// Creates a grid with predictable values.
///
/// Each value is calculated as: `col * 1000 + row`
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 5);        // rows
/// assert_eq!(grid[0].len(), 10);    // columns
/// assert_eq!(grid[0][1], 1000.0);   // col=1, row=0
/// assert_eq!(grid[1][0], 1.0);      // col=0, row=1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<Vec<f64>> {
    (0..height)
        .map(|row| (0..width).map(|col| (col * 1000 + row) as f64).collect())
        .collect()
}

/// Creates a grid that rises linearly from `0` at the left edge to `max` at the right edge.
pub fn create_ramp_grid(width: usize, height: usize, max: f64) -> Vec<Vec<f64>> {
    let span = (width.max(2) - 1) as f64;
    (0..height)
        .map(|_| (0..width).map(|col| col as f64 / span * max).collect())
        .collect()
}

/// Creates a grid with a single smooth peak in the centre.
///
/// Values fall from `peak` at the centre towards 0 at the corners.
pub fn create_peak_grid(width: usize, height: usize, peak: f64) -> Vec<Vec<f64>> {
    let center_x = (width as f64 - 1.0) / 2.0;
    let center_y = (height as f64 - 1.0) / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt().max(1.0);

    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let dx = col as f64 - center_x;
                    let dy = row as f64 - center_y;
                    let dist = (dx * dx + dy * dy).sqrt();
                    peak * (1.0 - dist / max_dist)
                })
                .collect()
        })
        .collect()
}

/// Creates a grid with a sharp step: `low` on the left half, `high` on the right.
///
/// Cubic kernels overshoot next to the step, so this is the adversarial case
/// for range clamping.
pub fn create_step_grid(width: usize, height: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    (0..height)
        .map(|_| {
            (0..width)
                .map(|col| if col < width / 2 { low } else { high })
                .collect()
        })
        .collect()
}

/// Creates a checkerboard of `low` / `high` values, which produces saddle cells.
pub fn create_checkerboard_grid(width: usize, height: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| if (row + col) % 2 == 0 { low } else { high })
                .collect()
        })
        .collect()
}

/// Creates a smooth field of overlapping sine waves, similar to real data.
pub fn create_wave_grid(width: usize, height: usize) -> Vec<Vec<f64>> {
    use std::f64::consts::PI;

    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let fx = col as f64 / width.max(1) as f64;
                    let fy = row as f64 / height.max(1) as f64;
                    let v1 = (fx * PI * 4.0).sin() * 20.0;
                    let v2 = (fy * PI * 4.0).sin() * 20.0;
                    let v3 = ((fx + fy) * PI * 2.0).sin() * 10.0;
                    50.0 + v1 + v2 + v3
                })
                .collect()
        })
        .collect()
}

/// Creates a grid of deterministic pseudo-random values in `[0, 1)`.
///
/// Uses a simple hash-based approach for reproducibility.
pub fn create_noise_grid(width: usize, height: usize, seed: u32) -> Vec<Vec<f64>> {
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| (simple_hash(col as u32, row as u32, seed) % 10_000) as f64 / 10_000.0)
                .collect()
        })
        .collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<Vec<f64>> {
    vec![vec![value; width]; height]
}

/// Flattens rows into row-major order.
pub fn flatten(rows: &[Vec<f64>]) -> Vec<f64> {
    rows.iter().flatten().copied().collect()
}
