//! Isovalue band boundaries.

use crate::error::{ContourError, Result};
use crate::grid::Grid;

/// Upper limit on the number of band boundaries one grid may produce.
pub const MAX_BOUNDARIES: usize = 100_000;

/// Generate ascending band boundaries over the value range of `dense`.
///
/// Starts at the grid minimum, steps by `step` for
/// `floor((max - min) / step) + 1` values, then appends the grid maximum
/// unconditionally. When the range is a whole multiple of `step` the last
/// band is therefore zero-width; a flat grid yields `[min, max]`.
///
/// A step so small that more than [`MAX_BOUNDARIES`] boundaries would be
/// produced is rejected as an invalid configuration.
pub fn generate_bands(dense: &Grid, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ContourError::invalid_configuration(format!(
            "iso step must be a positive number, got {}",
            step
        )));
    }
    if dense.values().is_empty() {
        return Err(ContourError::malformed_grid("cannot derive bands from an empty grid"));
    }

    let (min, max) = dense.range();
    let steps = ((max - min) / step).floor();
    // `count` values plus the appended maximum
    if !steps.is_finite() || steps + 2.0 > MAX_BOUNDARIES as f64 {
        return Err(ContourError::invalid_configuration(format!(
            "iso step {} over range [{}, {}] exceeds {} band boundaries",
            step, min, max, MAX_BOUNDARIES
        )));
    }
    let count = steps as usize + 1;

    let mut boundaries: Vec<f64> = (0..count).map(|i| min + i as f64 * step).collect();
    boundaries.push(max);

    tracing::debug!(min, max, step, boundaries = boundaries.len(), "Generated band boundaries");

    Ok(boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<f64>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_flat_grid_single_band() {
        let bands = generate_bands(&grid(vec![vec![0.0, 0.0], vec![0.0, 0.0]]), 1.0).unwrap();
        assert_eq!(bands, vec![0.0, 0.0]);
    }

    #[test]
    fn test_aligned_range_duplicates_max() {
        let bands = generate_bands(&grid(vec![vec![0.0, 10.0], vec![0.0, 10.0]]), 5.0).unwrap();
        assert_eq!(bands, vec![0.0, 5.0, 10.0, 10.0]);
    }

    #[test]
    fn test_unaligned_range_reaches_max() {
        let bands = generate_bands(&grid(vec![vec![1.0, 8.5], vec![2.0, 3.0]]), 3.0).unwrap();
        assert_eq!(bands, vec![1.0, 4.0, 7.0, 8.5]);
    }

    #[test]
    fn test_invalid_step() {
        let g = grid(vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                generate_bands(&g, step),
                Err(ContourError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_tiny_step_rejected() {
        let g = grid(vec![vec![0.0, 10.0], vec![0.0, 10.0]]);
        for step in [1e-300, f64::MIN_POSITIVE, 1e-9] {
            assert!(matches!(
                generate_bands(&g, step),
                Err(ContourError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_boundary_limit() {
        let g = grid(vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        let step = 1.0 / (MAX_BOUNDARIES - 2) as f64;
        let bands = generate_bands(&g, step).unwrap();
        assert!(bands.len() <= MAX_BOUNDARIES);

        let step = 1.0 / MAX_BOUNDARIES as f64;
        assert!(generate_bands(&g, step).is_err());
    }
}
