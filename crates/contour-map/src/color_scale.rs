//! Per-band colour scales.

use crate::color::{ColorMode, Hsb};
use crate::error::{ContourError, Result};

/// Upper end of the brightness ramp (percent).
pub const MONOCHROME_MAX_BRIGHTNESS: f64 = 100.0;

/// Upper end of the hue ramp (degrees).
pub const COLOR_MAX_HUE: f64 = 250.0;

/// `n` evenly spaced points from `start` to `stop`.
///
/// Points `0..n-1` are `start + i * step`, rounded half away from zero when
/// `round_to_int` is set. The last point is always exactly `stop` and is
/// never rounded, so a ramp whose step is fractional ends with an uneven
/// final step.
pub fn linspace(start: f64, stop: f64, n: usize, round_to_int: bool) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(ContourError::invalid_configuration(format!(
            "linspace needs at least 2 points, got {}",
            n
        )));
    }

    let step = (stop - start) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n - 1)
        .map(|i| {
            let v = start + i as f64 * step;
            if round_to_int {
                v.round()
            } else {
                v
            }
        })
        .collect();
    points.push(stop);

    Ok(points)
}

/// One colour per band for the given boundaries.
///
/// The result always has `boundaries.len() - 1` entries. A single band gets
/// the colour at the top of the ramp.
pub fn color_scale(boundaries: &[f64], mode: ColorMode) -> Result<Vec<Hsb>> {
    let bands = boundaries.len().saturating_sub(1);
    if bands == 0 {
        return Err(ContourError::invalid_configuration(format!(
            "need at least 2 band boundaries for a color scale, got {}",
            boundaries.len()
        )));
    }

    let scale: Vec<Hsb> = match mode {
        ColorMode::Monochromatic => ramp(MONOCHROME_MAX_BRIGHTNESS, bands)?
            .into_iter()
            .map(|brightness| Hsb::new(0.0, 0.0, brightness / 100.0))
            .collect(),
        ColorMode::Color => ramp(COLOR_MAX_HUE, bands)?
            .into_iter()
            .rev()
            .map(|hue| Hsb::new(hue, 1.0, 1.0))
            .collect(),
    };

    tracing::debug!(mode = %mode, colors = bands, "Generated color scale");

    Ok(scale)
}

fn ramp(stop: f64, n: usize) -> Result<Vec<f64>> {
    if n == 1 {
        return Ok(vec![stop]);
    }
    linspace(0.0, stop, n, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_rounds_all_but_last() {
        let points = linspace(0.0, 100.0, 4, true).unwrap();
        // 33.33 -> 33, 66.67 -> 67
        assert_eq!(points, vec![0.0, 33.0, 67.0, 100.0]);
    }

    #[test]
    fn test_linspace_half_rounds_up() {
        // step 2.5: 0, 2.5 -> 3, 5, 7.5 -> 8, 10
        let points = linspace(0.0, 10.0, 5, true).unwrap();
        assert_eq!(points, vec![0.0, 3.0, 5.0, 8.0, 10.0]);
    }

    #[test]
    fn test_linspace_unrounded() {
        let points = linspace(0.0, 1.0, 3, false).unwrap();
        assert_eq!(points, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_linspace_too_few_points() {
        assert!(matches!(
            linspace(0.0, 1.0, 1, true),
            Err(ContourError::InvalidConfiguration(_))
        ));
        assert!(linspace(0.0, 1.0, 0, false).is_err());
    }

    #[test]
    fn test_single_band_scale() {
        let mono = color_scale(&[0.0, 0.0], ColorMode::Monochromatic).unwrap();
        assert_eq!(mono, vec![Hsb::new(0.0, 0.0, 1.0)]);

        let color = color_scale(&[0.0, 0.0], ColorMode::Color).unwrap();
        assert_eq!(color, vec![Hsb::new(250.0, 1.0, 1.0)]);
    }

    #[test]
    fn test_no_bands_rejected() {
        assert!(color_scale(&[1.0], ColorMode::Color).is_err());
        assert!(color_scale(&[], ColorMode::Monochromatic).is_err());
    }
}
