//! Configuration for contour map rendering.

use crate::color::ColorMode;
use crate::error::{ContourError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a contour map.
///
/// The sample grid itself is supplied separately as a [`crate::Grid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourMapConfig {
    /// Spacing between band boundaries, in data units.
    pub iso_step: f64,

    /// Integer upsampling factor (1 = no upsampling).
    pub interpolation_factor: usize,

    /// Colour ramp for the bands.
    pub color_mode: ColorMode,

    /// Width of the drawing surface.
    pub surface_width: f64,

    /// Height of the drawing surface.
    pub surface_height: f64,
}

impl Default for ContourMapConfig {
    fn default() -> Self {
        Self {
            iso_step: 0.1,
            interpolation_factor: 3,
            color_mode: ColorMode::Color,
            surface_width: 400.0,
            surface_height: 200.0,
        }
    }
}

impl ContourMapConfig {
    /// Load configuration from environment variables on top of the defaults.
    ///
    /// Recognizes `ISO_STEP`, `INTERPOLATION_FACTOR`, `COLOR_MODE`,
    /// `SURFACE_WIDTH` and `SURFACE_HEIGHT`. Unparsable values are errors.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Apply environment overrides to this configuration.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test maps, ...).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ISO_STEP") {
            self.iso_step = parse_var("ISO_STEP", &val)?;
        }

        if let Some(val) = lookup("INTERPOLATION_FACTOR") {
            self.interpolation_factor = parse_var("INTERPOLATION_FACTOR", &val)?;
        }

        if let Some(val) = lookup("COLOR_MODE") {
            self.color_mode = val.parse()?;
        }

        if let Some(val) = lookup("SURFACE_WIDTH") {
            self.surface_width = parse_var("SURFACE_WIDTH", &val)?;
        }

        if let Some(val) = lookup("SURFACE_HEIGHT") {
            self.surface_height = parse_var("SURFACE_HEIGHT", &val)?;
        }

        Ok(self)
    }

    /// Load configuration from a JSON string. Missing fields take their defaults.
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.iso_step.is_finite() || self.iso_step <= 0.0 {
            return Err(ContourError::invalid_configuration(format!(
                "iso_step must be > 0, got {}",
                self.iso_step
            )));
        }

        if self.interpolation_factor == 0 {
            return Err(ContourError::invalid_configuration(
                "interpolation_factor must be >= 1",
            ));
        }

        for (name, value) in [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ContourError::invalid_configuration(format!(
                    "{} must be > 0, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, val: &str) -> Result<T> {
    val.trim().parse().map_err(|_| {
        ContourError::invalid_configuration(format!("{}: cannot parse '{}'", key, val))
    })
}
