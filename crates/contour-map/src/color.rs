//! Colour representations and the HSB colour space.

use crate::error::{ContourError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hue/saturation/brightness triple.
///
/// `hue` is in degrees, `saturation` and `brightness` are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

/// Device colour in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// `#rrggbb` hex notation (alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Converts HSB triples into device colours.
pub trait ColorSpace {
    fn to_rgba(&self, color: Hsb) -> Rgba;
}

/// Standard HSB (a.k.a. HSV) to sRGB conversion producing opaque colours.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsbColorSpace;

impl ColorSpace for HsbColorSpace {
    fn to_rgba(&self, color: Hsb) -> Rgba {
        let s = color.saturation.clamp(0.0, 1.0);
        let v = color.brightness.clamp(0.0, 1.0);
        let h = color.hue.rem_euclid(360.0) / 60.0;

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::opaque(to_channel(r), to_channel(g), to_channel(b))
    }
}

#[inline]
fn to_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Colour ramp used for the band colour scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorMode {
    /// Greyscale ramp, darkest band first.
    Monochromatic,
    /// Hue ramp from blue (lowest band) to red (highest band).
    #[default]
    Color,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Monochromatic => "Monochromatic",
            ColorMode::Color => "Color",
        }
    }
}

impl FromStr for ColorMode {
    type Err = ContourError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "monochromatic" | "mono" | "grayscale" | "greyscale" => Ok(ColorMode::Monochromatic),
            "color" | "colour" => Ok(ColorMode::Color),
            other => Err(ContourError::invalid_configuration(format!(
                "unrecognized color mode '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ColorMode {
    type Error = ContourError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ColorMode> for String {
    fn from(mode: ColorMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
