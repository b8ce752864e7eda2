//! Configuration loading for contour-plot.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults
//! 2. Environment (`ISO_STEP`, `INTERPOLATION_FACTOR`, `COLOR_MODE`,
//!    `SURFACE_WIDTH`, `SURFACE_HEIGHT`)
//! 3. Config file (YAML, or JSON for `.json` files)
//! 4. Command-line flags

use anyhow::{bail, Context, Result};
use contour_map::{ColorMode, ContourMapConfig, Rgba};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::loader::unescape_delimiter;

/// Default sample file delimiter.
pub const DEFAULT_DELIMITER: &str = "\t";

/// One layer of optional settings, from a config file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub iso_step: Option<f64>,
    pub interpolation_factor: Option<usize>,
    pub color_mode: Option<ColorMode>,
    pub surface_width: Option<f64>,
    pub surface_height: Option<f64>,
    pub delimiter: Option<String>,
    /// `#rrggbb` or `#rrggbbaa`
    pub background: Option<String>,
}

impl ConfigLayer {
    /// Overwrite every field of `self` that `other` sets.
    pub fn merge(mut self, other: ConfigLayer) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            iso_step,
            interpolation_factor,
            color_mode,
            surface_width,
            surface_height,
            delimiter,
            background
        );
        self
    }

    fn apply(&self, mut config: ContourMapConfig) -> ContourMapConfig {
        if let Some(v) = self.iso_step {
            config.iso_step = v;
        }
        if let Some(v) = self.interpolation_factor {
            config.interpolation_factor = v;
        }
        if let Some(v) = self.color_mode {
            config.color_mode = v;
        }
        if let Some(v) = self.surface_width {
            config.surface_width = v;
        }
        if let Some(v) = self.surface_height {
            config.surface_height = v;
        }
        config
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub map: ContourMapConfig,
    pub delimiter: String,
    pub background: Option<Rgba>,
}

/// Load a config file layer. `.json` files are parsed as JSON, anything else as YAML.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigLayer> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let layer: ConfigLayer = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config from {:?}", path))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config from {:?}", path))?
    };

    tracing::debug!(path = ?path, ?layer, "Loaded config file");
    Ok(layer)
}

/// Resolve settings from defaults, an environment lookup and the given layers.
pub fn resolve<F>(env: F, file: Option<ConfigLayer>, flags: ConfigLayer) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let map = ContourMapConfig::default()
        .with_overrides(env)
        .context("Invalid environment configuration")?;

    let layer = file.unwrap_or_default().merge(flags);
    let map = layer.apply(map);
    map.validate().context("Invalid configuration")?;

    let delimiter = layer
        .delimiter
        .as_deref()
        .map(unescape_delimiter)
        .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());

    let background = layer.background.as_deref().map(parse_hex_color).transpose()?;

    Ok(Settings {
        map,
        delimiter,
        background,
    })
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<Rgba> {
    let hex = s.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("Invalid color '{}': expected #rrggbb or #rrggbbaa", s);
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_utils::write_temp_file;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let settings = resolve(no_env, None, ConfigLayer::default()).unwrap();
        assert_eq!(settings.map, ContourMapConfig::default());
        assert_eq!(settings.delimiter, "\t");
        assert_eq!(settings.background, None);
    }

    #[test]
    fn test_precedence() {
        let env: HashMap<&str, &str> = [
            ("ISO_STEP", "0.5"),
            ("INTERPOLATION_FACTOR", "4"),
            ("SURFACE_WIDTH", "800"),
        ]
        .into_iter()
        .collect();
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());

        let file = ConfigLayer {
            iso_step: Some(2.0),
            color_mode: Some(ColorMode::Monochromatic),
            surface_width: Some(640.0),
            ..Default::default()
        };
        let flags = ConfigLayer {
            iso_step: Some(5.0),
            ..Default::default()
        };

        let settings = resolve(lookup, Some(file), flags).unwrap();
        // flag > file > env > default
        assert_eq!(settings.map.iso_step, 5.0);
        assert_eq!(settings.map.surface_width, 640.0);
        assert_eq!(settings.map.interpolation_factor, 4);
        assert_eq!(settings.map.color_mode, ColorMode::Monochromatic);
        assert_eq!(settings.map.surface_height, 200.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let flags = ConfigLayer {
            iso_step: Some(0.0),
            ..Default::default()
        };
        assert!(resolve(no_env, None, flags).is_err());

        let bad_env = |k: &str| (k == "INTERPOLATION_FACTOR").then(|| "three".to_string());
        let err = resolve(bad_env, None, ConfigLayer::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("INTERPOLATION_FACTOR"));
    }

    #[test]
    fn test_yaml_file() {
        let file = write_temp_file(
            "iso_step: 0.25\ncolor_mode: mono\ndelimiter: comma\nbackground: '#ffffff'\n",
        );
        let layer = load_config_file(file.path()).unwrap();
        assert_eq!(layer.iso_step, Some(0.25));
        assert_eq!(layer.color_mode, Some(ColorMode::Monochromatic));

        let settings = resolve(no_env, Some(layer), ConfigLayer::default()).unwrap();
        assert_eq!(settings.delimiter, ",");
        assert_eq!(settings.background, Some(Rgba::opaque(255, 255, 255)));
    }

    #[test]
    fn test_json_file() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        std::fs::write(file.path(), r#"{"interpolation_factor": 2, "surface_height": 300}"#)
            .unwrap();

        let layer = load_config_file(file.path()).unwrap();
        assert_eq!(layer.interpolation_factor, Some(2));
        assert_eq!(layer.surface_height, Some(300.0));
        assert_eq!(layer.iso_step, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_temp_file("iso_stepp: 1.0\n");
        let err = load_config_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("iso_stepp"));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = ConfigLayer {
            iso_step: Some(1.0),
            delimiter: Some(";".to_string()),
            ..Default::default()
        };
        let merged = base.merge(ConfigLayer {
            delimiter: Some(",".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.iso_step, Some(1.0));
        assert_eq!(merged.delimiter.as_deref(), Some(","));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#2b00ff").unwrap(), Rgba::opaque(43, 0, 255));
        assert_eq!(parse_hex_color("ffffff80").unwrap(), Rgba::new(255, 255, 255, 128));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }
}
