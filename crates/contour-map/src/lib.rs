//! Filled contour (isoband) maps from gridded samples.
//!
//! The pipeline runs in a fixed order:
//! - Bicubic upsampling, clamped to the source range
//! - Band boundaries every `iso_step` from the minimum, ending at the maximum
//! - One colour per band (monochromatic or hue ramp)
//! - Ternary marching-squares classification of every cell for every band,
//!   with saddle cells resolved by the mean of their corners
//! - One [`CellRenderer`] call per non-empty cell
//!
//! # Example
//!
//! ```
//! use contour_map::{ContourMap, ContourMapConfig, ColorMode, Grid, RecordingRenderer};
//!
//! let grid = Grid::from_rows(vec![vec![0.0, 10.0], vec![0.0, 10.0]]).unwrap();
//! let config = ContourMapConfig {
//!     iso_step: 5.0,
//!     interpolation_factor: 1,
//!     color_mode: ColorMode::Color,
//!     ..Default::default()
//! };
//!
//! let map = ContourMap::new(grid, config).unwrap();
//! let mut renderer = RecordingRenderer::new();
//! let summary = map.draw(&mut renderer).unwrap();
//! assert_eq!(summary.emitted, renderer.len());
//! ```

pub mod bands;
pub mod classify;
pub mod color;
pub mod color_scale;
pub mod config;
pub mod error;
pub mod grid;
pub mod interpolation;
pub mod map;
pub mod render;

pub use bands::{generate_bands, MAX_BOUNDARIES};
pub use classify::{
    classify, classify_cell, corner_values, BandClass, CellAssignment, CellCode, CellPosition,
    Corner, SADDLE_CODES,
};
pub use color::{ColorMode, ColorSpace, Hsb, HsbColorSpace, Rgba};
pub use color_scale::{color_scale, linspace};
pub use config::ContourMapConfig;
pub use error::{ContourError, Result};
pub use grid::Grid;
pub use interpolation::{cubic_interpolate, interpolate, upsampled_dims, MAX_DENSE_VALUES};
pub use map::{ContourMap, DrawSummary, PreparedMap};
pub use render::{CellRenderer, CellSize, RecordingRenderer, RenderedCell};
