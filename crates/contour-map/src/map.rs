//! The contour map pipeline: interpolate, band, colour, classify, render.

use crate::bands::generate_bands;
use crate::classify::{classify, CellAssignment};
use crate::color::{ColorSpace, Hsb, HsbColorSpace, Rgba};
use crate::color_scale::color_scale;
use crate::config::ContourMapConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::interpolation::interpolate;
use crate::render::{CellRenderer, CellSize};

/// Everything computed before the first renderer call.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedMap {
    /// Upsampled grid.
    pub dense: Grid,
    /// Band boundaries over the dense grid's range.
    pub boundaries: Vec<f64>,
    /// One colour per band.
    pub colors: Vec<Hsb>,
    /// Non-empty cells, band-major then row-major.
    pub assignments: Vec<CellAssignment>,
    /// Size of one cell on the drawing surface.
    pub cell_size: CellSize,
}

impl PreparedMap {
    /// Number of bands.
    pub fn band_count(&self) -> usize {
        self.colors.len()
    }

    /// `[lower, upper]` of band `index`.
    pub fn band_range(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.boundaries.get(index)?, *self.boundaries.get(index + 1)?))
    }
}

/// Statistics for a completed draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawSummary {
    /// Dense grid rows.
    pub rows: usize,
    /// Dense grid columns.
    pub cols: usize,
    pub boundaries: usize,
    pub colors: usize,
    /// Renderer calls issued.
    pub emitted: usize,
    /// Renderer calls that carried a saddle sub-code.
    pub saddles: usize,
}

/// A sample grid plus the configuration to turn it into isoband cells.
#[derive(Debug, Clone)]
pub struct ContourMap {
    grid: Grid,
    config: ContourMapConfig,
}

impl ContourMap {
    /// Validates the configuration up front.
    pub fn new(grid: Grid, config: ContourMapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { grid, config })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &ContourMapConfig {
        &self.config
    }

    /// Run interpolation, band generation, colour scale and classification.
    pub fn prepare(&self) -> Result<PreparedMap> {
        tracing::debug!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            iso_step = self.config.iso_step,
            factor = self.config.interpolation_factor,
            color_mode = %self.config.color_mode,
            "Preparing contour map"
        );

        let dense = interpolate(&self.grid, self.config.interpolation_factor)?;
        let boundaries = generate_bands(&dense, self.config.iso_step)?;
        let colors = color_scale(&boundaries, self.config.color_mode)?;
        let assignments = classify(&dense, &boundaries, &colors)?;
        let cell_size =
            CellSize::for_grid(self.config.surface_width, self.config.surface_height, &dense);

        Ok(PreparedMap {
            dense,
            boundaries,
            colors,
            assignments,
            cell_size,
        })
    }

    /// Draw every cell with the default HSB colour space.
    pub fn draw<R: CellRenderer + ?Sized>(&self, renderer: &mut R) -> Result<DrawSummary> {
        self.draw_with(&HsbColorSpace, renderer)
    }

    /// Draw every cell, converting band colours with `color_space`.
    ///
    /// All computation finishes before the renderer is called, so an error
    /// never leaves a partially drawn surface.
    pub fn draw_with<C, R>(&self, color_space: &C, renderer: &mut R) -> Result<DrawSummary>
    where
        C: ColorSpace + ?Sized,
        R: CellRenderer + ?Sized,
    {
        let prepared = self.prepare()?;
        let palette: Vec<Rgba> = prepared
            .colors
            .iter()
            .map(|&c| color_space.to_rgba(c))
            .collect();

        let mut saddles = 0;
        for a in &prepared.assignments {
            if a.saddle.is_some() {
                saddles += 1;
            }
            renderer.render(a.cell, prepared.cell_size, a.code, a.saddle, palette[a.band]);
        }

        let summary = DrawSummary {
            rows: prepared.dense.rows(),
            cols: prepared.dense.cols(),
            boundaries: prepared.boundaries.len(),
            colors: prepared.colors.len(),
            emitted: prepared.assignments.len(),
            saddles,
        };

        tracing::debug!(
            rows = summary.rows,
            cols = summary.cols,
            boundaries = summary.boundaries,
            emitted = summary.emitted,
            saddles = summary.saddles,
            "Drew contour map"
        );

        Ok(summary)
    }
}
