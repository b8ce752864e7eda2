//! Output boundary of the pipeline: cell renderers.

use crate::classify::{BandClass, CellCode, CellPosition};
use crate::color::Rgba;
use crate::grid::Grid;

/// Size of one cell on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Divide a `surface_width` x `surface_height` surface evenly among the cells of `dense`.
    pub fn for_grid(surface_width: f64, surface_height: f64, dense: &Grid) -> Self {
        let (cell_rows, cell_cols) = dense.cell_dims();
        Self {
            width: surface_width / cell_cols as f64,
            height: surface_height / cell_rows as f64,
        }
    }

    /// Top-left corner of `cell` on the surface.
    pub fn origin(&self, cell: CellPosition) -> (f64, f64) {
        (cell.col as f64 * self.width, cell.row as f64 * self.height)
    }
}

/// Draws the polygon for one classified cell.
///
/// Called once per emitted assignment, band by band and row by row. The
/// same cell is drawn again for every band it takes part in. `saddle` is
/// the centre classification for ambiguous codes and `None` otherwise.
pub trait CellRenderer {
    fn render(
        &mut self,
        cell: CellPosition,
        size: CellSize,
        code: CellCode,
        saddle: Option<BandClass>,
        color: Rgba,
    );
}

/// A single call captured by [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedCell {
    pub cell: CellPosition,
    pub size: CellSize,
    pub code: CellCode,
    pub saddle: Option<BandClass>,
    pub color: Rgba,
}

/// Renderer that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub cells: Vec<RenderedCell>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of recorded cells that carried a saddle sub-code.
    pub fn saddle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.saddle.is_some()).count()
    }
}

impl CellRenderer for RecordingRenderer {
    fn render(
        &mut self,
        cell: CellPosition,
        size: CellSize,
        code: CellCode,
        saddle: Option<BandClass>,
        color: Rgba,
    ) {
        self.cells.push(RenderedCell {
            cell,
            size,
            code,
            saddle,
            color,
        });
    }
}
