//! Drawing surfaces for contour maps.
//!
//! Implements [`contour_map::CellRenderer`] for:
//! - Raster output (tiny-skia pixmap, PNG encoding)
//! - SVG documents
//!
//! Both share the per-code polygon geometry in [`geometry`].

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod png;
pub mod svg;

pub use canvas::CanvasRenderer;
pub use error::{RenderError, Result};
pub use geometry::{cell_polygons, polygon_area, Point, Polygon};
pub use svg::SvgRenderer;
