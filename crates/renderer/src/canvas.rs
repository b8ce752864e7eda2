//! Raster rendering of contour cells with tiny-skia.

use crate::error::{RenderError, Result};
use crate::geometry::{cell_polygons, Point};
use crate::png;
use contour_map::{BandClass, CellCode, CellPosition, CellRenderer, CellSize, Rgba};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

/// A [`CellRenderer`] that fills cell polygons on an RGBA pixmap.
pub struct CanvasRenderer {
    pixmap: Pixmap,
    anti_alias: bool,
    polygons: usize,
}

impl CanvasRenderer {
    /// Create a transparent `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            anti_alias: false,
            polygons: 0,
        })
    }

    /// Fill the whole surface with `color`.
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.pixmap
            .fill(Color::from_rgba8(color.r, color.g, color.b, color.a));
        self
    }

    /// Anti-alias polygon edges (off by default).
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Number of polygons filled so far.
    pub fn polygon_count(&self) -> usize {
        self.polygons
    }

    /// Colour of a single pixel, un-premultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Straight RGBA bytes, row-major.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Encode the surface as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let bytes = png::encode_png(&self.to_rgba(), self.width(), self.height())?;
        tracing::debug!(
            width = self.width(),
            height = self.height(),
            polygons = self.polygons,
            bytes = bytes.len(),
            "Encoded PNG"
        );
        Ok(bytes)
    }

    fn fill_polygon(&mut self, points: &[Point], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            self.pixmap
                .fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
            self.polygons += 1;
        }
    }
}

impl CellRenderer for CanvasRenderer {
    fn render(
        &mut self,
        cell: CellPosition,
        size: CellSize,
        code: CellCode,
        saddle: Option<BandClass>,
        color: Rgba,
    ) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = self.anti_alias;

        for polygon in cell_polygons(code, saddle) {
            let points: Vec<Point> = polygon
                .into_iter()
                .map(|p| p.to_surface(cell, size))
                .collect();
            self.fill_polygon(&points, &paint);
        }
    }
}
