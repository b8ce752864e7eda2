//! SVG output for contour maps.

use crate::geometry::cell_polygons;
use contour_map::{BandClass, CellCode, CellPosition, CellRenderer, CellSize, Rgba};

/// A [`CellRenderer`] that accumulates `<polygon>` elements.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    background: Option<Rgba>,
    body: String,
    polygons: usize,
}

impl SvgRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
            polygons: 0,
        }
    }

    /// Paint a full-size rectangle behind the map.
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Number of polygons emitted so far.
    pub fn polygon_count(&self) -> usize {
        self.polygons
    }

    /// The complete SVG document.
    pub fn finish(&self) -> String {
        let mut doc = String::with_capacity(self.body.len() + 256);
        doc.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" shape-rendering="crispEdges">"#,
            w = self.width,
            h = self.height
        ));
        doc.push('\n');
        if let Some(bg) = self.background {
            doc.push_str(&format!(
                r#"<rect width="100%" height="100%" fill="{}"{}/>"#,
                bg.to_hex(),
                opacity_attr(bg)
            ));
            doc.push('\n');
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

fn opacity_attr(color: Rgba) -> String {
    if color.a == 255 {
        String::new()
    } else {
        format!(r#" fill-opacity="{:.3}""#, color.a as f64 / 255.0)
    }
}

impl CellRenderer for SvgRenderer {
    fn render(
        &mut self,
        cell: CellPosition,
        size: CellSize,
        code: CellCode,
        saddle: Option<BandClass>,
        color: Rgba,
    ) {
        for polygon in cell_polygons(code, saddle) {
            let points = polygon
                .iter()
                .map(|p| {
                    let s = p.to_surface(cell, size);
                    format!("{},{}", round3(s.x), round3(s.y))
                })
                .collect::<Vec<_>>()
                .join(" ");

            self.body.push_str(&format!(
                r#"<polygon points="{}" fill="{}"{}/>"#,
                points,
                color.to_hex(),
                opacity_attr(color)
            ));
            self.body.push('\n');
            self.polygons += 1;
        }
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
