//! Tests for SVG output.

use contour_map::{
    BandClass, CellCode, CellPosition, CellRenderer, CellSize, ColorMode, ContourMap,
    ContourMapConfig, Grid, Rgba,
};
use renderer::SvgRenderer;
use test_utils::{create_checkerboard_grid, fixtures::grids};

#[test]
fn test_empty_document() {
    let svg = SvgRenderer::new(400.0, 200.0).finish();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="200""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(!svg.contains("<polygon"));
}

#[test]
fn test_background_rect() {
    let svg = SvgRenderer::new(10.0, 10.0)
        .with_background(Rgba::new(255, 255, 255, 128))
        .finish();
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#ffffff" fill-opacity="0.502"/>"##));
}

#[test]
fn test_one_element_per_line() {
    let mut svg = SvgRenderer::new(20.0, 10.0).with_background(Rgba::opaque(0, 0, 0));
    let size = CellSize::new(20.0, 10.0);
    svg.render(
        CellPosition::new(0, 0),
        size,
        CellCode::new(40).unwrap(),
        None,
        Rgba::opaque(255, 0, 0),
    );
    let doc = svg.finish();

    let lines: Vec<&str> = doc.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("<svg "));
    assert_eq!(lines[1], r##"<rect width="100%" height="100%" fill="#000000"/>"##);
    assert_eq!(lines[2], r##"<polygon points="0,0 20,0 20,10 0,10" fill="#ff0000"/>"##);
    assert_eq!(lines[3], "</svg>");
    assert!(doc.ends_with("</svg>\n"));
}

#[test]
fn test_left_right_polygons() {
    let config = ContourMapConfig {
        iso_step: 5.0,
        interpolation_factor: 1,
        color_mode: ColorMode::Color,
        ..Default::default()
    };
    let map = ContourMap::new(Grid::from_rows(grids::left_right_2x2()).unwrap(), config).unwrap();

    let mut svg = SvgRenderer::new(400.0, 200.0);
    map.draw(&mut svg).unwrap();
    let doc = svg.finish();

    assert_eq!(svg.polygon_count(), 3);
    let polygons: Vec<&str> = doc.lines().filter(|l| l.starts_with("<polygon")).collect();
    assert_eq!(
        polygons,
        vec![
            r##"<polygon points="0,0 200,0 200,200 0,200" fill="#2b00ff"/>"##,
            r##"<polygon points="200,0 400,0 400,200 200,200" fill="#00ff15"/>"##,
            r##"<polygon points="200,0 400,0 400,200 200,200" fill="#ff0000"/>"##,
        ]
    );
}

#[test]
fn test_saddle_split_emits_two_polygons() {
    let mut svg = SvgRenderer::new(10.0, 10.0);
    svg.render(
        CellPosition::new(0, 0),
        CellSize::new(10.0, 10.0),
        CellCode::new(10).unwrap(),
        Some(BandClass::Below),
        Rgba::opaque(0, 0, 0),
    );
    assert_eq!(svg.polygon_count(), 2);

    svg.render(
        CellPosition::new(0, 0),
        CellSize::new(10.0, 10.0),
        CellCode::new(10).unwrap(),
        Some(BandClass::Inside),
        Rgba::opaque(0, 0, 0),
    );
    assert_eq!(svg.polygon_count(), 3);
}

#[test]
fn test_polygon_count_matches_document() {
    let config = ContourMapConfig {
        iso_step: 2.0,
        interpolation_factor: 2,
        ..Default::default()
    };
    let map = ContourMap::new(
        Grid::from_rows(create_checkerboard_grid(5, 5, 0.0, 10.0)).unwrap(),
        config,
    )
    .unwrap();

    let mut svg = SvgRenderer::new(300.0, 300.0);
    let summary = map.draw(&mut svg).unwrap();
    let doc = svg.finish();

    assert!(svg.polygon_count() >= summary.emitted);
    assert_eq!(doc.matches("<polygon").count(), svg.polygon_count());
}
