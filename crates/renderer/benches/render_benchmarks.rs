//! Benchmarks for the renderer crate - cell geometry, rasterization and PNG encoding.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use contour_map::{CellCode, ContourMap, ContourMapConfig, Grid};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use renderer::{cell_polygons, png, CanvasRenderer, SvgRenderer};

/// Generate a smooth field with noise on top.
fn generate_field(width: usize, height: usize) -> Grid {
    let mut rng = rand::thread_rng();
    let mut data = vec![0.0f64; width * height];

    for y in 0..height {
        for x in 0..width {
            let fx = x as f64 / width as f64;
            let fy = y as f64 / height as f64;
            let base = (fx * std::f64::consts::PI * 3.0).sin() * 20.0
                + (fy * std::f64::consts::PI * 2.0).cos() * 15.0;
            data[y * width + x] = 50.0 + base + rng.gen_range(-2.0..2.0);
        }
    }

    Grid::new(data, height, width).unwrap()
}

/// Generate banded RGBA pixel data (few colours, as contour maps produce).
fn generate_banded_rgba(width: usize, height: usize, bands: usize) -> Vec<u8> {
    let mut data = vec![0u8; width * height * 4];
    for (i, px) in data.chunks_mut(4).enumerate() {
        let band = ((i % width) * bands / width) as u8;
        px.copy_from_slice(&[band.wrapping_mul(23), 255 - band.wrapping_mul(11), 128, 255]);
    }
    data
}

/// Generate random RGBA pixel data (forces the RGBA fallback).
fn generate_rgba_data(width: usize, height: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; width * height * 4];
    for chunk in data.chunks_mut(4) {
        chunk[0] = rng.gen();
        chunk[1] = rng.gen();
        chunk[2] = rng.gen();
        chunk[3] = 255;
    }
    data
}

// =============================================================================
// GEOMETRY BENCHMARKS
// =============================================================================

fn bench_cell_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_polygons");
    let codes: Vec<CellCode> = (0..=CellCode::MAX)
        .map(|v| CellCode::new(v).unwrap())
        .collect();

    group.throughput(Throughput::Elements(codes.len() as u64));
    group.bench_function("all_81_codes", |b| {
        b.iter(|| {
            for &code in &codes {
                black_box(cell_polygons(black_box(code), None));
            }
        });
    });

    group.finish();
}

// =============================================================================
// RENDERING BENCHMARKS
// =============================================================================

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    group.sample_size(20);

    for (grid_size, surface) in [(32usize, 256u32), (64, 512)] {
        let config = ContourMapConfig {
            iso_step: 5.0,
            interpolation_factor: 3,
            surface_width: surface as f64,
            surface_height: surface as f64,
            ..Default::default()
        };
        let map = ContourMap::new(generate_field(grid_size, grid_size), config).unwrap();
        let label = format!("{}x{}_to_{}px", grid_size, grid_size, surface);

        group.bench_with_input(BenchmarkId::new("canvas", &label), &map, |b, map| {
            b.iter(|| {
                let mut canvas = CanvasRenderer::new(surface, surface).unwrap();
                map.draw(&mut canvas).unwrap();
                black_box(canvas.polygon_count())
            });
        });

        group.bench_with_input(BenchmarkId::new("svg", &label), &map, |b, map| {
            b.iter(|| {
                let mut svg = SvgRenderer::new(surface as f64, surface as f64);
                map.draw(&mut svg).unwrap();
                black_box(svg.finish().len())
            });
        });
    }

    group.finish();
}

// =============================================================================
// PNG ENCODING BENCHMARKS
// =============================================================================

fn bench_png_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoding");

    for size in [256usize, 512] {
        let banded = generate_banded_rgba(size, size, 12);
        let random = generate_rgba_data(size, size);

        group.throughput(Throughput::Bytes((size * size * 4) as u64));

        group.bench_with_input(BenchmarkId::new("indexed", size), &banded, |b, data| {
            b.iter(|| png::encode_png(black_box(data), size as u32, size as u32).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("rgba", size), &random, |b, data| {
            b.iter(|| png::encode_png(black_box(data), size as u32, size as u32).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cell_polygons, bench_draw, bench_png_encoding);
criterion_main!(benches);
