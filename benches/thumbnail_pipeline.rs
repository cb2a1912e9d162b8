// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the thumbnail pipeline: raster decoding at typical
//! source sizes, SVG rasterization, and the full decode, resample,
//! encode chain.
//!
//! Fixtures are synthesized in memory so results do not depend on files
//! checked into the repository.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_mosaic::media::{decode_image, thumbnail};
use std::hint::black_box;
use std::io::Cursor;
use std::path::Path;

/// Encode a synthetic gradient raster as PNG bytes.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::RgbaImage::from_fn(width, height, |x, y| {
        image_rs::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("PNG encoding of a gradient raster should succeed");
    bytes
}

/// A small vector drawing, enough to exercise the SVG path.
fn svg_bytes() -> Vec<u8> {
    br##"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="192">
  <rect width="256" height="192" fill="#1b2735"/>
  <circle cx="128" cy="96" r="64" fill="#66b3ff"/>
</svg>"##
        .to_vec()
}

/// Benchmark raster decoding.
///
/// Measures the decode step alone, at a small source size and at a
/// camera-like one.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail_pipeline");

    let small = png_bytes(320, 240);
    let large = png_bytes(1920, 1080);

    group.bench_function("decode_png_320x240", |b| {
        b.iter(|| {
            black_box(decode_image(black_box(&small), Path::new("bench.png")).unwrap());
        });
    });

    group.bench_function("decode_png_1920x1080", |b| {
        b.iter(|| {
            black_box(decode_image(black_box(&large), Path::new("bench.png")).unwrap());
        });
    });

    group.finish();
}

/// Benchmark SVG rasterization.
///
/// Measures parsing and rendering a vector source into an RGBA raster.
fn bench_decode_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail_pipeline");

    let vector = svg_bytes();

    group.bench_function("decode_svg", |b| {
        b.iter(|| {
            black_box(decode_image(black_box(&vector), Path::new("bench.svg")).unwrap());
        });
    });

    group.finish();
}

/// Benchmark the full pipeline.
///
/// Measures decode, resampling to the thumbnail edge, and re-encoding,
/// for sources that shrink and for one that scales up.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail_pipeline");

    let photo = png_bytes(1920, 1080);
    let icon = png_bytes(64, 64);

    group.bench_function("generate_from_1920x1080", |b| {
        b.iter(|| {
            let pair =
                thumbnail::generate_from_bytes(Path::new("bench.png"), photo.clone()).unwrap();
            black_box(pair);
        });
    });

    group.bench_function("generate_from_64x64", |b| {
        b.iter(|| {
            let pair =
                thumbnail::generate_from_bytes(Path::new("bench.png"), icon.clone()).unwrap();
            black_box(pair);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_decode_svg, bench_generate);
criterion_main!(benches);
