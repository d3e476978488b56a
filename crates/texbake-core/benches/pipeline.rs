//! Benchmarks for the texbake pipeline stages that run in-process.
//!
//! Run with: cargo bench -p texbake-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, RgbaImage};
use texbake_core::config::NamingConfig;
use texbake_core::pipeline::{NameTransformer, Rotator};

fn benchmark_display_name(c: &mut Criterion) {
    let names = NameTransformer::new(NamingConfig::default());

    c.bench_function("display_name", |b| {
        b.iter(|| names.display_name(black_box("soldier_11_r.dds")))
    });
}

fn benchmark_rotate180(c: &mut Criterion) {
    let img = DynamicImage::ImageRgba8(RgbaImage::new(512, 512));

    c.bench_function("rotate180_512", |b| b.iter(|| black_box(&img).rotate180()));
}

fn benchmark_rotate_in_place(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Avatar.png");
    RgbaImage::new(256, 256).save(&path).expect("write fixture");

    c.bench_function("rotate_in_place_256", |b| {
        b.iter(|| Rotator::rotate_sync(black_box(&path)))
    });
}

criterion_group!(
    benches,
    benchmark_display_name,
    benchmark_rotate180,
    benchmark_rotate_in_place
);
criterion_main!(benches);
