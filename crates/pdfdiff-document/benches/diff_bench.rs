// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the image differencer, run on a synthetic page
// pair at roughly the raster size of a Letter page at 72 dpi.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use pdfdiff_core::types::DiffMethod;
use pdfdiff_document::image_diff;

/// Build a synthetic page pair: both mostly white, the second with a dark
/// rectangle from (100, 100) to (300, 200) standing in for changed content.
fn synthetic_pair(width: u32, height: u32) -> (DynamicImage, DynamicImage) {
    let page_a = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    let mut page_b = page_a.clone();
    for y in 100..200 {
        for x in 100..300 {
            page_b.put_pixel(x, y, Rgb([40, 40, 40]));
        }
    }
    (
        DynamicImage::ImageRgb8(page_a),
        DynamicImage::ImageRgb8(page_b),
    )
}

fn bench_image_diff(c: &mut Criterion) {
    let (page_a, page_b) = synthetic_pair(612, 792);

    c.bench_function("image_diff any (612x792)", |b| {
        b.iter(|| {
            image_diff(
                black_box(&page_a),
                black_box(&page_b),
                black_box(DiffMethod::Any),
            )
            .unwrap()
        })
    });

    c.bench_function("image_diff xor (612x792)", |b| {
        b.iter(|| {
            image_diff(
                black_box(&page_a),
                black_box(&page_b),
                black_box(DiffMethod::Xor),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_image_diff);
criterion_main!(benches);
