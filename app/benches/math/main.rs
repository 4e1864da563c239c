/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fastatan2::{Atan2Options, atan2_scalar, atan2_vector, make_atan2_executor};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("system: atan2f", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::atan2(i as f32 - 500., 250. - i as f32));
            }
        })
    });

    c.bench_function("libm::atan2f", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::atan2f(i as f32 - 500., 250. - i as f32));
            }
        })
    });

    c.bench_function("pxfm: atan2f", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_atan2f(i as f32 - 500., 250. - i as f32));
            }
        })
    });

    c.bench_function("fastatan2: scalar", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(atan2_scalar(i as f32 - 500., 250. - i as f32));
            }
        })
    });

    c.bench_function("fastatan2: vector x4", |b| {
        b.iter(|| {
            for i in (1..1000).step_by(4) {
                let base = i as f32;
                black_box(atan2_vector(
                    [base - 500., base - 499., base - 498., base - 497.],
                    [250. - base, 249. - base, 248. - base, 247. - base],
                ));
            }
        })
    });

    let ys: Vec<f32> = (0..4096).map(|i| i as f32 - 2048.).collect();
    let xs: Vec<f32> = (0..4096).map(|i| 1024. - i as f32).collect();
    let mut dst = vec![0f32; ys.len()];

    for (name, options) in [
        ("fastatan2: executor", Atan2Options::default()),
        (
            "fastatan2: executor 128-bit",
            Atan2Options {
                allow_wide_vectors: false,
                ..Default::default()
            },
        ),
        (
            "fastatan2: executor scalar",
            Atan2Options {
                allow_simd: false,
                ..Default::default()
            },
        ),
    ] {
        let executor = make_atan2_executor(options);
        c.bench_function(name, |b| {
            b.iter(|| {
                executor.execute(&ys, &xs, &mut dst).unwrap();
                black_box(&dst);
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
