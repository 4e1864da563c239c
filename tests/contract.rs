/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use fastatan2::{
    ATAN2F_POLY, Atan2Backend, Atan2Error, Atan2Options, LANES, atan2_scalar, atan2_vector,
    make_atan2_executor, recip_approxf,
};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const TOLERANCE: f32 = 2e-4;

#[test]
fn quadrant_literals() {
    let cases = [
        (1., 1., FRAC_PI_4),
        (1., -1., 3. * FRAC_PI_4),
        (-1., -1., -3. * FRAC_PI_4),
        (-1., 1., -FRAC_PI_4),
    ];
    for (y, x, expected) in cases {
        let r = atan2_scalar(y, x);
        assert!(
            (r - expected).abs() < TOLERANCE,
            "Invalid result {} for atan2({}, {})",
            r,
            y,
            x
        );
    }
}

#[test]
fn axis_literals() {
    assert_eq!(atan2_scalar(0., 1.), 0.);
    assert!((atan2_scalar(1., 0.) - FRAC_PI_2).abs() < 1e-6);
    assert!((atan2_scalar(-1., 0.) + FRAC_PI_2).abs() < 1e-6);
    assert!((atan2_scalar(0., -1.) - PI).abs() < 1e-6);
}

#[test]
fn accuracy_against_correctly_rounded_reference() {
    let mut rng = rand::rng();
    for _ in 0..300_000 {
        let angle = rng.random_range(-PI..PI);
        let magnitude = 10f32.powf(rng.random_range(-4f32..6f32));
        let y = angle.sin() * magnitude;
        let x = angle.cos() * magnitude;
        if x.abs() < 1e-6 {
            continue;
        }
        let reference = pxfm::f_atan2f(y, x);
        let r = atan2_scalar(y, x);
        assert!(
            (r - reference).abs() < TOLERANCE,
            "Invalid result {} for atan2({}, {}), expected {}",
            r,
            y,
            x,
            reference
        );
    }
}

#[test]
fn output_stays_in_range() {
    let mut rng = rand::rng();
    for _ in 0..100_000 {
        let y = rng.random_range(-1e30f32..1e30f32);
        let x = rng.random_range(-1e30f32..1e30f32);
        let r = atan2_scalar(y, x);
        assert!((-PI..=PI).contains(&r), "Out of range {} for atan2({}, {})", r, y, x);
    }
}

#[test]
fn odd_symmetry_in_y() {
    let mut rng = rand::rng();
    for _ in 0..50_000 {
        let y = rng.random_range(1e-6f32..1e6f32);
        let x = rng.random_range(-1e6f32..1e6f32);
        assert_eq!(atan2_scalar(-y, x), -atan2_scalar(y, x));
    }
}

#[test]
fn small_x_is_stable() {
    for x in [0f32, 1e-38, -1e-38, 1e-12, -1e-9, 5e-7, -9.99e-7] {
        assert_eq!(atan2_scalar(1e30, x), FRAC_PI_2);
        assert_eq!(atan2_scalar(-1e30, x), -FRAC_PI_2);
        assert_eq!(atan2_scalar(1e-30, x), FRAC_PI_2);
    }
}

#[test]
fn origin_and_negative_zero() {
    assert_eq!(atan2_scalar(0., 0.), FRAC_PI_2);
    assert_eq!(atan2_scalar(-0., 1.), 0.);
    assert_eq!(atan2_scalar(-0., -1.), PI);
}

#[test]
fn vector_agrees_with_scalar() {
    let mut rng = rand::rng();
    for _ in 0..20_000 {
        let ys: [f32; LANES] = std::array::from_fn(|_| rng.random_range(-1e3f32..1e3f32));
        let xs: [f32; LANES] = std::array::from_fn(|_| rng.random_range(-1e3f32..1e3f32));
        let r = atan2_vector(ys, xs);
        for i in 0..LANES {
            let s = atan2_scalar(ys[i], xs[i]);
            assert!(
                (r[i] - s).abs() <= 1e-6 * s.abs().max(1.),
                "Lane {} differs: {} vs {}",
                i,
                r[i],
                s
            );
        }
    }
}

#[test]
fn executor_processes_slices() {
    let executor = make_atan2_executor(Atan2Options::default());
    let ys: Vec<f32> = (0..1001).map(|i| (i as f32 * 0.01).sin()).collect();
    let xs: Vec<f32> = (0..1001).map(|i| (i as f32 * 0.01).cos()).collect();
    let mut dst = vec![0f32; ys.len()];
    executor.execute(&ys, &xs, &mut dst).unwrap();
    for ((&y, &x), &r) in ys.iter().zip(xs.iter()).zip(dst.iter()) {
        assert_eq!(r.to_bits(), atan2_scalar(y, x).to_bits());
    }
    assert_eq!(
        executor.execute(&ys, &xs[..10], &mut dst),
        Err(Atan2Error::LaneSizeMismatch(1001, 10))
    );
}

#[test]
fn scalar_executor_on_request() {
    let executor = make_atan2_executor(Atan2Options {
        allow_simd: false,
        allow_wide_vectors: false,
    });
    assert_eq!(executor.backend(), Atan2Backend::Scalar);
}

#[test]
fn reciprocal_and_table() {
    assert!((recip_approxf(4.) - 0.25).abs() < 1e-5);
    assert_eq!(ATAN2F_POLY.len(), 4);
    assert!(ATAN2F_POLY[3] > 0.999 && ATAN2F_POLY[3] < 1.);
}
