/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![no_main]

use fastatan2::{Atan2Options, atan2_scalar, make_atan2_executor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u32>, bool)| {
    let pairs = data.0.len() / 2;
    let ys: Vec<f32> = data.0[..pairs].iter().map(|&v| f32::from_bits(v)).collect();
    let xs: Vec<f32> = data.0[pairs..pairs * 2]
        .iter()
        .map(|&v| f32::from_bits(v))
        .collect();
    let mut dst = vec![0f32; pairs];
    let executor = make_atan2_executor(Atan2Options {
        allow_wide_vectors: data.1,
        ..Default::default()
    });
    executor.execute(&ys, &xs, &mut dst).unwrap();
    for ((&y, &x), &r) in ys.iter().zip(xs.iter()).zip(dst.iter()) {
        if y.is_finite() && x.is_finite() {
            assert_eq!(r.to_bits(), atan2_scalar(y, x).to_bits());
        }
    }
    if pairs > 0 {
        assert!(executor.execute(&ys, &xs[1..], &mut dst).is_err());
    }
});
