/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![no_main]

use fastatan2::{atan2_scalar, atan2_vector, recip_approxf};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u64; 4]| {
    let ys: [f32; 4] = std::array::from_fn(|i| f32::from_bits(data[i] as u32));
    let xs: [f32; 4] = std::array::from_fn(|i| f32::from_bits((data[i] >> 32) as u32));

    _ = recip_approxf(xs[0].abs());

    let r = atan2_vector(ys, xs);
    for i in 0..4 {
        let s = atan2_scalar(ys[i], xs[i]);
        if !ys[i].is_finite() || !xs[i].is_finite() {
            continue;
        }
        assert!(s.is_finite(), "atan2({}, {}) = {}", ys[i], xs[i], s);
        assert!(
            (-std::f32::consts::PI..=std::f32::consts::PI).contains(&s),
            "atan2({}, {}) = {}",
            ys[i],
            xs[i],
            s
        );
        assert_eq!(r[i].to_bits(), s.to_bits(), "atan2({}, {})", ys[i], xs[i]);
    }
});
