/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::consts::*;
use crate::recip::recip_approxf;

/// Evaluates `p1·t + p3·t³ + p5·t⁵ + p7·t⁷` split into two halves
/// joined by `t⁴`, then adds `base`.
///
/// Every lane kernel performs these exact operations in this exact order.
#[inline(always)]
pub(crate) const fn atan_poly_q1(t: f32, base: f32) -> f32 {
    let t2 = t * t;
    let hi = (P7 * t) * t2 + P5 * t;
    let lo = (P3 * t) * t2 + P1 * t;
    let t4 = t2 * t2;
    (base + hi * t4) + lo
}

/// Computes approximate Atan2 in single precision.
///
/// Absolute error is below 2e-4 rad for `|x| >= 1e-6`.
/// For `|x| < 1e-6` result is exactly `±π/2` by the sign of `y`, `(0, 0)` gives `π/2`.
/// Negative zero is treated as positive zero.
/// Non-finite inputs produce an unspecified value.
#[inline]
pub const fn atan2_scalar(y: f32, x: f32) -> f32 {
    let ax = x.abs();
    let (ys, axs) = if ax > HUGE_X {
        (y * HUGE_X_SCALE, ax * HUGE_X_SCALE)
    } else {
        (y, ax)
    };
    let rx = recip_approxf(axs);
    let mut ratio = (ys * rx).abs();
    if ratio.is_nan() || ratio > RATIO_MAX {
        ratio = RATIO_MAX;
    }
    let rr = recip_approxf(ratio);

    // atan(t) = π/2 - atan(1/t) for t > 1
    let mut r = if ratio > 1. {
        atan_poly_q1(-rr, FRAC_PI_2)
    } else {
        atan_poly_q1(ratio, 0.)
    };

    if x < 0. {
        r = PI - r;
    }
    if ax < SMALL_X {
        r = FRAC_PI_2;
    }
    if y < 0. {
        r = -r;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const TOLERANCE: f64 = 2e-4;

    fn assert_close(y: f32, x: f32, expected: f32) {
        let r = atan2_scalar(y, x);
        assert!(
            (r - expected).abs() < TOLERANCE as f32,
            "Invalid result {} for atan2({}, {}), expected {}",
            r,
            y,
            x,
            expected
        );
    }

    #[test]
    fn atan2_quadrants() {
        use std::f32::consts::FRAC_PI_4;
        assert_close(1., 1., FRAC_PI_4);
        assert_close(1., -1., 3. * FRAC_PI_4);
        assert_close(-1., -1., -3. * FRAC_PI_4);
        assert_close(-1., 1., -FRAC_PI_4);
        assert_close(-5., 2., -1.1902899496825317);
        assert_close(2., -5., 2.761086276477428);
    }

    #[test]
    fn atan2_axes() {
        assert_eq!(atan2_scalar(0., 1.), 0.);
        assert_eq!(atan2_scalar(1., 0.), FRAC_PI_2);
        assert_eq!(atan2_scalar(-1., 0.), -FRAC_PI_2);
        assert_eq!(atan2_scalar(0., -1.), PI);
    }

    #[test]
    fn atan2_zero_conventions() {
        assert_eq!(atan2_scalar(0., 0.), FRAC_PI_2);
        assert_eq!(atan2_scalar(-0., 0.), FRAC_PI_2);
        assert_eq!(atan2_scalar(0., -0.), FRAC_PI_2);
        assert_eq!(atan2_scalar(-0., 1.), 0.);
        assert_eq!(atan2_scalar(-0., -1.), PI);
    }

    #[test]
    fn atan2_small_x() {
        for &x in &[0.0, 1e-7, -1e-7, 9e-7, -9e-7, f32::MIN_POSITIVE, 1e-40] {
            assert_eq!(atan2_scalar(3., x), FRAC_PI_2);
            assert_eq!(atan2_scalar(-3., x), -FRAC_PI_2);
            assert_eq!(atan2_scalar(1e-20, x), FRAC_PI_2);
        }
    }

    #[test]
    fn atan2_accuracy() {
        let mut rng = rand::rng();
        for _ in 0..200_000 {
            let y: f32 = rng.random_range(-1000f32..1000f32);
            let x: f32 = rng.random_range(-1000f32..1000f32);
            if x.abs() < SMALL_X {
                continue;
            }
            let r = atan2_scalar(y, x) as f64;
            let reference = (y as f64).atan2(x as f64);
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
    fn atan2_accuracy_wide_exponents() {
        let mut rng = rand::rng();
        for _ in 0..200_000 {
            let y = 10f32.powf(rng.random_range(-20f32..20f32)) * rng.random_range(-1f32..1f32);
            let x = 10f32.powf(rng.random_range(-5f32..37f32)) * rng.random_range(-1f32..1f32);
            if x.abs() < SMALL_X {
                continue;
            }
            let r = atan2_scalar(y, x) as f64;
            let reference = (y as f64).atan2(x as f64);
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
    fn atan2_is_odd_in_y() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let y: f32 = rng.random_range(1e-3f32..1e3f32);
            let x: f32 = rng.random_range(-1e3f32..1e3f32);
            assert_eq!(atan2_scalar(-y, x), -atan2_scalar(y, x));
        }
    }

    #[test]
    fn atan2_extreme_magnitudes() {
        assert_close(f32::MAX, f32::MAX, std::f32::consts::FRAC_PI_4);
        assert_close(-f32::MAX, -f32::MAX, -3. * std::f32::consts::FRAC_PI_4);
        assert_close(f32::MAX, 1e-5, FRAC_PI_2);
        assert_close(1., f32::MAX, 0.);
        assert_close(1e-30, -1e30, PI);
        let r = atan2_scalar(f32::MIN_POSITIVE, 1.);
        assert!(r >= 0. && r < 1e-30);
    }

    #[test]
    fn atan2_range_over_bit_patterns() {
        let mut rng = rand::rng();
        for _ in 0..200_000 {
            let y = f32::from_bits(rng.random::<u32>());
            let x = f32::from_bits(rng.random::<u32>());
            if !y.is_finite() || !x.is_finite() {
                continue;
            }
            let r = atan2_scalar(y, x);
            assert!(r.is_finite(), "Non finite result for atan2({}, {})", y, x);
            assert!((-PI..=PI).contains(&r), "Out of range {} for atan2({}, {})", r, y, x);
        }
    }

    #[test]
    fn atan2_non_finite_does_not_panic() {
        let values = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1., -1., 0.];
        for &y in &values {
            for &x in &values {
                _ = atan2_scalar(y, x);
            }
        }
    }

    #[test]
    fn atan2_const() {
        const QUARTER: f32 = atan2_scalar(1., 1.);
        assert!((QUARTER - std::f32::consts::FRAC_PI_4).abs() < 2e-4);
    }
}
