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
use crate::scalar::atan_poly_q1;
use std::ops::{Mul, Sub};

const SIGN_MASK: u32 = 0x8000_0000;

/// Fixed width group of independent `f32` lanes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub(crate) struct Lanes<const N: usize>(pub(crate) [f32; N]);

/// Per lane all-ones or all-zeros comparison result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct LaneMask<const N: usize>([u32; N]);

impl<const N: usize> Lanes<N> {
    #[inline(always)]
    pub(crate) const fn splat(v: f32) -> Self {
        Self([v; N])
    }

    #[inline(always)]
    fn map(self, op: impl Fn(f32) -> f32) -> Self {
        Self(self.0.map(op))
    }

    #[inline(always)]
    fn zip(self, rhs: Self, op: impl Fn(f32, f32) -> f32) -> Self {
        Self(std::array::from_fn(|i| op(self.0[i], rhs.0[i])))
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(|v| f32::from_bits(v.to_bits() & !SIGN_MASK))
    }

    #[inline(always)]
    fn compare(self, rhs: Self, op: impl Fn(f32, f32) -> bool) -> LaneMask<N> {
        LaneMask(std::array::from_fn(|i| {
            (op(self.0[i], rhs.0[i]) as u32).wrapping_neg()
        }))
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> LaneMask<N> {
        self.compare(rhs, |a, b| a > b)
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> LaneMask<N> {
        self.compare(rhs, |a, b| a < b)
    }

    /// Flips sign of every lane where `mask` is set.
    #[inline(always)]
    fn negate_where(self, mask: LaneMask<N>) -> Self {
        Self(std::array::from_fn(|i| {
            f32::from_bits(self.0[i].to_bits() ^ (mask.0[i] & SIGN_MASK))
        }))
    }
}

impl<const N: usize> LaneMask<N> {
    /// Bitwise blend: `on_true` where the mask is set, `on_false` elsewhere.
    #[inline(always)]
    fn select(self, on_true: Lanes<N>, on_false: Lanes<N>) -> Lanes<N> {
        Lanes(std::array::from_fn(|i| {
            f32::from_bits(
                (on_true.0[i].to_bits() & self.0[i]) | (on_false.0[i].to_bits() & !self.0[i]),
            )
        }))
    }
}

impl<const N: usize> Mul for Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

impl<const N: usize> Sub for Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

#[inline(always)]
fn atan2_lanes_impl<const N: usize>(y: Lanes<N>, x: Lanes<N>) -> Lanes<N> {
    let zero = Lanes::splat(0.);
    let frac_pi_2 = Lanes::splat(FRAC_PI_2);

    let ax = x.abs();
    let huge = ax.gt(Lanes::splat(HUGE_X));
    let scale = huge.select(Lanes::splat(HUGE_X_SCALE), Lanes::splat(1.));
    let ys = y * scale;
    let axs = ax * scale;

    let rx = axs.map(recip_approxf);
    let mut ratio = (ys * rx).abs();
    let ratio_max = Lanes::splat(RATIO_MAX);
    ratio = ratio.lt(ratio_max).select(ratio, ratio_max);
    let rr = ratio.map(recip_approxf);

    let reduce = ratio.gt(Lanes::splat(1.));
    let t = reduce.select(rr.negate_where(reduce), ratio);
    let base = reduce.select(frac_pi_2, zero);
    let mut r = t.zip(base, atan_poly_q1);

    r = x.lt(zero).select(Lanes::splat(PI) - r, r);
    r = ax.lt(Lanes::splat(SMALL_X)).select(frac_pi_2, r);
    r.negate_where(y.lt(zero))
}

/// Portable lane-parallel Atan2, any width.
#[inline]
pub(crate) fn atan2_lanes<const N: usize>(ys: [f32; N], xs: [f32; N]) -> [f32; N] {
    atan2_lanes_impl(Lanes(ys), Lanes(xs)).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atan2_scalar;
    use rand::Rng;

    #[test]
    fn lanes_match_scalar() {
        let mut rng = rand::rng();
        for _ in 0..20_000 {
            let ys: [f32; 8] = std::array::from_fn(|_| rng.random_range(-100f32..100f32));
            let xs: [f32; 8] = std::array::from_fn(|_| rng.random_range(-100f32..100f32));
            let r = atan2_lanes(ys, xs);
            for i in 0..8 {
                assert_eq!(
                    r[i].to_bits(),
                    atan2_scalar(ys[i], xs[i]).to_bits(),
                    "Lane {} diverged for atan2({}, {})",
                    i,
                    ys[i],
                    xs[i]
                );
            }
        }
    }

    #[test]
    fn lanes_are_independent() {
        let ys = [1., -1., 0., 3e38, 1., 0., -0., 5.];
        let xs = [1., -1., 0., 1e-5, f32::MAX, -1., -1., 1e-7];
        let r = atan2_lanes(ys, xs);
        for i in 0..8 {
            assert_eq!(r[i].to_bits(), atan2_scalar(ys[i], xs[i]).to_bits());
        }
        let mut swapped_ys = ys;
        let mut swapped_xs = xs;
        swapped_ys.swap(0, 7);
        swapped_xs.swap(0, 7);
        let swapped = atan2_lanes(swapped_ys, swapped_xs);
        assert_eq!(swapped[7], r[0]);
        assert_eq!(swapped[0], r[7]);
    }

    #[test]
    fn lanes_degenerate_inputs_are_finite() {
        let r = atan2_lanes([0., 1., -1., 0.], [0., 0., 0., 1.]);
        assert_eq!(r, [FRAC_PI_2, FRAC_PI_2, -FRAC_PI_2, 0.]);
    }

    #[test]
    fn select_picks_by_mask() {
        let a = Lanes([1f32, 2., 3., 4.]);
        let b = Lanes([-1f32, -2., -3., -4.]);
        let mask = a.gt(Lanes::splat(2.5));
        assert_eq!(mask.select(a, b), Lanes([-1., -2., 3., 4.]));
        assert_eq!(a.negate_where(mask), Lanes([1., 2., -3., -4.]));
    }
}
