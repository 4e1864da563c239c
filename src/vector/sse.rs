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
use crate::err::Atan2Error;
use crate::executor::{Atan2Backend, Atan2Executor, check_lanes, execute_tail};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
unsafe fn _mm_recip_approx_ps(v: __m128) -> __m128 {
    unsafe {
        let bits = _mm_castps_si128(v);
        let m = _mm_sub_epi32(
            _mm_set1_epi32(RECIP_MAGIC as i32),
            _mm_and_si128(bits, _mm_set1_epi32(EXPONENT_MASK as i32)),
        );
        let mut seed = _mm_castsi128_ps(_mm_add_epi32(bits, m));
        seed = _mm_sub_ps(
            _mm_set1_ps(RECIP_SEED_A),
            _mm_mul_ps(_mm_set1_ps(RECIP_SEED_B), seed),
        );
        seed = _mm_castsi128_ps(_mm_add_epi32(_mm_castps_si128(seed), m));
        let two = _mm_set1_ps(2.);
        seed = _mm_mul_ps(seed, _mm_sub_ps(two, _mm_mul_ps(v, seed)));
        _mm_mul_ps(seed, _mm_sub_ps(two, _mm_mul_ps(v, seed)))
    }
}

#[inline(always)]
unsafe fn _mm_atan_poly_q1_ps(t: __m128, base: __m128) -> __m128 {
    unsafe {
        let t2 = _mm_mul_ps(t, t);
        let hi = _mm_add_ps(
            _mm_mul_ps(_mm_mul_ps(_mm_set1_ps(P7), t), t2),
            _mm_mul_ps(_mm_set1_ps(P5), t),
        );
        let lo = _mm_add_ps(
            _mm_mul_ps(_mm_mul_ps(_mm_set1_ps(P3), t), t2),
            _mm_mul_ps(_mm_set1_ps(P1), t),
        );
        let t4 = _mm_mul_ps(t2, t2);
        _mm_add_ps(_mm_add_ps(base, _mm_mul_ps(hi, t4)), lo)
    }
}

#[inline(always)]
unsafe fn _mm_atan2_ps(y: __m128, x: __m128) -> __m128 {
    unsafe {
        let zero = _mm_setzero_ps();
        let sign_mask = _mm_set1_ps(-0.);
        let frac_pi_2 = _mm_set1_ps(FRAC_PI_2);

        let ax = _mm_andnot_ps(sign_mask, x);
        let huge = _mm_cmpgt_ps(ax, _mm_set1_ps(HUGE_X));
        let scale = _mm_blendv_ps(_mm_set1_ps(1.), _mm_set1_ps(HUGE_X_SCALE), huge);
        let ys = _mm_mul_ps(y, scale);
        let axs = _mm_mul_ps(ax, scale);

        let rx = _mm_recip_approx_ps(axs);
        let mut ratio = _mm_andnot_ps(sign_mask, _mm_mul_ps(ys, rx));
        ratio = _mm_min_ps(ratio, _mm_set1_ps(RATIO_MAX));
        let rr = _mm_recip_approx_ps(ratio);

        let reduce = _mm_cmpgt_ps(ratio, _mm_set1_ps(1.));
        let t = _mm_blendv_ps(ratio, _mm_xor_ps(rr, sign_mask), reduce);
        let base = _mm_and_ps(frac_pi_2, reduce);
        let mut r = _mm_atan_poly_q1_ps(t, base);

        let x_neg = _mm_cmplt_ps(x, zero);
        r = _mm_blendv_ps(r, _mm_sub_ps(_mm_set1_ps(PI), r), x_neg);
        let small_x = _mm_cmplt_ps(ax, _mm_set1_ps(SMALL_X));
        r = _mm_blendv_ps(r, frac_pi_2, small_x);
        let y_neg = _mm_cmplt_ps(y, zero);
        _mm_xor_ps(r, _mm_and_ps(y_neg, sign_mask))
    }
}

#[target_feature(enable = "sse4.1")]
unsafe fn atan2_sse_x4_impl(ys: [f32; 4], xs: [f32; 4]) -> [f32; 4] {
    unsafe {
        let mut dst = [0f32; 4];
        let r = _mm_atan2_ps(_mm_loadu_ps(ys.as_ptr()), _mm_loadu_ps(xs.as_ptr()));
        _mm_storeu_ps(dst.as_mut_ptr(), r);
        dst
    }
}

/// Caller must ensure SSE 4.1 is available.
pub(crate) fn atan2_sse_x4(ys: [f32; 4], xs: [f32; 4]) -> [f32; 4] {
    unsafe { atan2_sse_x4_impl(ys, xs) }
}

pub(crate) struct Atan2Sse41;

impl Atan2Sse41 {
    #[target_feature(enable = "sse4.1")]
    unsafe fn execute_impl(&self, ys: &[f32], xs: &[f32], dst: &mut [f32]) {
        unsafe {
            for ((y, x), dst) in ys
                .chunks_exact(4)
                .zip(xs.chunks_exact(4))
                .zip(dst.chunks_exact_mut(4))
            {
                let r = _mm_atan2_ps(_mm_loadu_ps(y.as_ptr()), _mm_loadu_ps(x.as_ptr()));
                _mm_storeu_ps(dst.as_mut_ptr(), r);
            }
        }
    }
}

impl Atan2Executor for Atan2Sse41 {
    fn execute(&self, ys: &[f32], xs: &[f32], dst: &mut [f32]) -> Result<(), Atan2Error> {
        check_lanes(ys, xs, dst)?;
        unsafe {
            self.execute_impl(ys, xs, dst);
        }
        execute_tail::<4>(ys, xs, dst);
        Ok(())
    }

    fn backend(&self) -> Atan2Backend {
        Atan2Backend::Sse41
    }
}
