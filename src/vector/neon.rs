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
use std::arch::aarch64::*;

#[inline(always)]
unsafe fn vrecip_approxq_f32(v: float32x4_t) -> float32x4_t {
    unsafe {
        let bits = vreinterpretq_u32_f32(v);
        let m = vsubq_u32(vdupq_n_u32(RECIP_MAGIC), vandq_u32(bits, vdupq_n_u32(EXPONENT_MASK)));
        let mut seed = vreinterpretq_f32_u32(vaddq_u32(bits, m));
        seed = vsubq_f32(vdupq_n_f32(RECIP_SEED_A), vmulq_f32(vdupq_n_f32(RECIP_SEED_B), seed));
        seed = vreinterpretq_f32_u32(vaddq_u32(vreinterpretq_u32_f32(seed), m));
        // vrecpsq_f32 is fused, so the step is spelled out
        let two = vdupq_n_f32(2.);
        seed = vmulq_f32(seed, vsubq_f32(two, vmulq_f32(v, seed)));
        vmulq_f32(seed, vsubq_f32(two, vmulq_f32(v, seed)))
    }
}

#[inline(always)]
unsafe fn vatan_poly_q1q_f32(t: float32x4_t, base: float32x4_t) -> float32x4_t {
    unsafe {
        let t2 = vmulq_f32(t, t);
        let hi = vaddq_f32(vmulq_f32(vmulq_n_f32(t, P7), t2), vmulq_n_f32(t, P5));
        let lo = vaddq_f32(vmulq_f32(vmulq_n_f32(t, P3), t2), vmulq_n_f32(t, P1));
        let t4 = vmulq_f32(t2, t2);
        vaddq_f32(vaddq_f32(base, vmulq_f32(hi, t4)), lo)
    }
}

#[inline(always)]
unsafe fn vatan2q_f32(y: float32x4_t, x: float32x4_t) -> float32x4_t {
    unsafe {
        let zero = vdupq_n_f32(0.);
        let frac_pi_2 = vdupq_n_f32(FRAC_PI_2);

        let ax = vabsq_f32(x);
        let huge = vcgtq_f32(ax, vdupq_n_f32(HUGE_X));
        let scale = vbslq_f32(huge, vdupq_n_f32(HUGE_X_SCALE), vdupq_n_f32(1.));
        let ys = vmulq_f32(y, scale);
        let axs = vmulq_f32(ax, scale);

        let rx = vrecip_approxq_f32(axs);
        let mut ratio = vabsq_f32(vmulq_f32(ys, rx));
        let ratio_max = vdupq_n_f32(RATIO_MAX);
        ratio = vbslq_f32(vcltq_f32(ratio, ratio_max), ratio, ratio_max);
        let rr = vrecip_approxq_f32(ratio);

        let reduce = vcgtq_f32(ratio, vdupq_n_f32(1.));
        let t = vbslq_f32(reduce, vnegq_f32(rr), ratio);
        let base = vbslq_f32(reduce, frac_pi_2, zero);
        let mut r = vatan_poly_q1q_f32(t, base);

        let x_neg = vcltq_f32(x, zero);
        r = vbslq_f32(x_neg, vsubq_f32(vdupq_n_f32(PI), r), r);
        let small_x = vcltq_f32(ax, vdupq_n_f32(SMALL_X));
        r = vbslq_f32(small_x, frac_pi_2, r);
        let y_neg = vcltq_f32(y, zero);
        vbslq_f32(y_neg, vnegq_f32(r), r)
    }
}

pub(crate) fn atan2_neon_x4(ys: [f32; 4], xs: [f32; 4]) -> [f32; 4] {
    unsafe {
        let mut dst = [0f32; 4];
        let r = vatan2q_f32(vld1q_f32(ys.as_ptr()), vld1q_f32(xs.as_ptr()));
        vst1q_f32(dst.as_mut_ptr(), r);
        dst
    }
}

pub(crate) struct Atan2Neon;

impl Atan2Executor for Atan2Neon {
    fn execute(&self, ys: &[f32], xs: &[f32], dst: &mut [f32]) -> Result<(), Atan2Error> {
        check_lanes(ys, xs, dst)?;
        unsafe {
            for ((y, x), dst) in ys
                .chunks_exact(4)
                .zip(xs.chunks_exact(4))
                .zip(dst.chunks_exact_mut(4))
            {
                let r = vatan2q_f32(vld1q_f32(y.as_ptr()), vld1q_f32(x.as_ptr()));
                vst1q_f32(dst.as_mut_ptr(), r);
            }
        }
        execute_tail::<4>(ys, xs, dst);
        Ok(())
    }

    fn backend(&self) -> Atan2Backend {
        Atan2Backend::Neon
    }
}
