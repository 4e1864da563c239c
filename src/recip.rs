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
use crate::consts::{EXPONENT_MASK, RECIP_MAGIC, RECIP_SEED_A, RECIP_SEED_B};

/// Approximates `1 / v` for a strictly positive finite `v`.
///
/// The exponent of `v` is mirrored around `1.0` directly in the bit pattern,
/// a linear fit of the reciprocal on `[1, 2)` gives the mantissa seed and two
/// Newton-Raphson steps refine it.
///
/// Relative error is below 1.3e-5 for normal inputs. Newton-Raphson converges
/// from below, so the result sits under the true reciprocal up to rounding.
///
/// `v = 0` is degenerate: the seed lands near `1.6e38` and the refinement
/// overflows it to `+inf`.
#[inline(always)]
pub const fn recip_approxf(v: f32) -> f32 {
    let bits = v.to_bits();
    let m = RECIP_MAGIC.wrapping_sub(bits & EXPONENT_MASK);
    let mut seed = f32::from_bits(bits.wrapping_add(m));
    seed = RECIP_SEED_A - RECIP_SEED_B * seed;
    seed = f32::from_bits(seed.to_bits().wrapping_add(m));
    seed = seed * (2.0 - v * seed);
    seed * (2.0 - v * seed)
}
