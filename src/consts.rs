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
#![allow(clippy::excessive_precision)]

/// Odd minimax coefficients for `atan(t)`, `t ∈ [0, 1]`, stored as `[p7, p3, p5, p1]`.
///
/// The order pairs the terms the way the even/odd split consumes them:
/// `(p7, p5)` for the high half and `(p3, p1)` for the low half.
pub const ATAN2F_POLY: [f32; 4] = [
    -0.0443265554792128,
    -0.3258083974640975,
    0.1555786518463281,
    0.9997878412794807,
];

pub(crate) const P7: f32 = ATAN2F_POLY[0];
pub(crate) const P3: f32 = ATAN2F_POLY[1];
pub(crate) const P5: f32 = ATAN2F_POLY[2];
pub(crate) const P1: f32 = ATAN2F_POLY[3];

pub(crate) const PI: f32 = std::f32::consts::PI;
pub(crate) const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;

/// Below this `|x|` the result is pinned to `±π/2`.
pub(crate) const SMALL_X: f32 = 0.000001;

// |x| above 2^64 is scaled by 2^-64 together with y, reciprocal seed wraps past 2^126
pub(crate) const HUGE_X: f32 = f32::from_bits(0x5f80_0000);
pub(crate) const HUGE_X_SCALE: f32 = f32::from_bits(0x1f80_0000);

// 2^100, atan(2^100) == π/2 in f32
pub(crate) const RATIO_MAX: f32 = f32::from_bits(0x7180_0000);

pub(crate) const RECIP_MAGIC: u32 = 0x3f80_0000;
pub(crate) const EXPONENT_MASK: u32 = 0x7f80_0000;
pub(crate) const RECIP_SEED_A: f32 = 1.41176471;
pub(crate) const RECIP_SEED_B: f32 = 0.47058824;
