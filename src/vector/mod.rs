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
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx;
#[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
mod neon;
mod portable;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
pub(crate) use avx::Atan2Avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
pub(crate) use neon::Atan2Neon;
pub(crate) use portable::atan2_lanes;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
pub(crate) use sse::Atan2Sse41;

/// Lane count of [`atan2_vector`].
pub const LANES: usize = 4;

/// Computes approximate Atan2 for [`LANES`] independent pairs at once.
///
/// Lane `i` of the result is bit for bit [`atan2_scalar`](crate::atan2_scalar)`(ys[i], xs[i])`.
/// NEON is used on aarch64, SSE 4.1 on x86 when available, otherwise a portable lane kernel.
#[inline]
pub fn atan2_vector(ys: [f32; LANES], xs: [f32; LANES]) -> [f32; LANES] {
    #[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
    {
        neon::atan2_neon_x4(ys, xs)
    }
    #[cfg(not(all(target_arch = "aarch64", target_feature = "neon", feature = "neon")))]
    {
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        if std::arch::is_x86_feature_detected!("sse4.1") {
            return sse::atan2_sse_x4(ys, xs);
        }
        atan2_lanes(ys, xs)
    }
}
