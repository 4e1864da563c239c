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
#![deny(unreachable_pub)]
#![cfg_attr(
    not(any(feature = "avx", feature = "sse", feature = "neon")),
    forbid(unsafe_code)
)]
//! Fast approximate `atan2` for `f32`.
//!
//! Reciprocals come from an exponent bit trick refined by two Newton-Raphson steps,
//! `atan` on `[0, 1]` is a 4 term odd minimax polynomial and quadrant corrections
//! rebuild the full circle. Absolute error is below 2e-4 rad.
//!
//! The scalar kernel and every SIMD kernel run the same operations in the same order,
//! lane results are bit for bit equal to [`atan2_scalar`].
mod consts;
mod err;
mod executor;
mod recip;
mod scalar;
mod vector;

pub use consts::ATAN2F_POLY;
pub use err::Atan2Error;
pub use executor::{
    Atan2Backend, Atan2DynExecutor, Atan2Executor, Atan2Options, make_atan2_executor,
};
pub use recip::recip_approxf;
pub use scalar::atan2_scalar;
pub use vector::{LANES, atan2_vector};
