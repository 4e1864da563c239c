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
use crate::err::Atan2Error;
use crate::scalar::atan2_scalar;
use crate::vector::atan2_lanes;
use std::sync::Arc;

/// Evaluates Atan2 over parallel slices of `y` and `x`.
pub trait Atan2Executor {
    /// `ys`, `xs` and `dst` lengths must match.
    /// `dst[i]` receives the angle of the pair `(ys[i], xs[i])`.
    fn execute(&self, ys: &[f32], xs: &[f32], dst: &mut [f32]) -> Result<(), Atan2Error>;

    /// Kernel this executor runs.
    fn backend(&self) -> Atan2Backend;
}

pub type Atan2DynExecutor = dyn Atan2Executor + Send + Sync;

/// Kernel chosen by [`make_atan2_executor`].
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Atan2Backend {
    Scalar,
    /// Lane arrays, left to the compiler to vectorize.
    Portable,
    Sse41,
    Avx2,
    Neon,
}

/// Declares executor selection options
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Atan2Options {
    /// When disabled every pair goes through the scalar kernel.
    pub allow_simd: bool,
    /// Allows 256-bit vectors where available.
    ///
    /// On some older x86 CPUs AVX2 downclocks the core,
    /// for short bursts 128-bit vectors might be faster.
    pub allow_wide_vectors: bool,
}

impl Default for Atan2Options {
    fn default() -> Self {
        Self {
            allow_simd: true,
            allow_wide_vectors: true,
        }
    }
}

#[inline]
pub(crate) fn check_lanes(ys: &[f32], xs: &[f32], dst: &[f32]) -> Result<(), Atan2Error> {
    if ys.len() != xs.len() {
        return Err(Atan2Error::LaneSizeMismatch(ys.len(), xs.len()));
    }
    if dst.len() != xs.len() {
        return Err(Atan2Error::DestinationSizeMismatch(dst.len(), xs.len()));
    }
    Ok(())
}

/// Finishes pairs left over after `chunks_exact(LANES)`.
#[inline]
pub(crate) fn execute_tail<const LANES: usize>(ys: &[f32], xs: &[f32], dst: &mut [f32]) {
    let start = xs.len() - xs.len() % LANES;
    for ((&y, &x), dst) in ys[start..]
        .iter()
        .zip(xs[start..].iter())
        .zip(dst[start..].iter_mut())
    {
        *dst = atan2_scalar(y, x);
    }
}

struct Atan2Scalar;

impl Atan2Executor for Atan2Scalar {
    fn execute(&self, ys: &[f32], xs: &[f32], dst: &mut [f32]) -> Result<(), Atan2Error> {
        check_lanes(ys, xs, dst)?;
        for ((&y, &x), dst) in ys.iter().zip(xs.iter()).zip(dst.iter_mut()) {
            *dst = atan2_scalar(y, x);
        }
        Ok(())
    }

    fn backend(&self) -> Atan2Backend {
        Atan2Backend::Scalar
    }
}

struct Atan2Portable<const LANES: usize>;

impl<const LANES: usize> Atan2Executor for Atan2Portable<LANES> {
    fn execute(&self, ys: &[f32], xs: &[f32], dst: &mut [f32]) -> Result<(), Atan2Error> {
        check_lanes(ys, xs, dst)?;
        for ((y, x), dst) in ys
            .chunks_exact(LANES)
            .zip(xs.chunks_exact(LANES))
            .zip(dst.chunks_exact_mut(LANES))
        {
            let mut vy = [0f32; LANES];
            let mut vx = [0f32; LANES];
            vy.copy_from_slice(y);
            vx.copy_from_slice(x);
            dst.copy_from_slice(&atan2_lanes(vy, vx));
        }
        execute_tail::<LANES>(ys, xs, dst);
        Ok(())
    }

    fn backend(&self) -> Atan2Backend {
        Atan2Backend::Portable
    }
}

/// Creates the fastest Atan2 executor available on the running CPU.
///
/// Every backend produces the same bits as [`atan2_scalar`] for finite input.
#[allow(unreachable_code)]
pub fn make_atan2_executor(options: Atan2Options) -> Arc<Atan2DynExecutor> {
    if !options.allow_simd {
        return Arc::new(Atan2Scalar);
    }
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "avx")]
        if options.allow_wide_vectors && std::arch::is_x86_feature_detected!("avx2") {
            use crate::vector::Atan2Avx2;
            return Arc::new(Atan2Avx2);
        }
        #[cfg(feature = "sse")]
        if std::arch::is_x86_feature_detected!("sse4.1") {
            use crate::vector::Atan2Sse41;
            return Arc::new(Atan2Sse41);
        }
    }
    #[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
    {
        use crate::vector::Atan2Neon;
        return Arc::new(Atan2Neon);
    }
    Arc::new(Atan2Portable::<8>)
}
