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
use fastatan2::{Atan2Options, atan2_scalar, atan2_vector, make_atan2_executor};
use rand::Rng;

struct ErrorReport {
    max_error: f64,
    worst_y: f32,
    worst_x: f32,
    samples: usize,
}

fn sweep(pairs: impl Iterator<Item = (f32, f32)>) -> ErrorReport {
    let mut report = ErrorReport {
        max_error: 0.,
        worst_y: 0.,
        worst_x: 0.,
        samples: 0,
    };
    for (y, x) in pairs {
        // pinned to ±π/2 below this
        if x.abs() < 1e-6 {
            continue;
        }
        let error = (atan2_scalar(y, x) as f64 - pxfm::f_atan2f(y, x) as f64).abs();
        report.samples += 1;
        if error > report.max_error {
            report.max_error = error;
            report.worst_y = y;
            report.worst_x = x;
        }
    }
    report
}

fn print_report(name: &str, report: &ErrorReport) {
    println!(
        "{:<20} samples {:>9} max error {:.6e} at atan2({}, {})",
        name, report.samples, report.max_error, report.worst_y, report.worst_x
    );
}

fn main() {
    const STEPS: usize = 1 << 20;
    let circle = sweep((0..STEPS).map(|i| {
        let angle = -std::f32::consts::PI + i as f32 * (std::f32::consts::TAU / STEPS as f32);
        (angle.sin(), angle.cos())
    }));
    print_report("unit circle", &circle);

    let mut rng = rand::rng();
    let uniform = sweep((0..STEPS).map(|_| {
        (
            rng.random_range(-1000f32..1000f32),
            rng.random_range(-1000f32..1000f32),
        )
    }));
    print_report("uniform [-1e3, 1e3]", &uniform);

    let bits = sweep(
        (0..STEPS)
            .map(|_| (f32::from_bits(rng.random()), f32::from_bits(rng.random())))
            .filter(|(y, x)| y.is_finite() && x.is_finite()),
    );
    print_report("finite bit patterns", &bits);

    let mut mismatches = 0usize;
    for _ in 0..STEPS / 4 {
        let ys: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1e4f32..1e4f32));
        let xs: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1e4f32..1e4f32));
        let r = atan2_vector(ys, xs);
        for i in 0..4 {
            if r[i].to_bits() != atan2_scalar(ys[i], xs[i]).to_bits() {
                mismatches += 1;
            }
        }
    }
    println!("vector lanes diverging from scalar: {}", mismatches);

    let executor = make_atan2_executor(Atan2Options::default());
    let ys: Vec<f32> = (0..STEPS).map(|_| rng.random_range(-1f32..1f32)).collect();
    let xs: Vec<f32> = (0..STEPS).map(|_| rng.random_range(-1f32..1f32)).collect();
    let mut dst = vec![0f32; STEPS];
    executor.execute(&ys, &xs, &mut dst).unwrap();
    let diverged = ys
        .iter()
        .zip(xs.iter())
        .zip(dst.iter())
        .filter(|((y, x), r)| atan2_scalar(**y, **x).to_bits() != r.to_bits())
        .count();
    println!(
        "executor {:?} diverging from scalar: {}",
        executor.backend(),
        diverged
    );
}
