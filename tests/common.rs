//! Test utilities for VastuGraph.
//!
//! Scan generators shared by the integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scan with every reading at the same range.
pub fn constant_scan(n: usize, range: f64) -> Vec<f64> {
    vec![range; n]
}

/// Scan from the centre of a rectangular room, 270° sweep from -135°.
///
/// Bearings use endpoint spacing so reading `i` matches the default
/// projector.
pub fn room_scan(half_width: f64, half_depth: f64, n: usize) -> Vec<f64> {
    let increment = 270.0 / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let bearing = (-135.0 + i as f64 * increment).to_radians();
            let (sin, cos) = bearing.sin_cos();
            let tx = if cos.abs() > 1e-12 {
                half_depth / cos.abs()
            } else {
                f64::INFINITY
            };
            let ty = if sin.abs() > 1e-12 {
                half_width / sin.abs()
            } else {
                f64::INFINITY
            };
            tx.min(ty)
        })
        .collect()
}

/// Constant-range scan with uniform noise, deterministic per seed.
pub fn noisy_scan(n: usize, range: f64, noise: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (range + rng.gen_range(-noise..=noise)).max(0.0))
        .collect()
}

/// Scan alternating between a near and a far range.
pub fn alternating_scan(n: usize, near: f64, far: f64) -> Vec<f64> {
    (0..n)
        .map(|i| if i % 2 == 0 { near } else { far })
        .collect()
}
