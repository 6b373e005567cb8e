//! 1D signal generators
//!
//! Reference series with known DFA scaling: white noise has exponent near
//! 0.5, its running sum (a random walk) near 1.5.

use crate::rng::SeededRng;

/// Gaussian white noise of the given length
pub fn white_noise(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = SeededRng::new(seed);
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        let (a, b) = rng.next_gaussian_pair();
        out.push(a);
        if out.len() < len {
            out.push(b);
        }
    }
    out
}

/// Random walk: running sum of Gaussian white noise
pub fn random_walk(len: usize, seed: u64) -> Vec<f64> {
    let mut acc = 0.0;
    white_noise(len, seed)
        .into_iter()
        .map(|step| {
            acc += step;
            acc
        })
        .collect()
}

/// Deterministic linear ramp `i * slope`
pub fn linear_ramp(len: usize, slope: f64) -> Vec<f64> {
    (0..len).map(|i| i as f64 * slope).collect()
}
