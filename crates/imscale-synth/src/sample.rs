//! Positive-valued sample generators
//!
//! Draws for histogram validation: log-uniform samples fill logarithmic
//! bins evenly, Pareto samples exercise the heavy tail that motivates log
//! binning in the first place.

use crate::rng::SeededRng;

/// Values distributed uniformly in log space over `[min, max)`
///
/// Requires `0 < min < max`.
pub fn log_uniform(len: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    debug_assert!(min > 0.0 && min < max);
    let mut rng = SeededRng::new(seed);
    let log_min = min.ln();
    let span = max.ln() - log_min;
    (0..len)
        .map(|_| (log_min + rng.next_f64() * span).exp())
        .collect()
}

/// Pareto (power-law) draws with density proportional to `x^-exponent`
/// above `x_min`
///
/// Requires `exponent > 1` and `x_min > 0`; uses inverse-transform
/// sampling.
pub fn pareto(len: usize, exponent: f64, x_min: f64, seed: u64) -> Vec<f64> {
    debug_assert!(exponent > 1.0 && x_min > 0.0);
    let mut rng = SeededRng::new(seed);
    (0..len)
        .map(|_| x_min * (1.0 - rng.next_f64()).powf(-1.0 / (exponent - 1.0)))
        .collect()
}
