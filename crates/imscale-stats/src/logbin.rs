//! Logarithmic histogram binning
//!
//! Bins the positive part of a sample into intervals spaced evenly in log
//! space and reports normalized densities. Log binning keeps the sparse
//! tail of power-law-distributed data populated where linear bins starve
//! it.
//!
//! Two behaviors are part of the method's definition and deliberately kept:
//! densities are normalized by the *full* sample size (including values
//! dropped as non-positive), so the density integrates to the retained
//! fraction of the sample, not to 1; and the lower edge is the log of
//! `floor(min)`, which collapses to negative infinity when the smallest
//! positive value is below 1.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Log-binned histogram of the positive values of a sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogBins {
    /// Bin midpoints in original scale
    pub midpoints: Vec<f64>,
    /// Normalized density per bin: `count / bin width / sample_size`
    ///
    /// The denominator is the full sample size including dropped values.
    pub frequencies: Vec<f64>,
    /// Counting-statistics error per bin, `frequency / sqrt(count)`
    ///
    /// NaN for empty bins.
    pub errors: Vec<f64>,
    /// Raw count per bin
    pub counts: Vec<usize>,
    /// Total input size, including dropped non-positive values
    pub sample_size: usize,
    /// Number of values assigned to a bin
    pub binned: usize,
    log_min: f64,
    log_step: f64,
}

impl LogBins {
    /// Bin the positive values of a sample into `bin_count` logarithmic bins
    ///
    /// Non-positive values are dropped silently; [`LogBins::dropped_fraction`]
    /// reports how much was discarded. A sample with no positive values at
    /// all is an error. Every bin is reported, including empty ones.
    ///
    /// Bins are half-open in log space; the last bin's upper edge is
    /// inclusive so the maximum is always assigned and each retained value
    /// lands in exactly one bin.
    pub fn from_sample(sample: &[f64], bin_count: usize) -> DomainResult<Self> {
        if bin_count < 1 {
            return Err(DomainError::InvalidBinCount { bin_count });
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        let first_positive = sorted.partition_point(|&v| v <= 0.0);
        let positives = &sorted[first_positive..];
        if positives.is_empty() {
            return Err(DomainError::NoPositiveValues { len: sample.len() });
        }

        let log_min = positives[0].floor().ln();
        let log_max = positives[positives.len() - 1].ceil().ln();
        let log_step = (log_max - log_min) / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for &v in positives {
            let log_v = v.ln();
            for (k, slot) in counts.iter_mut().enumerate() {
                let lower = k as f64 * log_step + log_min;
                let in_bin = if k + 1 == bin_count {
                    log_v >= lower && log_v <= log_max
                } else {
                    log_v >= lower && log_v < (k + 1) as f64 * log_step + log_min
                };
                if in_bin {
                    *slot += 1;
                    break;
                }
            }
        }

        let total = sample.len() as f64;
        let mut midpoints = Vec::with_capacity(bin_count);
        let mut frequencies = Vec::with_capacity(bin_count);
        let mut errors = Vec::with_capacity(bin_count);
        for (k, &count) in counts.iter().enumerate() {
            let lower = (k as f64 * log_step + log_min).exp();
            let upper = ((k + 1) as f64 * log_step + log_min).exp();
            let frequency = count as f64 / (upper - lower) / total;

            midpoints.push(((k + 1) as f64 * log_step - 0.5 * log_step + log_min).exp());
            frequencies.push(frequency);
            // 0/0 for an empty bin yields NaN
            errors.push(frequency / (count as f64).sqrt());
        }

        let binned = counts.iter().sum();
        Ok(Self {
            midpoints,
            frequencies,
            errors,
            counts,
            sample_size: sample.len(),
            binned,
            log_min,
            log_step,
        })
    }

    /// Fraction of the input that was not binned (non-positive or NaN)
    pub fn dropped_fraction(&self) -> f64 {
        (self.sample_size - self.binned) as f64 / self.sample_size as f64
    }

    /// Log-space `(lower, upper)` edges of bin `k`
    pub fn log_edges(&self, k: usize) -> (f64, f64) {
        (
            k as f64 * self.log_step + self.log_min,
            (k + 1) as f64 * self.log_step + self.log_min,
        )
    }

    /// Bin widths in original scale
    pub fn widths(&self) -> Vec<f64> {
        (0..self.len())
            .map(|k| {
                let (lower, upper) = self.log_edges(k);
                upper.exp() - lower.exp()
            })
            .collect()
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// True for a result with no bins
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}
