//! Detrended fluctuation analysis
//!
//! DFA estimates the long-range correlation structure of a time series:
//! integrate the mean-subtracted signal into a profile, detrend the profile
//! piecewise with per-window polynomial fits, and measure how the residual
//! fluctuation grows with window length. The slope of ln(fluctuation)
//! against ln(window length) is the scaling exponent; white noise sits near
//! 0.5, a random walk near 1.5.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, FitError, ScalingResult};
use crate::fit::{polyfit, polyval};

/// Window lengths used by [`DfaAnalysis::from_signal`]
pub const DEFAULT_WINDOWS: [usize; 10] = [100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];

/// Detrending order used by [`DfaAnalysis::from_signal`]
pub const DEFAULT_ORDER: usize = 1;

/// Root-mean-square fluctuation after detrending at one window length
///
/// The signal is truncated to a whole number of windows and integrated into
/// a profile of cumulative deviations from the truncated mean. Each window
/// is detrended with a least-squares polynomial of degree `order` against
/// its local sample index, and the RMS residual over all windows is
/// returned.
///
/// A window whose fit is singular is a hard error carrying the window
/// index, since it means the caller chose an unusable window size.
pub fn dfa_fluctuation(signal: &[f64], window_length: usize, order: usize) -> ScalingResult<f64> {
    let len = signal.len();
    if window_length == 0 || len < window_length {
        return Err(DomainError::SignalTooShort { len, window_length }.into());
    }
    if order + 1 > window_length {
        return Err(DomainError::OrderTooHigh {
            order,
            window_length,
        }
        .into());
    }

    let num_windows = len / window_length;
    let n1 = num_windows * window_length;
    let truncated = &signal[..n1];
    let mean = truncated.iter().sum::<f64>() / n1 as f64;

    // Profile of cumulative deviations, exclusive of the current sample:
    // profile[i] = sum over j < i of (x[j] - mean), so profile[0] == 0
    let mut profile = Vec::with_capacity(n1);
    let mut acc = 0.0;
    for &x in truncated {
        profile.push(acc);
        acc += x - mean;
    }

    let local_x: Vec<f64> = (0..window_length).map(|i| i as f64).collect();

    let mut residual_sq = 0.0;
    for (window, segment) in profile.chunks_exact(window_length).enumerate() {
        let coeffs = polyfit(&local_x, segment, order).ok_or(FitError::Singular {
            window,
            window_length,
            order,
        })?;
        for (i, &y) in segment.iter().enumerate() {
            let r = y - polyval(&coeffs, local_x[i]);
            residual_sq += r * r;
        }
    }

    Ok((residual_sq / n1 as f64).sqrt())
}

/// Scaling exponent and fractal dimension estimated by DFA
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DfaAnalysis {
    /// Slope of ln(fluctuation) against ln(window length)
    pub scaling_exponent: f64,
    /// `3 - scaling_exponent` under this profile convention
    pub fractal_dimension: f64,
    /// Window lengths evaluated
    pub window_lengths: Vec<usize>,
    /// Fluctuation magnitude per window length
    pub fluctuations: Vec<f64>,
}

impl DfaAnalysis {
    /// Analyze a signal over the default sweep: windows 100 to 1000 in
    /// steps of 100, linear detrending
    ///
    /// Signals shorter than about 2000 samples leave the larger windows
    /// poorly populated; the defaults assume at least that much data.
    pub fn from_signal(signal: &[f64]) -> ScalingResult<Self> {
        Self::with_windows(signal, &DEFAULT_WINDOWS, DEFAULT_ORDER)
    }

    /// Analyze a signal over caller-chosen window lengths
    ///
    /// Window lengths are independent of one another; with the `parallel`
    /// feature they are evaluated concurrently.
    pub fn with_windows(signal: &[f64], windows: &[usize], order: usize) -> ScalingResult<Self> {
        if windows.len() < 2 {
            return Err(DomainError::TooFewWindows {
                count: windows.len(),
            }
            .into());
        }

        #[cfg(feature = "parallel")]
        let fluctuations = windows
            .par_iter()
            .map(|&w| dfa_fluctuation(signal, w, order))
            .collect::<ScalingResult<Vec<f64>>>()?;

        #[cfg(not(feature = "parallel"))]
        let fluctuations = windows
            .iter()
            .map(|&w| dfa_fluctuation(signal, w, order))
            .collect::<ScalingResult<Vec<f64>>>()?;

        let log_n: Vec<f64> = windows.iter().map(|&w| (w as f64).ln()).collect();
        let log_f: Vec<f64> = fluctuations.iter().map(|&f| f.ln()).collect();

        let coeffs = polyfit(&log_n, &log_f, 1).ok_or(FitError::SlopeFit {
            count: windows.len(),
        })?;
        let scaling_exponent = coeffs[1];

        Ok(Self {
            scaling_exponent,
            fractal_dimension: 3.0 - scaling_exponent,
            window_lengths: windows.to_vec(),
            fluctuations,
        })
    }

    /// `(ln(window length), ln(fluctuation))` pairs behind the slope
    pub fn log_log_points(&self) -> Vec<(f64, f64)> {
        self.window_lengths
            .iter()
            .zip(&self.fluctuations)
            .map(|(&w, &f)| ((w as f64).ln(), f.ln()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imscale_synth::{random_walk, white_noise};

    #[test]
    fn test_constant_signal_has_zero_fluctuation() {
        // A constant signal integrates to an all-zero profile
        let signal = vec![3.5; 500];
        let f = dfa_fluctuation(&signal, 100, 1).unwrap();

        assert_eq!(f, 0.0);
    }

    #[test]
    fn test_quadratic_detrend_absorbs_linear_signal() {
        // The profile of a linear signal is quadratic, so an order-2 fit
        // removes it to rounding noise
        let signal: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let f = dfa_fluctuation(&signal, 20, 2).unwrap();

        assert!(f < 1e-6, "fluctuation {f} should vanish");
    }

    #[test]
    fn test_truncation_ignores_trailing_remainder() {
        // 250 samples at window 100 uses only the first 200
        let mut signal: Vec<f64> = white_noise(250, 11);
        let f_full = dfa_fluctuation(&signal, 100, 1).unwrap();
        for tail in signal.iter_mut().skip(200) {
            *tail = 1e9;
        }
        let f_poisoned = dfa_fluctuation(&signal, 100, 1).unwrap();

        assert_eq!(f_full, f_poisoned);
    }

    #[test]
    fn test_signal_too_short() {
        let signal = vec![1.0; 50];
        let err = dfa_fluctuation(&signal, 100, 1).unwrap_err();

        assert!(err.to_string().contains("window of length 100"));
    }

    #[test]
    fn test_order_too_high_for_window() {
        let signal = vec![1.0; 100];
        assert!(dfa_fluctuation(&signal, 4, 4).is_err());
        assert!(dfa_fluctuation(&signal, 4, 3).is_ok());
    }

    #[test]
    fn test_too_few_windows() {
        let signal = white_noise(2000, 5);
        assert!(DfaAnalysis::with_windows(&signal, &[100], 1).is_err());
    }

    #[test]
    fn test_white_noise_exponent_near_half() {
        let signal = white_noise(8000, 42);
        let dfa = DfaAnalysis::from_signal(&signal).unwrap();

        assert!(
            (dfa.scaling_exponent - 0.5).abs() < 0.15,
            "white noise exponent {} too far from 0.5",
            dfa.scaling_exponent
        );
        assert_eq!(dfa.window_lengths, DEFAULT_WINDOWS.to_vec());
        assert_eq!(dfa.fluctuations.len(), 10);
    }

    #[test]
    fn test_random_walk_exponent_near_three_halves() {
        let signal = random_walk(8000, 42);
        let dfa = DfaAnalysis::from_signal(&signal).unwrap();

        assert!(
            (dfa.scaling_exponent - 1.5).abs() < 0.25,
            "random walk exponent {} too far from 1.5",
            dfa.scaling_exponent
        );
    }

    #[test]
    fn test_fractal_dimension_identity() {
        let signal = white_noise(3000, 7);
        let dfa = DfaAnalysis::from_signal(&signal).unwrap();

        assert!((dfa.fractal_dimension + dfa.scaling_exponent - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_log_points_match_fields() {
        let signal = white_noise(2500, 3);
        let dfa = DfaAnalysis::with_windows(&signal, &[100, 200, 400], 1).unwrap();
        let pts = dfa.log_log_points();

        assert_eq!(pts.len(), 3);
        assert!((pts[2].0 - 400.0_f64.ln()).abs() < 1e-12);
        assert!((pts[2].1 - dfa.fluctuations[2].ln()).abs() < 1e-12);
    }
}
