//! Error types for imscale-stats
//!
//! Two failure classes exist:
//! - domain errors: input rejected before any computation runs
//! - fit errors: a least-squares system turned out to be singular
//!
//! Degenerate ratios over legitimately empty data (a grid scale with zero
//! mean occupancy, an empty histogram bin) are not errors; they surface as
//! NaN/infinity in the corresponding output slot.

use thiserror::Error;

/// Main error type for scaling analyses
#[derive(Error, Debug)]
pub enum ScalingError {
    /// Input rejected at the component boundary
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),

    /// A least-squares fit could not be solved
    #[error("Fit failed: {0}")]
    Fit(#[from] FitError),
}

/// Malformed or undersized input
#[derive(Error, Debug)]
pub enum DomainError {
    /// Grid cannot form a single box at the smallest scale
    #[error("Grid is {x_size}x{y_size}; both dimensions must be at least 4")]
    GridTooSmall { x_size: usize, y_size: usize },

    /// Signal cannot fill one window of the requested length
    #[error("Signal of {len} samples cannot fill a window of length {window_length}")]
    SignalTooShort { len: usize, window_length: usize },

    /// Window fits would be underdetermined at this polynomial order
    #[error("Polynomial order {order} is too high for windows of length {window_length}")]
    OrderTooHigh { order: usize, window_length: usize },

    /// A slope needs at least two window lengths
    #[error("At least two window lengths are required for a slope fit, got {count}")]
    TooFewWindows { count: usize },

    /// Histogram needs at least one bin
    #[error("Bin count must be at least 1, got {bin_count}")]
    InvalidBinCount { bin_count: usize },

    /// Nothing left to bin after dropping non-positive values
    #[error("Sample of {len} values contains no positive entries")]
    NoPositiveValues { len: usize },
}

/// Numerically singular or degenerate least-squares fit
#[derive(Error, Debug)]
pub enum FitError {
    /// The normal equations for one detrending window are singular
    #[error("Singular fit in window {window} (length {window_length}, order {order})")]
    Singular {
        window: usize,
        window_length: usize,
        order: usize,
    },

    /// The final log-log regression is degenerate
    #[error("Singular log-log slope fit over {count} points")]
    SlopeFit { count: usize },
}

/// Result type alias for scaling analyses
pub type ScalingResult<T> = Result<T, ScalingError>;

/// Result type alias for boundary validation
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type alias for fit operations
pub type FitResult<T> = Result<T, FitError>;
