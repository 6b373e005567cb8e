//! imscale-stats - Scaling-exponent analytics for fractal analysis
//!
//! This crate provides the numerical core for fractal and
//! long-range-correlation analysis of scientific data:
//!
//! - **AllanFactor**: two-dimensional Allan factor analysis over a count grid
//! - **DfaAnalysis**: detrended fluctuation analysis of a 1D signal
//! - **LogBins**: logarithmic histogram binning of a positive-valued sample
//!
//! # Design Philosophy
//!
//! Each analysis consumes a fully-materialized in-memory array and returns an
//! owned, serializable result struct. Malformed inputs fail fast at the
//! boundary; division-by-zero degeneracies arising from legitimately empty
//! data propagate as NaN/infinity in the affected slot so that a single bad
//! scale never hides the rest of the result.
//!
//! The `parallel` feature computes independent box-size levels and window
//! lengths with rayon; results are identical either way.

pub mod allan;
pub mod dfa;
pub mod error;
pub mod logbin;

mod fit;

pub use allan::*;
pub use dfa::*;
pub use error::*;
pub use logbin::*;
