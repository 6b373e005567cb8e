//! imscale-synth - Deterministic synthetic data for scaling analysis
//!
//! Generates reference inputs with known scaling behavior:
//!
//! - **signal**: 1D series (white noise, random walks, ramps) for DFA
//! - **grid**: 2D count grids (Poisson, uniform) for Allan factor analysis
//! - **sample**: positive-valued samples (log-uniform, Pareto) for log
//!   binning
//!
//! Everything is seeded and reproducible: the same seed always yields the
//! same data, on every platform, which makes these generators usable as
//! fixtures in statistical tests.

pub mod grid;
pub mod rng;
pub mod sample;
pub mod signal;

pub use grid::*;
pub use rng::*;
pub use sample::*;
pub use signal::*;
