//! Two-dimensional Allan factor analysis
//!
//! The Allan factor compares the variance of event counts between adjacent
//! regions to the mean count per region, across a series of doubling box
//! sizes. For a fractal point process the factor grows as a power of the
//! box area; the slope of the log-log curve is the scaling exponent.
//!
//! Box sides run 1, 2, 4, ... up to `floor(min(x, y) / 4)`. When a box size
//! does not divide a dimension evenly, box onsets follow the floor-spaced
//! partition `floor(index * dim / num_boxes)`, so interior boxes absorb the
//! remainder. This non-uniform spacing is part of the method's definition
//! and is preserved exactly.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use ndarray::{s, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Allan factor series over doubling box sizes
///
/// Produced by [`AllanFactor::from_grid`]; `factors[k]` corresponds to
/// square boxes of side `box_sizes[k] == 2^k`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllanFactor {
    /// Box side length per level, `2^k`
    pub box_sizes: Vec<usize>,
    /// Dimensionless variance ratio per level
    ///
    /// A level whose mean box occupancy is zero carries NaN or infinity
    /// here; see [`AllanFactor::degenerate_levels`].
    pub factors: Vec<f64>,
}

impl AllanFactor {
    /// Run Allan factor analysis over a grid of non-negative counts
    ///
    /// Both grid dimensions must be at least 4 so that the smallest scale
    /// produces at least four boxes along each axis. Counts may be integer
    /// or real valued; the grid is never mutated.
    ///
    /// An empty region at some scale makes that level's ratio 0/0; the NaN
    /// is kept in place rather than masked, since it tells the caller the
    /// input carries no events at that scale.
    pub fn from_grid(grid: ArrayView2<'_, f64>) -> DomainResult<Self> {
        let (x_size, y_size) = grid.dim();
        let max_box = x_size.min(y_size) / 4;
        if max_box < 1 {
            return Err(DomainError::GridTooSmall { x_size, y_size });
        }

        let num_levels = max_box.ilog2() as usize + 1;
        let box_sizes: Vec<usize> = (0..num_levels).map(|k| 1usize << k).collect();

        #[cfg(feature = "parallel")]
        let factors: Vec<f64> = box_sizes
            .par_iter()
            .map(|&size| level_factor(&grid, size))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let factors: Vec<f64> = box_sizes
            .iter()
            .map(|&size| level_factor(&grid, size))
            .collect();

        Ok(Self { box_sizes, factors })
    }

    /// Number of box-size levels
    pub fn len(&self) -> usize {
        self.box_sizes.len()
    }

    /// True when no level was produced
    pub fn is_empty(&self) -> bool {
        self.box_sizes.is_empty()
    }

    /// Indices of levels whose factor is NaN or infinite
    ///
    /// These mark scales at which the grid held no events; the computation
    /// still succeeded at every other scale.
    pub fn degenerate_levels(&self) -> Vec<usize> {
        self.factors
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_finite())
            .map(|(k, _)| k)
            .collect()
    }

    /// `(ln(box_size^2), ln(factor))` pairs for slope estimation
    ///
    /// The scaling exponent is the slope of these points; levels with
    /// non-positive or non-finite factors are skipped.
    pub fn log_log_points(&self) -> Vec<(f64, f64)> {
        self.box_sizes
            .iter()
            .zip(&self.factors)
            .filter(|(_, f)| f.is_finite() && **f > 0.0)
            .map(|(&size, &f)| (((size * size) as f64).ln(), f.ln()))
            .collect()
    }
}

/// Allan factor at a single box-size level.
fn level_factor(grid: &ArrayView2<'_, f64>, box_size: usize) -> f64 {
    let (x_size, y_size) = grid.dim();
    let num_x = x_size / box_size;
    let num_y = y_size / box_size;

    let x_onset = |i: usize| (i as f64 * x_size as f64 / num_x as f64).floor() as usize;
    let y_onset = |j: usize| (j as f64 * y_size as f64 / num_y as f64).floor() as usize;

    let box_sum = |x0: usize, y0: usize| -> f64 {
        if box_size == 1 {
            grid[(x0, y0)]
        } else {
            grid.slice(s![x0..x0 + box_size, y0..y0 + box_size]).sum()
        }
    };

    // X striping: squared differences between horizontally adjacent boxes
    let mut x_total = 0.0;
    for i in 0..num_x - 1 {
        for j in 0..num_y {
            let curr = box_sum(x_onset(i), y_onset(j));
            let next = box_sum(x_onset(i + 1), y_onset(j));
            x_total += (curr - next) * (curr - next);
        }
    }
    let pair_norm = ((num_x - 1) * (num_y - 1)) as f64;
    let x_ex = x_total / pair_norm;

    // Y striping; the grand total over every box accumulates here so each
    // box contributes exactly once
    let mut y_total = 0.0;
    let mut all_total = 0.0;
    for i in 0..num_x {
        for j in 0..num_y {
            let curr = box_sum(x_onset(i), y_onset(j));
            if j != num_y - 1 {
                let next = box_sum(x_onset(i), y_onset(j + 1));
                y_total += (curr - next) * (curr - next);
            }
            all_total += curr;
        }
    }
    let y_ex = y_total / pair_norm;
    let all_ex = all_total / (num_x * num_y) as f64;

    // all_ex == 0 makes this 0/0 for a grid empty at this scale
    ((x_ex + y_ex) / 2.0) / (2.0 * all_ex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_level_count_and_box_sizes() {
        // min dimension 64 gives max box 16 and levels 1, 2, 4, 8, 16
        let grid = Array2::from_elem((64, 80), 1.0);
        let af = AllanFactor::from_grid(grid.view()).unwrap();

        assert_eq!(af.len(), 5);
        assert_eq!(af.box_sizes, vec![1, 2, 4, 8, 16]);
        assert_eq!(af.factors.len(), af.box_sizes.len());
    }

    #[test]
    fn test_smallest_valid_grid_has_one_level() {
        let grid = Array2::from_elem((4, 4), 2.0);
        let af = AllanFactor::from_grid(grid.view()).unwrap();

        assert_eq!(af.box_sizes, vec![1]);
    }

    #[test]
    fn test_grid_too_small() {
        let grid = Array2::from_elem((3, 100), 1.0);
        let err = AllanFactor::from_grid(grid.view()).unwrap_err();

        assert!(matches!(
            err,
            DomainError::GridTooSmall {
                x_size: 3,
                y_size: 100
            }
        ));
    }

    #[test]
    fn test_uniform_grid_is_zero_at_every_level() {
        // Identical counts everywhere: adjacent boxes never differ
        let grid = Array2::from_elem((32, 32), 5.0);
        let af = AllanFactor::from_grid(grid.view()).unwrap();

        for (&size, &f) in af.box_sizes.iter().zip(&af.factors) {
            assert_eq!(f, 0.0, "box size {size} should give factor 0");
        }
        assert!(af.degenerate_levels().is_empty());
    }

    #[test]
    fn test_empty_grid_is_degenerate_at_every_level() {
        let grid = Array2::from_elem((16, 16), 0.0);
        let af = AllanFactor::from_grid(grid.view()).unwrap();

        assert_eq!(af.degenerate_levels(), vec![0, 1, 2]);
        assert!(af.factors.iter().all(|f| f.is_nan()));
        assert!(af.log_log_points().is_empty());
    }

    #[test]
    fn test_column_ramp_hand_computed() {
        // grid[(x, y)] = x on a 4x4 grid, single level of unit boxes.
        // Horizontal neighbor differences are all 1 (12 pairs), vertical
        // all 0, grand total 24 over 16 boxes:
        // ((12/9 + 0) / 2) / (2 * 24/16) = 2/9.
        let grid = Array2::from_shape_fn((4, 4), |(x, _)| x as f64);
        let af = AllanFactor::from_grid(grid.view()).unwrap();

        assert_eq!(af.len(), 1);
        assert!((af.factors[0] - 2.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_input_grid_unchanged() {
        let grid = Array2::from_shape_fn((8, 8), |(x, y)| (x * 8 + y) as f64);
        let before = grid.clone();
        AllanFactor::from_grid(grid.view()).unwrap();

        assert_eq!(grid, before);
    }

    #[test]
    fn test_poisson_grid_is_finite_and_near_one() {
        // A homogeneous Poisson process has Allan factor about 1 at all
        // scales; loose bounds absorb estimator variance at large boxes
        let grid = imscale_synth::poisson_grid(96, 96, 5.0, 99);
        let af = AllanFactor::from_grid(grid.view()).unwrap();

        assert!(af.degenerate_levels().is_empty());
        for (&size, &f) in af.box_sizes.iter().zip(&af.factors) {
            assert!(
                (0.5..2.0).contains(&f),
                "box size {size}: factor {f} outside Poisson range"
            );
        }
    }

    #[test]
    fn test_log_log_points_skip_nonpositive() {
        let af = AllanFactor {
            box_sizes: vec![1, 2, 4],
            factors: vec![0.5, 0.0, f64::NAN],
        };
        let pts = af.log_log_points();

        assert_eq!(pts.len(), 1);
        assert!((pts[0].0 - 0.0_f64).abs() < 1e-12);
        assert!((pts[0].1 - 0.5_f64.ln()).abs() < 1e-12);
    }
}
