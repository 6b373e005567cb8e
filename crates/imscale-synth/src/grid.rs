//! 2D count grid generators
//!
//! Grids are filled row by row so a seed pins every cell regardless of
//! platform.

use ndarray::Array2;

use crate::rng::SeededRng;

/// Grid of independent Poisson counts with the given mean rate per cell
///
/// A homogeneous Poisson field is the classic null case for Allan factor
/// analysis: its factor is about 1 at every scale.
pub fn poisson_grid(x_size: usize, y_size: usize, rate: f64, seed: u64) -> Array2<f64> {
    let mut rng = SeededRng::new(seed);
    let mut values = Vec::with_capacity(x_size * y_size);
    for _ in 0..x_size {
        for _ in 0..y_size {
            values.push(rng.next_poisson(rate) as f64);
        }
    }
    Array2::from_shape_vec((x_size, y_size), values)
        .expect("value count equals x_size * y_size")
}

/// Grid with every cell equal to `value`
pub fn uniform_grid(x_size: usize, y_size: usize, value: f64) -> Array2<f64> {
    Array2::from_elem((x_size, y_size), value)
}
