//! Least-squares polynomial fitting
//!
//! Shared by the DFA detrending step and the final log-log slope
//! regressions. Coefficients are stored in ascending powers and evaluated
//! with Horner's rule.

use nalgebra::{Cholesky, DMatrix, DVector};

/// Fit `y = c[0] + c[1] x + ... + c[order] x^order` by least squares.
///
/// Solves the normal equations of the Vandermonde system with a Cholesky
/// factorization. Returns `None` when the system is underdetermined or the
/// normal matrix is not positive definite (degenerate abscissae, or
/// non-finite input poisoning the matrix).
pub(crate) fn polyfit(x: &[f64], y: &[f64], order: usize) -> Option<Vec<f64>> {
    debug_assert_eq!(x.len(), y.len());
    let rows = x.len();
    let cols = order + 1;
    if rows < cols {
        return None;
    }

    let vandermonde = DMatrix::from_fn(rows, cols, |i, j| x[i].powi(j as i32));
    let vt = vandermonde.transpose();
    let normal = &vt * &vandermonde;
    let rhs = &vt * DVector::from_column_slice(y);

    let coeffs = Cholesky::new(normal)?.solve(&rhs);
    Some(coeffs.as_slice().to_vec())
}

/// Evaluate a polynomial with ascending-power coefficients at `x`.
pub(crate) fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
