//! Dense vector and matrix helpers for small fixed-size problems.
//!
//! Points are plain `[f64; N]` arrays throughout the solver API. These
//! helpers convert to `nalgebra` types where real linear algebra is needed
//! and hand plain arrays back. [`solve`] decomposes a dynamically sized copy:
//! `nalgebra`'s static `lu` needs a concrete dimension, not a const generic.

use nalgebra::{DMatrix, DVector, SVector};

/// Returns the dot product `a · b`.
#[must_use]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(ai, bi)| ai * bi).sum()
}

/// Returns the Euclidean norm `‖a‖`.
#[must_use]
pub fn norm<const N: usize>(a: &[f64; N]) -> f64 {
    SVector::<f64, N>::from(*a).norm()
}

/// Returns `x + alpha * d`.
#[must_use]
pub fn axpy<const N: usize>(x: &[f64; N], alpha: f64, d: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| x[i] + alpha * d[i])
}

/// Returns `a - b`.
#[must_use]
pub fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

/// Returns `alpha * a`.
#[must_use]
pub fn scale<const N: usize>(alpha: f64, a: &[f64; N]) -> [f64; N] {
    a.map(|ai| alpha * ai)
}

/// Solves the dense system `a · x = b` by LU decomposition with partial pivoting.
///
/// `a` is given row by row. Returns `None` when the matrix is singular or the
/// solution contains non-finite entries.
#[must_use]
pub fn solve<const N: usize>(a: &[[f64; N]; N], b: &[f64; N]) -> Option<[f64; N]> {
    let matrix = DMatrix::<f64>::from_fn(N, N, |i, j| a[i][j]);
    let rhs = DVector::<f64>::from_row_slice(b);

    let x = matrix.lu().solve(&rhs)?;
    if x.iter().all(|xi| xi.is_finite()) {
        Some(std::array::from_fn(|i| x[i]))
    } else {
        None
    }
}
