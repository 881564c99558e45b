//! optimization::linalg — eigenvalue test and Newton-step solve.
//!
//! Purpose
//! -------
//! Provide the two pieces of dense linear algebra the hybrid loop needs:
//! the strict positive-definiteness test that gates the Newton step, and
//! the Hessian inversion that computes it. This module owns the conversion
//! between `ndarray` and `nalgebra` types so the rest of the optimizer can
//! stay on the crate's canonical `ndarray` aliases.
//!
//! Key behaviors
//! -------------
//! - Copy the `ndarray` Hessian into a `nalgebra::DMatrix` (`fill_dmatrix`)
//!   for eigen-based linear algebra.
//! - Test strict positive-definiteness via symmetric eigendecomposition:
//!   every eigenvalue must be `> 0` ([`is_positive_definite`]).
//! - Attempt the Newton direction `H⁻¹·g` via matrix inversion, reporting
//!   failure as `None` so the caller can fall back to gradient descent
//!   ([`try_newton_step`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Hessians passed in are square with `n = grad.len()`; they come from
//!   the optimizer's own Hessian assembly, which symmetrizes them first.
//! - A Hessian containing NaN or infinite entries is never positive
//!   definite and never yields a Newton step; both helpers degrade to the
//!   gradient-descent path without panicking.
//!
//! Conventions
//! -----------
//! - Strict inequality: a zero eigenvalue means NOT positive definite.
//! - Neither helper returns a `Result`; inversion failure is an expected
//!   numeric condition, not an error (see the error-handling design of the
//!   optimizer module).
//!
//! Testing notes
//! -------------
//! - Unit tests cover definite, indefinite, semidefinite, singular, and
//!   non-finite matrices, and check the Newton direction against a
//!   closed-form solve on a diagonal system.
use crate::optimization::types::{Grad, Hessian};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// Test whether a Hessian is strictly positive definite.
///
/// Computes the eigenvalues of the (symmetric) matrix and requires every
/// one of them to be strictly greater than zero. A matrix with a zero
/// eigenvalue is therefore not positive definite, and any non-finite entry
/// disqualifies the matrix outright.
///
/// Never panics and never errors; numeric trouble simply answers `false`,
/// which routes the caller onto the gradient-descent path.
pub fn is_positive_definite(hessian: &Hessian) -> bool {
    if hessian.iter().any(|v| !v.is_finite()) {
        return false;
    }
    let n = hessian.nrows();
    let mut h = DMatrix::<f64>::zeros(n, n);
    fill_dmatrix(hessian, &mut h);
    let eigenvalues = h.symmetric_eigen().eigenvalues;
    eigenvalues.iter().all(|&lambda| lambda > 0.0)
}

/// Attempt the Newton direction `H⁻¹·g`.
///
/// Returns `Some(direction)` when the Hessian inverts cleanly and the
/// resulting direction is finite in every coordinate. Returns `None` when
/// the matrix is singular (or numerically degenerate enough that inversion
/// fails or produces non-finite values); the caller then takes a
/// gradient-descent step for that iteration only.
pub fn try_newton_step(hessian: &Hessian, grad: &Grad) -> Option<Array1<f64>> {
    let n = grad.len();
    let mut h = DMatrix::<f64>::zeros(n, n);
    fill_dmatrix(hessian, &mut h);
    let inverse = h.try_inverse()?;
    let g = DVector::<f64>::from_iterator(n, grad.iter().copied());
    let direction = inverse * g;
    if direction.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some(Array1::from_iter(direction.iter().copied()))
}

/// Enforce symmetry of a Hessian matrix in-place.
///
/// Replaces each off-diagonal pair `(i, j)` / `(j, i)` with their average,
/// leaving the diagonal untouched. Symbolic mixed partials are equal for
/// the expression class this crate evaluates, but floating-point evaluation
/// of the two orderings can differ in the last bits; the eigenvalue test
/// assumes an exactly symmetric matrix.
pub fn symmetrize(hessian: &mut Hessian) {
    for i in 0..hessian.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hessian[[i, j]] + hessian[[j, i]]);
            hessian[[i, j]] = avg;
            hessian[[j, i]] = avg;
        }
    }
}

// Copy a square `ndarray` matrix into a preallocated `DMatrix`, column by
// column to match nalgebra's column-major storage.
fn fill_dmatrix(source: &Hessian, target: &mut DMatrix<f64>) {
    let n = source.ncols();
    for j in 0..n {
        for i in 0..n {
            target[(i, j)] = source[[i, j]];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Positive-definiteness classification for definite, indefinite,
    //   semidefinite, and non-finite matrices.
    // - Newton-step computation against closed forms and its failure modes.
    // - In-place symmetrization.
    //
    // They intentionally DO NOT cover the step-selection policy, which lives
    // in the hybrid loop.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A diagonal matrix with positive entries is positive definite.
    fn identity_scaled_is_positive_definite() {
        let h = array![[2.0, 0.0], [0.0, 3.0]];
        assert!(is_positive_definite(&h));
    }

    #[test]
    // Purpose
    // -------
    // A negative-definite matrix and an indefinite (saddle) matrix both fail
    // the test.
    fn negative_definite_and_indefinite_fail() {
        let negative = array![[-1.0, 0.0], [0.0, -2.0]];
        let saddle = array![[2.0, 0.0], [0.0, -2.0]];
        assert!(!is_positive_definite(&negative));
        assert!(!is_positive_definite(&saddle));
    }

    #[test]
    // Purpose
    // -------
    // Strict inequality: a zero eigenvalue means not positive definite.
    fn zero_eigenvalue_fails_strict_test() {
        let semidefinite = array![[1.0, 0.0], [0.0, 0.0]];
        assert!(!is_positive_definite(&semidefinite));
    }

    #[test]
    // Purpose
    // -------
    // Non-finite entries disqualify the matrix without panicking.
    fn non_finite_entries_are_not_positive_definite() {
        let with_nan = array![[f64::NAN, 0.0], [0.0, 1.0]];
        let with_inf = array![[f64::INFINITY, 0.0], [0.0, 1.0]];
        assert!(!is_positive_definite(&with_nan));
        assert!(!is_positive_definite(&with_inf));
    }

    #[test]
    // Purpose
    // -------
    // For a diagonal Hessian the Newton direction is the coordinate-wise
    // quotient g_i / h_ii.
    //
    // Given
    // -----
    // - H = diag(2, 4) and g = (2, 2).
    //
    // Expect
    // ------
    // - try_newton_step returns (1.0, 0.5).
    fn newton_step_matches_closed_form_on_diagonal_system() {
        let h = array![[2.0, 0.0], [0.0, 4.0]];
        let g = array![2.0, 2.0];

        let direction = try_newton_step(&h, &g).expect("diagonal PD system should invert");

        assert!((direction[0] - 1.0).abs() < 1e-12);
        assert!((direction[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A singular Hessian yields no Newton step.
    fn singular_hessian_yields_none() {
        let h = array![[1.0, 1.0], [1.0, 1.0]];
        let g = array![1.0, 1.0];
        assert!(try_newton_step(&h, &g).is_none());
    }

    #[test]
    // Purpose
    // -------
    // symmetrize averages off-diagonal pairs and leaves the diagonal alone.
    fn symmetrize_averages_off_diagonal_pairs() {
        let mut h = array![[1.0, 2.0], [0.0, 3.0]];

        symmetrize(&mut h);

        assert_eq!(h[[0, 0]], 1.0);
        assert_eq!(h[[1, 1]], 3.0);
        assert!((h[[0, 1]] - 1.0).abs() < 1e-12);
        assert_eq!(h[[0, 1]], h[[1, 0]]);
    }
}
