//! optimization::types — shared numeric aliases and default constants.
//!
//! Purpose
//! -------
//! Centralize the core numeric types used by the hybrid optimizer. By
//! defining these in one place, the rest of the optimization code can stay
//! agnostic to `ndarray` generics and can more easily evolve if the backend
//! changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for iterate points, gradients, and Hessians
//!   (`Point`, `Grad`, `Hessian`).
//! - Expose the default gradient-descent learning rate and divergence
//!   threshold shared by options construction and the frontend.
//!
//! Conventions
//! -----------
//! - `Point` and `Grad` are treated conceptually as column vectors with
//!   length equal to the number of free variables of the expression.
//! - `Hessian` is a dense square matrix with dimension
//!   `point.len() × point.len()`.
//! - This module defines no runtime behavior.
use ndarray::{Array1, Array2};

/// Current iterate `x` of the optimizer.
///
/// Alias for `ndarray::Array1<f64>`; coordinate `i` binds to the `i`-th
/// variable of the expression being minimized.
pub type Point = Array1<f64>;

/// Gradient vector `∇f(x)` evaluated at the current iterate.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Point`.
pub type Grad = Array1<f64>;

/// Dense Hessian matrix of second partial derivatives.
///
/// Alias for `ndarray::Array2<f64>`; `n × n` for `n = point.len()`.
pub type Hessian = Array2<f64>;

/// Fixed step size used whenever a gradient-descent step is taken.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Function value below which a run is declared divergent.
pub const DEFAULT_DIVERGENCE_THRESHOLD: f64 = -1e6;

/// Default cap on loop iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Default gradient-norm convergence threshold.
pub const DEFAULT_EPSILON: f64 = 1e-6;
