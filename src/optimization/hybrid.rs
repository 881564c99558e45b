//! optimization::hybrid — the hybrid Newton / gradient-descent core.
//!
//! Purpose
//! -------
//! Drive the per-iteration refinement loop that minimizes a symbolic
//! function: evaluate the gradient, Hessian, and function value at the
//! current iterate, decide between stopping and stepping, and select a
//! damped Newton step or a plain gradient-descent step depending on the
//! local curvature.
//!
//! Key behaviors
//! -------------
//! - Precompute the symbolic gradient and Hessian once per run, then
//!   re-evaluate them by fresh substitution at every iterate.
//! - Check divergence BEFORE convergence: a function value below the
//!   divergence threshold stops the run even when the gradient norm is
//!   already below epsilon.
//! - Take a Newton step `x − H⁻¹·g` only when the Hessian is strictly
//!   positive definite and inverts cleanly; otherwise take a
//!   gradient-descent step `x − learning_rate·g` for that iteration only.
//! - Record the step kind taken at each iteration in the returned
//!   [`Outcome`] so the selection policy is observable.
//!
//! Invariants & assumptions
//! ------------------------
//! - The caller owns the precondition that the initial point's length
//!   equals the expression's variable count; it is checked at the frontend
//!   boundary, not here.
//! - The current point is the only state carried across iterations; the
//!   gradient and Hessian are recomputed from scratch every iteration and
//!   never persisted.
//! - Numeric degeneracy (singular Hessian, non-finite Newton direction) is
//!   recovered locally by the gradient-descent fallback; the loop has no
//!   unrecoverable failure mode. Exhausting the iteration budget is a
//!   normal terminal outcome, not an error.
//!
//! Conventions
//! -----------
//! - Iterations are 0-indexed; the reason strings embed the index of the
//!   iteration at which the stop decision fired.
//! - The positive-definiteness test uses strict `> 0` eigenvalue
//!   comparison.
//! - A run is a pure function of its inputs: no shared state, no side
//!   effects beyond `tracing` diagnostics, safe to invoke concurrently
//!   from independent callers.
//!
//! Downstream usage
//! ----------------
//! - The frontend validates textual inputs, builds [`HybridOptions`], and
//!   calls [`optimize`] once per user action.
//! - Library callers can drive [`optimize`] directly with a parsed
//!   [`Expression`] and an `ndarray` point.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the step-selection policy, the divergence-over-
//!   convergence precedence, the zero-iteration boundary, and option
//!   validation.
//! - Integration tests exercise the full text-to-outcome pipeline on the
//!   reference scenarios (convex quadratic, diverging cubic).
use crate::optimization::{
    errors::OptResult,
    linalg,
    types::{
        Grad, Hessian, Point, DEFAULT_DIVERGENCE_THRESHOLD, DEFAULT_EPSILON,
        DEFAULT_LEARNING_RATE, DEFAULT_MAX_ITERATIONS,
    },
    validation::{
        validate_initial_point, verify_divergence_threshold, verify_epsilon,
        verify_learning_rate,
    },
};
use crate::symbolic::Expression;
use ndarray::Array1;
use tracing::{debug, trace};

/// Optimizer-level configuration.
///
/// Fields:
/// - `epsilon` — gradient-norm convergence threshold; finite, strictly
///   positive.
/// - `max_iterations` — hard cap on loop iterations. Zero is legal and
///   returns the initial point with the exhaustion reason.
/// - `divergence_threshold` — function values strictly below this declare
///   the run divergent. Any non-NaN value, including `-inf` to disable the
///   check.
/// - `learning_rate` — fixed step size for the gradient-descent fallback;
///   finite, strictly positive.
///
/// Default:
/// - `epsilon = 1e-6`, `max_iterations = 300`,
///   `divergence_threshold = -1e6`, `learning_rate = 0.01`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridOptions {
    pub epsilon: f64,
    pub max_iterations: usize,
    pub divergence_threshold: f64,
    pub learning_rate: f64,
}

impl HybridOptions {
    /// Construct validated options.
    ///
    /// # Rules
    /// - `epsilon` and `learning_rate` must be finite and strictly positive.
    /// - `divergence_threshold` must not be NaN.
    /// - `max_iterations` may be any value, including zero.
    ///
    /// # Errors
    /// - [`crate::optimization::OptError::InvalidEpsilon`]
    /// - [`crate::optimization::OptError::InvalidLearningRate`]
    /// - [`crate::optimization::OptError::InvalidDivergenceThreshold`]
    pub fn new(
        epsilon: f64, max_iterations: usize, divergence_threshold: f64, learning_rate: f64,
    ) -> OptResult<Self> {
        verify_epsilon(epsilon)?;
        verify_learning_rate(learning_rate)?;
        verify_divergence_threshold(divergence_threshold)?;
        Ok(Self { epsilon, max_iterations, divergence_threshold, learning_rate })
    }
}

impl Default for HybridOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}

/// Which step the loop took at a given iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Damped Newton step `x − H⁻¹·g`.
    Newton,
    /// Gradient-descent step `x − learning_rate·g`.
    GradientDescent,
}

/// Why the run stopped.
///
/// The `Display` rendering produces the fixed reason strings of the
/// outcome contract:
/// - `Convergence reached at iteration {n}`
/// - `Divergence detected at iteration {n}`
/// - `Maximum iterations reached without convergence.`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Gradient norm fell below epsilon at the given iteration.
    Converged { iteration: usize },
    /// Function value fell below the divergence threshold at the given
    /// iteration. Takes precedence over convergence in the same iteration.
    Diverged { iteration: usize },
    /// The iteration budget ran out without a stop decision.
    ExhaustedIterations,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Converged { iteration } => {
                write!(f, "Convergence reached at iteration {iteration}")
            }
            StopReason::Diverged { iteration } => {
                write!(f, "Divergence detected at iteration {iteration}")
            }
            StopReason::ExhaustedIterations => {
                write!(f, "Maximum iterations reached without convergence.")
            }
        }
    }
}

/// Terminal result of a run, produced exactly once at loop exit.
///
/// - `point` — final iterate.
/// - `value` — function value at `point`.
/// - `reason` — structured stop reason; render with `to_string()` for the
///   fixed reason strings.
/// - `steps` — the step kind taken at each completed iteration, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub point: Point,
    pub value: f64,
    pub reason: StopReason,
    pub steps: Vec<StepKind>,
}

impl Outcome {
    /// True when the run stopped on the divergence check. Presentation
    /// layers use this to raise a user-visible warning.
    pub fn diverged(&self) -> bool {
        matches!(self.reason, StopReason::Diverged { .. })
    }

    /// True when the run stopped on the convergence check.
    pub fn converged(&self) -> bool {
        matches!(self.reason, StopReason::Converged { .. })
    }
}

/// Minimize `f` starting from `initial` under the policy in `opts`.
///
/// Purpose
/// -------
/// Run the hybrid loop: per iteration, evaluate the gradient, Hessian, and
/// function value at the current point by fresh substitution, apply the
/// divergence check first and the convergence check second, and otherwise
/// step with Newton's method when the local Hessian is strictly positive
/// definite and invertible, falling back to gradient descent for that
/// iteration when it is not.
///
/// Parameters
/// ----------
/// - `f`: parsed symbolic function of `N ≥ 1` variables. The gradient and
///   Hessian expressions are derived from it once, up front.
/// - `initial`: starting iterate; its length must equal `f.num_vars()`
///   (precondition owned by the caller, checked at the frontend boundary).
/// - `opts`: validated options; see [`HybridOptions`].
///
/// Returns
/// -------
/// `OptResult<Outcome>` with the final point, the function value there, the
/// stop reason, and the per-iteration step kinds. With
/// `max_iterations = 0` the loop body never runs and the initial point
/// comes back with [`StopReason::ExhaustedIterations`].
///
/// # Errors
/// Only input validation can fail: a zero-length or non-finite initial
/// point. Numeric trouble inside the loop never surfaces as an error.
pub fn optimize(f: &Expression, initial: Point, opts: &HybridOptions) -> OptResult<Outcome> {
    validate_initial_point(&initial)?;
    debug_assert_eq!(initial.len(), f.num_vars());

    let n = f.num_vars();
    let grad_exprs: Vec<Expression> = (0..n).map(|i| f.partial(i)).collect();
    let hess_exprs: Vec<Vec<Expression>> =
        grad_exprs.iter().map(|g| (0..n).map(|j| g.partial(j)).collect()).collect();

    let mut x = initial;
    let mut steps = Vec::new();

    for iteration in 0..opts.max_iterations {
        let coords = x.to_vec();
        let grad: Grad = Array1::from_iter(grad_exprs.iter().map(|g| g.eval(&coords)));
        let mut hessian: Hessian =
            Hessian::from_shape_fn((n, n), |(i, j)| hess_exprs[i][j].eval(&coords));
        linalg::symmetrize(&mut hessian);
        let value = f.eval(&coords);

        let grad_norm = grad.dot(&grad).sqrt();
        debug!(iteration, value, grad_norm, "hybrid iteration");

        // Divergence takes precedence over convergence.
        if value < opts.divergence_threshold {
            return Ok(Outcome {
                point: x,
                value,
                reason: StopReason::Diverged { iteration },
                steps,
            });
        }
        if grad_norm < opts.epsilon {
            return Ok(Outcome {
                point: x,
                value,
                reason: StopReason::Converged { iteration },
                steps,
            });
        }

        x = if linalg::is_positive_definite(&hessian) {
            match linalg::try_newton_step(&hessian, &grad) {
                Some(direction) => {
                    steps.push(StepKind::Newton);
                    &x - &direction
                }
                None => {
                    trace!(iteration, "Hessian inversion failed, taking gradient-descent step");
                    steps.push(StepKind::GradientDescent);
                    gradient_descent_step(&x, &grad, opts.learning_rate)
                }
            }
        } else {
            trace!(iteration, "Hessian not positive definite, taking gradient-descent step");
            steps.push(StepKind::GradientDescent);
            gradient_descent_step(&x, &grad, opts.learning_rate)
        };
    }

    let value = f.eval(&x.to_vec());
    Ok(Outcome { point: x, value, reason: StopReason::ExhaustedIterations, steps })
}

// The one-line gradient-descent update kept as a private pure function.
fn gradient_descent_step(x: &Point, grad: &Grad, learning_rate: f64) -> Point {
    x - &(grad * learning_rate)
}
