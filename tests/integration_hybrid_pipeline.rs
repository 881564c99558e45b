//! Integration tests for the hybrid optimization pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: from textual function input, through
//!   expression parsing and analytic differentiation, to the hybrid
//!   Newton/gradient-descent loop and the formatted outcome.
//! - Exercise the reference scenarios (convex quadratic, diverging cubic)
//!   and the boundary behaviors the textual interface owns.
//!
//! Coverage
//! --------
//! - `frontend`:
//!   - caret rewriting, guess parsing, the variable-count guard, and
//!     plain-text outcome rendering.
//! - `optimization::hybrid`:
//!   - convergence, divergence precedence, budget exhaustion, and the
//!     step-selection policy through the public surface.
//! - `symbolic`:
//!   - multi-variable parsing and derivative evaluation, implicitly.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (parser error
//!   paths, eigenvalue classification, option validation) — these are
//!   covered by unit tests in their modules.
//! - Performance characteristics and large variable counts — out of scope
//!   for this suite.
use hybrid_optimizer::frontend::{format_outcome, run, run_from_text};
use hybrid_optimizer::{optimize, Expression, HybridOptions, StepKind, StopReason};
use ndarray::array;

/// Build validated options for scenarios that need a custom divergence
/// threshold while keeping the default learning rate.
fn options_with_threshold(epsilon: f64, max_iterations: usize, threshold: f64) -> HybridOptions {
    let defaults = HybridOptions::default();
    HybridOptions::new(epsilon, max_iterations, threshold, defaults.learning_rate)
        .expect("test options should validate")
}

#[test]
// Purpose
// -------
// The reference convergence scenario: f = x1² + x2² from (1, 1) with
// epsilon 1e-6 and a 50-iteration budget reaches the origin with a
// "Convergence reached" reason, taking only Newton steps.
fn quadratic_scenario_end_to_end() {
    // Act
    let outcome =
        run_from_text("x1^2 + x2^2", "1.0, 1.0", "1e-6", "50").expect("pipeline should succeed");

    // Assert
    assert!(outcome.point[0].abs() < 1e-8);
    assert!(outcome.point[1].abs() < 1e-8);
    assert!(outcome.value.abs() < 1e-12);
    assert!(outcome.reason.to_string().contains("Convergence reached"));
    assert!(outcome.steps.iter().all(|s| *s == StepKind::Newton));

    let text = format_outcome(&outcome);
    assert!(text.starts_with("Result: ["));
    assert!(text.contains("Function value at minimum:"));
    assert!(text.contains("Convergence reached"));
}

#[test]
// Purpose
// -------
// The reference divergence scenario: f = x1³ from −100 with a small budget
// and threshold −1e6 reports "Divergence detected" once the function value
// drops below the threshold.
fn cubic_scenario_reports_divergence() {
    // Arrange
    let f = Expression::parse("x1**3").expect("parse");
    let opts = options_with_threshold(1e-6, 10, -1e6);

    // Act
    let outcome = optimize(&f, array![-100.0], &opts).expect("run should succeed");

    // Assert
    assert!(outcome.diverged());
    assert!(outcome.value < -1e6);
    assert!(outcome.reason.to_string().contains("Divergence detected"));
}

#[test]
// Purpose
// -------
// Divergence precedence survives the full pipeline: with the function
// value below the threshold and the gradient norm below epsilon at the
// starting point, the outcome reports divergence, not convergence.
fn divergence_precedence_end_to_end() {
    // Arrange
    let f = Expression::parse("x1**2 - 2000000").expect("parse");
    let opts = options_with_threshold(1e-6, 50, -1e6);

    // Act
    let outcome = optimize(&f, array![0.0], &opts).expect("run should succeed");

    // Assert
    assert_eq!(outcome.reason, StopReason::Diverged { iteration: 0 });
}

#[test]
// Purpose
// -------
// Convergence from a different starting point: Newton's method on a
// constant-Hessian quadratic lands on the minimizer in one step regardless
// of where it starts.
fn quadratic_converges_from_far_start() {
    let outcome = run_from_text("x1**2 + x2**2", "250.0, -80.0", "1e-6", "50")
        .expect("pipeline should succeed");

    assert!(outcome.converged());
    assert!(outcome.point[0].abs() < 1e-8);
    assert!(outcome.point[1].abs() < 1e-8);
}

#[test]
// Purpose
// -------
// A non-convex start routes to gradient descent first, then still makes
// progress: f = x1⁴ − 3·x1² has negative curvature at x = 0.5.
fn non_convex_start_uses_gradient_descent_first() {
    // Arrange
    let f = Expression::parse("x1**4 - 3*x1**2").expect("parse");
    let opts = options_with_threshold(1e-6, 200, -1e6);

    // Act
    let outcome = optimize(&f, array![0.5], &opts).expect("run should succeed");

    // Assert
    assert_eq!(outcome.steps.first(), Some(&StepKind::GradientDescent));
    // The nearest minimizer is at sqrt(3/2) ≈ 1.2247.
    assert!(outcome.converged());
    assert!((outcome.point[0].abs() - (1.5_f64).sqrt()).abs() < 1e-4);
}

#[test]
// Purpose
// -------
// The zero-iteration boundary through the textual interface: the initial
// point comes back as the final point with the exhaustion reason.
fn zero_iteration_budget_through_frontend() {
    let outcome =
        run_from_text("x1^2 + x2^2", "2.0, 3.0", "1e-6", "0").expect("pipeline should succeed");

    assert_eq!(outcome.reason, StopReason::ExhaustedIterations);
    assert_eq!(
        outcome.reason.to_string(),
        "Maximum iterations reached without convergence."
    );
    assert_eq!(outcome.point, array![2.0, 3.0]);
    assert!((outcome.value - 13.0).abs() < 1e-12);
}

#[test]
// Purpose
// -------
// The variable-count guard fires before the core runs, for both too few
// and too many guesses.
fn mismatched_guess_count_is_rejected_before_the_core() {
    assert!(run_from_text("x1^2 + x2^2", "1.0", "1e-6", "50").is_err());
    assert!(run_from_text("x1^2", "1.0, 2.0", "1e-6", "50").is_err());
}

#[test]
// Purpose
// -------
// The divergence threshold is caller-configurable: tightening it flips the
// same run from convergence to divergence.
fn divergence_threshold_is_caller_configurable() {
    // Arrange
    let function = "x1**2 - 10";

    // Act
    let default_run = run(function, &[1.0], &HybridOptions::default())
        .expect("run should succeed");
    let tight_run = run(function, &[1.0], &options_with_threshold(1e-6, 50, -5.0))
        .expect("run should succeed");

    // Assert
    assert!(default_run.converged());
    assert!(tight_run.diverged());
}

#[test]
// Purpose
// -------
// Evaluation is idempotent across an entire run: two identical runs on the
// same inputs produce identical outcomes.
fn repeated_runs_are_deterministic() {
    let first = run_from_text("x1^2 + sin(x2)", "0.4, 1.0", "1e-8", "100")
        .expect("pipeline should succeed");
    let second = run_from_text("x1^2 + sin(x2)", "0.4, 1.0", "1e-8", "100")
        .expect("pipeline should succeed");

    assert_eq!(first, second);
}
