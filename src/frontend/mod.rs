//! frontend — the textual boundary around the optimizer core.
//!
//! Purpose
//! -------
//! Collect free-form textual inputs (function expression, comma-separated
//! initial guesses, tolerance, iteration cap), convert them into the typed
//! forms the core consumes, invoke the core once, and render the returned
//! outcome as plain text. This is the non-graphical counterpart of the
//! original presentation layer; no window or widget code belongs here.
//!
//! Key behaviors
//! -------------
//! - Rewrite the caret convenience operator `^` to the evaluator's native
//!   power operator `**` before parsing ([`rewrite_caret`]).
//! - Reject a variable-count mismatch between the parsed expression and
//!   the supplied guesses BEFORE the core runs; the core is never invoked
//!   on mismatched inputs.
//! - Run the full text-to-outcome pipeline via [`run_from_text`] and
//!   format the 3-tuple (point, value, reason) via [`format_outcome`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All validation errors here belong to the input-mismatch class of the
//!   error taxonomy and surface as [`FrontendError`] values.
//! - Divergence is not an error: callers inspect
//!   [`Outcome::diverged`](crate::optimization::Outcome::diverged) on the
//!   returned outcome to raise any user-visible warning.
//!
//! Testing notes
//! -------------
//! - Unit tests cover caret rewriting, guess parsing, the mismatch guard,
//!   and outcome formatting; integration tests run the reference
//!   scenarios end to end through [`run_from_text`].
pub mod errors;

pub use self::errors::{FrontendError, FrontendResult};

use crate::optimization::{optimize, HybridOptions, Outcome, Point};
use crate::symbolic::Expression;
use ndarray::Array1;

/// Rewrite the caret convenience operator to the native power operator.
///
/// `x1^2` becomes `x1**2`. The symbolic parser itself rejects `^`; this
/// rewrite is the presentation layer's responsibility and the only way the
/// caret form enters the system.
pub fn rewrite_caret(text: &str) -> String {
    text.replace('^', "**")
}

/// Parse a comma-separated list of initial guesses.
///
/// Empty input yields an empty list (the variable-count guard then reports
/// the mismatch against the expression).
///
/// # Errors
/// [`FrontendError::InvalidGuess`] for the first entry that is not a float.
pub fn parse_guesses(text: &str) -> FrontendResult<Vec<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<f64>()
                .map_err(|_| FrontendError::InvalidGuess { text: entry.to_string() })
        })
        .collect()
}

/// Run one optimization from already-typed inputs.
///
/// Performs the boundary validation the core does not own:
/// - rewrites `^` and parses the expression,
/// - rejects expressions without variables,
/// - rejects a guess count that differs from the variable count.
///
/// # Errors
/// Any [`FrontendError`]; when one is returned the core was never invoked.
pub fn run(function: &str, guesses: &[f64], opts: &HybridOptions) -> FrontendResult<Outcome> {
    let expression = Expression::parse(&rewrite_caret(function))?;
    if expression.num_vars() == 0 {
        return Err(FrontendError::NoVariables);
    }
    if guesses.len() != expression.num_vars() {
        return Err(FrontendError::VariableCountMismatch {
            expected: expression.num_vars(),
            found: guesses.len(),
        });
    }
    let initial: Point = Array1::from_vec(guesses.to_vec());
    Ok(optimize(&expression, initial, opts)?)
}

/// Run one optimization from free-form text, as a user action would.
///
/// - `function`: expression text; `^` is accepted and rewritten to `**`.
/// - `guesses`: comma-separated floats, e.g. `"1.0, 1.0"`.
/// - `tolerance`: gradient-norm convergence threshold as text.
/// - `max_iterations`: iteration cap as text.
///
/// The divergence threshold and learning rate take their defaults
/// (`-1e6`, `0.01`); callers needing different values use [`run`] with
/// explicit [`HybridOptions`].
///
/// # Errors
/// Any [`FrontendError`]; when one is returned the core was never invoked.
pub fn run_from_text(
    function: &str, guesses: &str, tolerance: &str, max_iterations: &str,
) -> FrontendResult<Outcome> {
    let guesses = parse_guesses(guesses)?;
    let epsilon = tolerance
        .trim()
        .parse::<f64>()
        .map_err(|_| FrontendError::InvalidTolerance { text: tolerance.trim().to_string() })?;
    let max_iterations = max_iterations.trim().parse::<usize>().map_err(|_| {
        FrontendError::InvalidMaxIterations { text: max_iterations.trim().to_string() }
    })?;
    let defaults = HybridOptions::default();
    let opts = HybridOptions::new(
        epsilon,
        max_iterations,
        defaults.divergence_threshold,
        defaults.learning_rate,
    )?;
    run(function, &guesses, &opts)
}

/// Render an outcome as the plain-text block the original result widget
/// displayed: point, function value, reason string.
pub fn format_outcome(outcome: &Outcome) -> String {
    let coords: Vec<String> = outcome.point.iter().map(|c| c.to_string()).collect();
    format!(
        "Result: [{}]\nFunction value at minimum: {}\n{}",
        coords.join(", "),
        outcome.value,
        outcome.reason
    )
}
