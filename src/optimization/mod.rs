//! optimization — hybrid Newton / gradient-descent minimization.
//!
//! Purpose
//! -------
//! Provide the optimizer core: given a parsed symbolic function, an initial
//! point, and a validated configuration, iteratively refine the point with
//! a damped Newton step when the local Hessian is strictly positive
//! definite and invertible, and a fixed-rate gradient-descent step
//! otherwise, until convergence, divergence, or budget exhaustion.
//!
//! Key behaviors
//! -------------
//! - Expose a single entrypoint [`optimize`] returning an [`Outcome`] with
//!   the final point, function value, stop reason, and per-iteration step
//!   kinds.
//! - Centralize configuration in [`HybridOptions`] with a validating
//!   constructor and defaults (`epsilon 1e-6`, `learning_rate 0.01`,
//!   `divergence_threshold -1e6`).
//! - Keep dense linear algebra (eigenvalue test, Hessian inversion) behind
//!   [`linalg`] so the loop stays on the crate's `ndarray` aliases.
//!
//! Invariants & assumptions
//! ------------------------
//! - The divergence check runs before the convergence check in every
//!   iteration and takes precedence when both would fire.
//! - Numeric degeneracy never escapes the loop as an error; the only error
//!   paths are input validation before the loop starts.
//! - Each call owns its point/gradient/Hessian state exclusively for its
//!   duration: no shared mutable state, safe for concurrent independent
//!   invocations.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use the canonical aliases [`Point`], [`Grad`],
//!   [`Hessian`] from [`types`].
//! - Errors bubble up as [`OptResult<T>`] / [`OptError`]; this module and
//!   its children never intentionally panic on user input.
//!
//! Downstream usage
//! ----------------
//! - The frontend module converts textual inputs into the types consumed
//!   here and renders the returned [`Outcome`] as text.
//! - Library callers use the re-exported surface: [`optimize`],
//!   [`HybridOptions`], [`Outcome`], [`StopReason`], [`StepKind`].
//!
//! Testing notes
//! -------------
//! - Submodule unit tests cover validation, linear algebra, and the loop's
//!   decision procedure; the `tests/` directory exercises the end-to-end
//!   reference scenarios.
pub mod errors;
pub mod hybrid;
pub mod linalg;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{OptError, OptResult};
pub use self::hybrid::{optimize, HybridOptions, Outcome, StepKind, StopReason};
pub use self::types::{
    Grad, Hessian, Point, DEFAULT_DIVERGENCE_THRESHOLD, DEFAULT_EPSILON, DEFAULT_LEARNING_RATE,
    DEFAULT_MAX_ITERATIONS,
};
