//! hybrid_optimizer — hybrid Newton / gradient-descent minimization of
//! symbolic multivariate functions.
//!
//! Purpose
//! -------
//! Find a local minimum of a user-supplied scalar function of N variables.
//! The function arrives as text (e.g. `x1**2 + x2**2`), is parsed into an
//! immutable symbolic form with exact first- and second-order partial
//! derivatives, and is then refined iteratively: a damped Newton step when
//! the local Hessian is strictly positive definite and invertible, a
//! fixed-rate gradient-descent step otherwise.
//!
//! Key behaviors
//! -------------
//! - [`symbolic`]: expression parsing, analytic differentiation, and
//!   substitution-then-evaluation to double precision.
//! - [`optimization`]: the hybrid refinement loop with its
//!   convergence/divergence decision procedure and step-selection policy.
//! - [`frontend`]: the textual boundary — input conversion and validation
//!   (including the variable-count check) and plain-text result rendering.
//!
//! Invariants & assumptions
//! ------------------------
//! - A run is single-threaded, synchronous, and executes to completion (or
//!   its iteration cap); each call owns its state exclusively, so
//!   independent runs may proceed concurrently without coordination.
//! - Divergence and budget exhaustion are ordinary terminal outcomes with
//!   their own reason strings, never errors; numeric degeneracy inside the
//!   loop degrades to the gradient-descent fallback.
//!
//! Example
//! -------
//! ```rust
//! use hybrid_optimizer::frontend::run_from_text;
//!
//! let outcome = run_from_text("x1^2 + x2^2", "1.0, 1.0", "1e-6", "50").unwrap();
//! assert!(outcome.converged());
//! assert!(outcome.point[0].abs() < 1e-8);
//! ```
pub mod frontend;
pub mod optimization;
pub mod symbolic;

pub use crate::frontend::{run_from_text, FrontendError, FrontendResult};
pub use crate::optimization::{
    optimize, HybridOptions, OptError, OptResult, Outcome, StepKind, StopReason,
};
pub use crate::symbolic::{Expression, SymbolicError};
