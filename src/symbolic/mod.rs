//! symbolic — expression parsing, differentiation, and evaluation.
//!
//! Purpose
//! -------
//! Provide the expression-side collaborator of the hybrid optimizer: parse a
//! textual function of named variables into an immutable symbolic form that
//! supports first- and second-order partial derivatives and
//! substitution-then-evaluation to `f64` at an arbitrary point.
//!
//! Key behaviors
//! -------------
//! - Parse text into an [`Expression`] via [`Expression::parse`], inferring
//!   the free variables and fixing their coordinate order once.
//! - Extract partial derivatives of any order by repeated calls to
//!   [`Expression::partial`].
//! - Evaluate to double precision at a numeric point via
//!   [`Expression::eval`].
//!
//! Invariants & assumptions
//! ------------------------
//! - An [`Expression`] is created once per optimization run and never
//!   mutated afterwards; `partial` returns a new value.
//! - The variable order fixed at parse time defines the coordinate order of
//!   every point, gradient, and Hessian built from the expression.
//! - Variables named on the `x{i}` scheme are ordered by their numeric
//!   suffix (`x1, x2, ..., x10`), so positional binding matches the user's
//!   intent even past nine variables; other names order lexicographically.
//!
//! Conventions
//! -----------
//! - The native power operator is `**`. The caret `^` convenience form is a
//!   frontend concern and is rewritten before parsing.
//! - Numeric domain violations during evaluation produce NaN/infinity per
//!   IEEE-754; they are never errors or panics.
//!
//! Downstream usage
//! ----------------
//! - The optimizer core precomputes gradient and Hessian expressions from an
//!   [`Expression`] and re-evaluates them at each iterate.
//! - The frontend validates the variable count of a parsed expression
//!   against the user's initial guesses before the core runs.
//!
//! Testing notes
//! -------------
//! - Submodule tests cover differentiation rules and grammar corner cases;
//!   tests here cover variable ordering and the `Expression` surface.
pub mod errors;
pub mod expr;
pub mod parser;

pub use self::errors::{SymResult, SymbolicError};
pub use self::expr::{Expr, Func};

/// A parsed function `f(x1, ..., xN)` with a fixed variable order.
///
/// Wraps the raw [`Expr`] tree together with the ordered list of free
/// variable names so that coordinates of a point bind to variables by
/// position. Created once per run; immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    ast: Expr,
    vars: Vec<String>,
}

impl Expression {
    /// Parse `text` into an [`Expression`], inferring its free variables.
    ///
    /// Variable order is fixed here: names following the `x{i}` scheme sort
    /// by numeric suffix, everything else lexicographically. The order
    /// defines the coordinate layout of every point the expression is
    /// evaluated at.
    ///
    /// # Errors
    /// Propagates any [`SymbolicError`] from the parser.
    pub fn parse(text: &str) -> SymResult<Self> {
        let ast = parser::parse(text)?;
        let mut vars = Vec::new();
        ast.collect_vars(&mut vars);
        vars.sort_by(|a, b| variable_key(a).cmp(&variable_key(b)));
        Ok(Self { ast, vars })
    }

    /// Number of free variables `N`.
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Ordered variable names; coordinate `i` of a point binds to name `i`.
    pub fn variables(&self) -> &[String] {
        &self.vars
    }

    /// Evaluate at `point`, whose length must equal [`Self::num_vars`].
    ///
    /// Pure: identical inputs give identical results. A short `point` makes
    /// the unbound variables evaluate to NaN rather than panicking.
    pub fn eval(&self, point: &[f64]) -> f64 {
        self.ast.eval(&self.vars, point)
    }

    /// First-order partial derivative with respect to the `i`-th variable.
    ///
    /// Returns a new expression over the same variable list, so points,
    /// gradients, and Hessians built from the original expression stay
    /// coordinate-compatible. Applying `partial` twice yields second-order
    /// (Hessian) entries.
    ///
    /// # Panics
    /// Panics if `i >= self.num_vars()`; the optimizer only indexes within
    /// the variable list it obtained from this expression.
    pub fn partial(&self, i: usize) -> Expression {
        Expression { ast: self.ast.diff(&self.vars[i]), vars: self.vars.clone() }
    }
}

// Sort key giving `x{i}` names numeric order and everything else a stable
// lexicographic fallback. The suffix compares as (digit count, digit
// string), which orders like the number it spells for any length, so
// suffixes past the integer range still sort numerically.
fn variable_key(name: &str) -> (String, usize, String, String) {
    let split = name.len() - name.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    let (prefix, digits) = name.split_at(split);
    let stripped = digits.trim_start_matches('0');
    (prefix.to_string(), stripped.len(), stripped.to_string(), name.to_string())
}
