//! symbolic::expr — immutable expression tree with analytic differentiation.
//!
//! Purpose
//! -------
//! Represent a scalar function of named variables as an immutable AST that
//! supports exact partial differentiation and substitution-then-evaluation
//! to double precision. This is the computational substrate behind the
//! hybrid optimizer's gradients and Hessians.
//!
//! Key behaviors
//! -------------
//! - Evaluate an expression at a numeric point via [`Expr::eval`], resolving
//!   variable names against an ordered variable list.
//! - Differentiate analytically via [`Expr::diff`], implementing the sum,
//!   product, quotient, chain, and general power rules.
//! - Collect the set of free variable names via [`Expr::collect_vars`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `Expr` values are never mutated after construction; `diff` returns a
//!   new tree and leaves the receiver untouched.
//! - Evaluation is a pure function of the tree and the point: evaluating
//!   twice at the same point yields identical results.
//! - Numeric domain violations during evaluation (logarithm of a
//!   non-positive value, division by zero, ...) follow IEEE-754 float
//!   semantics and produce NaN or infinities, never panics or errors.
//!
//! Conventions
//! -----------
//! - Power is the binary `Pow` node; the textual form is `**` (see the
//!   parser module). Differentiation uses the constant-exponent power rule
//!   when the exponent contains no variables and the general rule
//!   `d(u^v) = u^v (v' ln u + v u'/u)` otherwise.
//! - The derivative constructors fold constant zero/one identities so that
//!   second derivatives stay small enough to evaluate cheaply; no further
//!   simplification is attempted.
//!
//! Downstream usage
//! ----------------
//! - [`crate::symbolic::Expression`] wraps an `Expr` together with its
//!   ordered variable list and is the type the optimizer consumes.
//! - The parser module builds `Expr` trees from text.
//!
//! Testing notes
//! -------------
//! - Unit tests check each differentiation rule against closed forms at
//!   sample points and verify that evaluation is pure.
use std::fmt;

/// Unary functions understood by the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Exp,
    Ln,
    Sin,
    Cos,
    Tan,
    Sqrt,
}

impl Func {
    /// Look up a function by its textual name.
    pub fn from_name(name: &str) -> Option<Func> {
        match name {
            "exp" => Some(Func::Exp),
            "ln" | "log" => Some(Func::Ln),
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            "sqrt" => Some(Func::Sqrt),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Sqrt => "sqrt",
        }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Func::Exp => x.exp(),
            Func::Ln => x.ln(),
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Sqrt => x.sqrt(),
        }
    }
}

/// Immutable symbolic expression tree.
///
/// Leaves are constants and named variables; interior nodes are the four
/// arithmetic operators, power, unary negation, and unary function
/// application.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var(String),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Apply(Func, Box<Expr>),
}

impl Expr {
    /// Evaluate the expression at a numeric point.
    ///
    /// `vars` is the ordered variable list and `point` the matching
    /// coordinates; variable `vars[i]` takes the value `point[i]`. A
    /// variable not present in `vars` evaluates to NaN, which then
    /// propagates through the surrounding arithmetic.
    ///
    /// This is a pure function: the tree is not modified and repeated calls
    /// with the same inputs return identical results.
    pub fn eval(&self, vars: &[String], point: &[f64]) -> f64 {
        match self {
            Expr::Const(c) => *c,
            Expr::Var(name) => match vars.iter().position(|v| v == name) {
                Some(i) if i < point.len() => point[i],
                _ => f64::NAN,
            },
            Expr::Add(lhs, rhs) => lhs.eval(vars, point) + rhs.eval(vars, point),
            Expr::Sub(lhs, rhs) => lhs.eval(vars, point) - rhs.eval(vars, point),
            Expr::Mul(lhs, rhs) => lhs.eval(vars, point) * rhs.eval(vars, point),
            Expr::Div(lhs, rhs) => lhs.eval(vars, point) / rhs.eval(vars, point),
            Expr::Pow(base, exp) => base.eval(vars, point).powf(exp.eval(vars, point)),
            Expr::Neg(inner) => -inner.eval(vars, point),
            Expr::Apply(func, inner) => func.apply(inner.eval(vars, point)),
        }
    }

    /// Analytic partial derivative with respect to `var`.
    ///
    /// Implements the standard calculus rules:
    /// - sum/difference rule,
    /// - product rule `(fg)' = f'g + fg'`,
    /// - quotient rule `(f/g)' = (f'g - g'f) / g²`,
    /// - chain rule for every unary function,
    /// - power rule `c·u^(c-1)·u'` for constant exponents and the general
    ///   form `u^v (v' ln u + v u'/u)` otherwise.
    ///
    /// Returns a new tree; the receiver is unchanged.
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Add(lhs, rhs) => add(lhs.diff(var), rhs.diff(var)),
            Expr::Sub(lhs, rhs) => sub(lhs.diff(var), rhs.diff(var)),
            Expr::Mul(lhs, rhs) => add(
                mul(lhs.diff(var), (**rhs).clone()),
                mul((**lhs).clone(), rhs.diff(var)),
            ),
            Expr::Div(lhs, rhs) => div(
                sub(
                    mul(lhs.diff(var), (**rhs).clone()),
                    mul(rhs.diff(var), (**lhs).clone()),
                ),
                mul((**rhs).clone(), (**rhs).clone()),
            ),
            Expr::Pow(base, exp) => match **exp {
                // Constant exponent: c * u^(c-1) * u'.
                Expr::Const(c) => mul(
                    mul(Expr::Const(c), pow((**base).clone(), Expr::Const(c - 1.0))),
                    base.diff(var),
                ),
                // General case: u^v * (v' ln u + v u'/u).
                _ => mul(
                    pow((**base).clone(), (**exp).clone()),
                    add(
                        mul(exp.diff(var), Expr::Apply(Func::Ln, base.clone())),
                        mul((**exp).clone(), div(base.diff(var), (**base).clone())),
                    ),
                ),
            },
            Expr::Neg(inner) => neg(inner.diff(var)),
            Expr::Apply(func, inner) => {
                let outer = match func {
                    Func::Exp => Expr::Apply(Func::Exp, inner.clone()),
                    Func::Ln => div(Expr::Const(1.0), (**inner).clone()),
                    Func::Sin => Expr::Apply(Func::Cos, inner.clone()),
                    Func::Cos => neg(Expr::Apply(Func::Sin, inner.clone())),
                    Func::Tan => div(
                        Expr::Const(1.0),
                        pow(Expr::Apply(Func::Cos, inner.clone()), Expr::Const(2.0)),
                    ),
                    Func::Sqrt => div(
                        Expr::Const(1.0),
                        mul(Expr::Const(2.0), Expr::Apply(Func::Sqrt, inner.clone())),
                    ),
                };
                mul(outer, inner.diff(var))
            }
        }
    }

    /// Collect the free variable names of the expression into `out`.
    ///
    /// Names are deduplicated by the caller-provided vector; insertion order
    /// follows the first occurrence in a left-to-right tree walk.
    pub fn collect_vars(&self, out: &mut Vec<String>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(name) => {
                if !out.iter().any(|v| v == name) {
                    out.push(name.clone());
                }
            }
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                lhs.collect_vars(out);
                rhs.collect_vars(out);
            }
            Expr::Neg(inner) | Expr::Apply(_, inner) => inner.collect_vars(out),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{c}"),
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Expr::Sub(lhs, rhs) => write!(f, "({lhs} - {rhs})"),
            Expr::Mul(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
            Expr::Div(lhs, rhs) => write!(f, "({lhs} / {rhs})"),
            Expr::Pow(base, exp) => write!(f, "({base} ** {exp})"),
            Expr::Neg(inner) => write!(f, "(-{inner})"),
            Expr::Apply(func, inner) => write!(f, "{}({inner})", func.name()),
        }
    }
}

// ---- Folding constructors used by `diff` ----------------------------------
//
// These fold the zero/one identities produced en masse by the derivative
// rules so that Hessian expressions stay cheap to evaluate. They are not a
// general simplifier.

fn is_const(expr: &Expr, value: f64) -> bool {
    matches!(expr, Expr::Const(c) if *c == value)
}

fn add(lhs: Expr, rhs: Expr) -> Expr {
    if is_const(&lhs, 0.0) {
        return rhs;
    }
    if is_const(&rhs, 0.0) {
        return lhs;
    }
    if let (Expr::Const(a), Expr::Const(b)) = (&lhs, &rhs) {
        return Expr::Const(a + b);
    }
    Expr::Add(Box::new(lhs), Box::new(rhs))
}

fn sub(lhs: Expr, rhs: Expr) -> Expr {
    if is_const(&rhs, 0.0) {
        return lhs;
    }
    if is_const(&lhs, 0.0) {
        return neg(rhs);
    }
    if let (Expr::Const(a), Expr::Const(b)) = (&lhs, &rhs) {
        return Expr::Const(a - b);
    }
    Expr::Sub(Box::new(lhs), Box::new(rhs))
}

fn mul(lhs: Expr, rhs: Expr) -> Expr {
    if is_const(&lhs, 0.0) || is_const(&rhs, 0.0) {
        return Expr::Const(0.0);
    }
    if is_const(&lhs, 1.0) {
        return rhs;
    }
    if is_const(&rhs, 1.0) {
        return lhs;
    }
    if let (Expr::Const(a), Expr::Const(b)) = (&lhs, &rhs) {
        return Expr::Const(a * b);
    }
    Expr::Mul(Box::new(lhs), Box::new(rhs))
}

fn div(lhs: Expr, rhs: Expr) -> Expr {
    if is_const(&lhs, 0.0) {
        return Expr::Const(0.0);
    }
    if is_const(&rhs, 1.0) {
        return lhs;
    }
    Expr::Div(Box::new(lhs), Box::new(rhs))
}

fn pow(base: Expr, exp: Expr) -> Expr {
    if is_const(&exp, 1.0) {
        return base;
    }
    if is_const(&exp, 0.0) {
        return Expr::Const(1.0);
    }
    Expr::Pow(Box::new(base), Box::new(exp))
}

fn neg(inner: Expr) -> Expr {
    match inner {
        Expr::Const(c) => Expr::Const(-c),
        Expr::Neg(original) => *original,
        _ => Expr::Neg(Box::new(inner)),
    }
}
