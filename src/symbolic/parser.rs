//! symbolic::parser — text to expression tree.
//!
//! Purpose
//! -------
//! Turn a textual function such as `x1**2 + sin(x2)` into an [`Expr`] tree.
//! The grammar is a conventional precedence-climbing arithmetic grammar with
//! `**` as the native power operator.
//!
//! Key behaviors
//! -------------
//! - Tokenize numbers (with optional fraction and exponent), identifiers,
//!   the operators `+ - * / **`, and parentheses.
//! - Parse with the precedence ladder: additive < multiplicative < unary
//!   minus < power, with power binding right-associatively and tighter than
//!   unary minus so that `-x**2` reads as `-(x**2)`.
//! - Treat an identifier followed by `(` as a function application and any
//!   other identifier as a variable.
//!
//! Invariants & assumptions
//! ------------------------
//! - The caret `^` is NOT part of the grammar; the frontend rewrites it to
//!   `**` before calling the parser. The tokenizer reports it as an
//!   unexpected character.
//! - All failures are recoverable [`SymbolicError`] values; the parser never
//!   panics on malformed input.
//!
//! Testing notes
//! -------------
//! - Unit tests cover precedence, associativity, unary minus binding,
//!   function application, and every error path.
use crate::symbolic::{
    errors::{SymResult, SymbolicError},
    expr::{Expr, Func},
};

/// Parse a complete expression string into an [`Expr`] tree.
///
/// The whole input must be consumed; leftover tokens after a complete
/// expression yield [`SymbolicError::TrailingInput`].
///
/// # Errors
/// Any [`SymbolicError`] variant describing the first problem found while
/// tokenizing or parsing.
pub fn parse(text: &str) -> SymResult<Expr> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(SymbolicError::EmptyExpression);
    }
    let mut parser = Parser { tokens, cursor: 0 };
    let expr = parser.additive()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(SymbolicError::TrailingInput { position: token.position }),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleStar,
    LParen,
    RParen,
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    position: usize,
}

impl TokenKind {
    fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => n.to_string(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Slash => "/".to_string(),
            TokenKind::DoubleStar => "**".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
        }
    }
}

fn tokenize(text: &str) -> SymResult<Vec<Token>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token { kind: TokenKind::Plus, position: i });
                i += 1;
            }
            '-' => {
                tokens.push(Token { kind: TokenKind::Minus, position: i });
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token { kind: TokenKind::DoubleStar, position: i });
                    i += 2;
                } else {
                    tokens.push(Token { kind: TokenKind::Star, position: i });
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token { kind: TokenKind::Slash, position: i });
                i += 1;
            }
            '(' => {
                tokens.push(Token { kind: TokenKind::LParen, position: i });
                i += 1;
            }
            ')' => {
                tokens.push(Token { kind: TokenKind::RParen, position: i });
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Exponent part, e.g. 1e-3 or 2.5E+4.
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal.parse::<f64>().map_err(|_| SymbolicError::InvalidNumber {
                    literal: literal.clone(),
                    position: start,
                })?;
                tokens.push(Token { kind: TokenKind::Number(value), position: start });
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_ascii_alphanumeric() || chars[i] == '_')
                {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                tokens.push(Token { kind: TokenKind::Ident(name), position: start });
            }
            other => {
                return Err(SymbolicError::UnexpectedCharacter { character: other, position: i });
            }
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    // additive := multiplicative (('+' | '-') multiplicative)*
    fn additive(&mut self) -> SymResult<Expr> {
        let mut expr = self.multiplicative()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Plus => {
                    self.advance();
                    let rhs = self.multiplicative()?;
                    expr = Expr::Add(Box::new(expr), Box::new(rhs));
                }
                TokenKind::Minus => {
                    self.advance();
                    let rhs = self.multiplicative()?;
                    expr = Expr::Sub(Box::new(expr), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    // multiplicative := unary (('*' | '/') unary)*
    fn multiplicative(&mut self) -> SymResult<Expr> {
        let mut expr = self.unary()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Star => {
                    self.advance();
                    let rhs = self.unary()?;
                    expr = Expr::Mul(Box::new(expr), Box::new(rhs));
                }
                TokenKind::Slash => {
                    self.advance();
                    let rhs = self.unary()?;
                    expr = Expr::Div(Box::new(expr), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    // unary := '-' unary | power
    //
    // Power binds tighter than unary minus, so -x**2 is -(x**2).
    fn unary(&mut self) -> SymResult<Expr> {
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::Minus {
                self.advance();
                let inner = self.unary()?;
                return Ok(Expr::Neg(Box::new(inner)));
            }
        }
        self.power()
    }

    // power := atom ('**' unary)?   (right-associative; exponent may be signed)
    fn power(&mut self) -> SymResult<Expr> {
        let base = self.atom()?;
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::DoubleStar {
                self.advance();
                let exp = self.unary()?;
                return Ok(Expr::Pow(Box::new(base), Box::new(exp)));
            }
        }
        Ok(base)
    }

    // atom := number | ident '(' additive ')' | ident | '(' additive ')'
    fn atom(&mut self) -> SymResult<Expr> {
        let token = match self.advance() {
            Some(token) => token,
            None => return Err(SymbolicError::UnexpectedEnd),
        };
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Const(value)),
            TokenKind::Ident(name) => {
                if matches!(self.peek(), Some(t) if t.kind == TokenKind::LParen) {
                    let func = Func::from_name(&name)
                        .ok_or(SymbolicError::UnknownFunction { name })?;
                    let open = match self.advance() {
                        Some(t) => t,
                        None => return Err(SymbolicError::UnexpectedEnd),
                    };
                    let argument = self.additive()?;
                    match self.advance() {
                        Some(t) if t.kind == TokenKind::RParen => {
                            Ok(Expr::Apply(func, Box::new(argument)))
                        }
                        _ => Err(SymbolicError::UnbalancedParenthesis { position: open.position }),
                    }
                } else {
                    Ok(Expr::Var(name))
                }
            }
            TokenKind::LParen => {
                let inner = self.additive()?;
                match self.advance() {
                    Some(t) if t.kind == TokenKind::RParen => Ok(inner),
                    _ => Err(SymbolicError::UnbalancedParenthesis { position: token.position }),
                }
            }
            other => Err(SymbolicError::UnexpectedToken {
                found: other.describe(),
                position: token.position,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Operator precedence and associativity, including `**` vs unary minus.
    // - Function application and variable recognition.
    // - Every tokenizer and parser error path.
    //
    // They intentionally DO NOT cover:
    // - Differentiation (expr module tests) or caret rewriting (frontend).
    // -------------------------------------------------------------------------

    fn eval1(text: &str, x: f64) -> f64 {
        let expr = parse(text).expect("expression should parse");
        expr.eval(&["x1".to_string()], &[x])
    }

    #[test]
    // Purpose
    // -------
    // Multiplication binds tighter than addition and `**` tighter than `*`:
    // 2*x1**2 must differ from (2*x1)**2.
    fn precedence_power_over_multiplication() {
        assert!((eval1("2*x1**2", 3.0) - 18.0).abs() < 1e-12);
        assert!((eval1("(2*x1)**2", 3.0) - 36.0).abs() < 1e-12);
        assert!((eval1("1 + 2 * 3", 0.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Unary minus binds looser than power: -x1**2 evaluates to -(x1²).
    fn unary_minus_binds_looser_than_power() {
        assert!((eval1("-x1**2", 3.0) + 9.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Power is right-associative: 2**3**2 = 2**(3**2) = 512.
    fn power_is_right_associative() {
        assert!((eval1("2**3**2", 0.0) - 512.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A signed exponent parses: x1**-2 = 1/x1².
    fn signed_exponent_parses() {
        assert!((eval1("x1**-2", 2.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Function application and nested expressions evaluate correctly.
    fn function_application() {
        assert!((eval1("sin(x1)", 0.5) - 0.5_f64.sin()).abs() < 1e-12);
        assert!((eval1("exp(ln(x1))", 2.5) - 2.5).abs() < 1e-12);
        assert!((eval1("sqrt(x1**2 + 9)", 4.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Scientific notation literals tokenize as single numbers.
    fn scientific_notation_literals() {
        assert!((eval1("1e-3 + x1", 0.0) - 1e-3).abs() < 1e-15);
        assert!((eval1("2.5E+2", 0.0) - 250.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The caret is not part of the grammar; the tokenizer rejects it so the
    // frontend's rewrite step stays the only way in for `^`.
    fn caret_is_rejected() {
        match parse("x1^2") {
            Err(SymbolicError::UnexpectedCharacter { character: '^', .. }) => {}
            other => panic!("Expected UnexpectedCharacter for '^', got {other:?}"),
        }
    }

    #[test]
    fn unknown_function_is_rejected() {
        match parse("sinh(x1)") {
            Err(SymbolicError::UnknownFunction { name }) => assert_eq!(name, "sinh"),
            other => panic!("Expected UnknownFunction, got {other:?}"),
        }
    }

    #[test]
    fn unbalanced_parenthesis_is_rejected() {
        assert!(matches!(
            parse("(x1 + 1"),
            Err(SymbolicError::UnbalancedParenthesis { .. })
        ));
        assert!(matches!(parse("sin(x1"), Err(SymbolicError::UnbalancedParenthesis { .. })));
    }

    #[test]
    fn trailing_input_is_rejected() {
        assert!(matches!(parse("x1 + 1 )"), Err(SymbolicError::TrailingInput { .. })));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse("   "), Err(SymbolicError::EmptyExpression));
    }

    #[test]
    fn dangling_operator_is_rejected() {
        assert_eq!(parse("x1 +"), Err(SymbolicError::UnexpectedEnd));
    }
}
