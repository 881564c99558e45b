/// Crate-wide result alias for symbolic operations.
pub type SymResult<T> = Result<T, SymbolicError>;

/// Errors produced while tokenizing or parsing an expression string.
///
/// These are all recoverable input errors: the caller supplied text that is
/// not a well-formed expression. Evaluation of a successfully parsed
/// expression never produces a `SymbolicError`; numeric domain problems
/// follow IEEE-754 semantics instead (NaN / infinity).
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicError {
    /// A character the tokenizer does not recognize.
    UnexpectedCharacter { character: char, position: usize },

    /// A numeric literal that failed to parse as `f64`.
    InvalidNumber { literal: String, position: usize },

    /// An identifier applied as a function that is not a known function name.
    UnknownFunction { name: String },

    /// The parser expected more input (e.g. an operand after an operator).
    UnexpectedEnd,

    /// A token that cannot start or continue the current construct.
    UnexpectedToken { found: String, position: usize },

    /// A closing parenthesis with no matching opening parenthesis, or vice versa.
    UnbalancedParenthesis { position: usize },

    /// Input remained after a complete expression was parsed.
    TrailingInput { position: usize },

    /// The input was empty or contained only whitespace.
    EmptyExpression,
}

impl std::error::Error for SymbolicError {}

impl std::fmt::Display for SymbolicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolicError::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character '{character}' at position {position}")
            }
            SymbolicError::InvalidNumber { literal, position } => {
                write!(f, "Invalid numeric literal '{literal}' at position {position}")
            }
            SymbolicError::UnknownFunction { name } => {
                write!(f, "Unknown function '{name}'")
            }
            SymbolicError::UnexpectedEnd => {
                write!(f, "Unexpected end of expression")
            }
            SymbolicError::UnexpectedToken { found, position } => {
                write!(f, "Unexpected token '{found}' at position {position}")
            }
            SymbolicError::UnbalancedParenthesis { position } => {
                write!(f, "Unbalanced parenthesis at position {position}")
            }
            SymbolicError::TrailingInput { position } => {
                write!(f, "Trailing input after expression at position {position}")
            }
            SymbolicError::EmptyExpression => {
                write!(f, "Expression is empty")
            }
        }
    }
}
