use crate::optimization::errors::OptError;
use crate::symbolic::errors::SymbolicError;

/// Result alias for the textual boundary.
pub type FrontendResult<T> = Result<T, FrontendError>;

/// Input errors surfaced to the user before the optimizer core runs.
///
/// Everything here belongs to the input-mismatch class of the error
/// taxonomy: when any of these fire, the core is never invoked.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendError {
    /// The number of free variables in the parsed expression does not match
    /// the number of supplied initial guesses.
    VariableCountMismatch { expected: usize, found: usize },

    /// The expression contains no free variables; there is nothing to
    /// optimize over.
    NoVariables,

    /// An initial guess that failed to parse as a float.
    InvalidGuess { text: String },

    /// A tolerance that failed to parse as a float.
    InvalidTolerance { text: String },

    /// An iteration count that failed to parse as an unsigned integer.
    InvalidMaxIterations { text: String },

    /// The function expression failed to parse.
    Symbolic(SymbolicError),

    /// The optimizer rejected its configuration or initial point.
    Optimizer(OptError),
}

impl std::error::Error for FrontendError {}

impl std::fmt::Display for FrontendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontendError::VariableCountMismatch { expected, found } => {
                write!(
                    f,
                    "The number of initial guesses ({found}) does not match the number of \
                     variables in the function ({expected})"
                )
            }
            FrontendError::NoVariables => {
                write!(f, "The function expression contains no variables")
            }
            FrontendError::InvalidGuess { text } => {
                write!(f, "Invalid initial guess '{text}': not a number")
            }
            FrontendError::InvalidTolerance { text } => {
                write!(f, "Invalid tolerance '{text}': not a number")
            }
            FrontendError::InvalidMaxIterations { text } => {
                write!(f, "Invalid maximum iterations '{text}': not an unsigned integer")
            }
            FrontendError::Symbolic(err) => {
                write!(f, "Function expression error: {err}")
            }
            FrontendError::Optimizer(err) => {
                write!(f, "Optimizer error: {err}")
            }
        }
    }
}

impl From<SymbolicError> for FrontendError {
    fn from(err: SymbolicError) -> Self {
        FrontendError::Symbolic(err)
    }
}

impl From<OptError> for FrontendError {
    fn from(err: OptError) -> Self {
        FrontendError::Optimizer(err)
    }
}
