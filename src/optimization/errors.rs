/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

/// Errors raised while validating optimizer configuration and inputs.
///
/// Numeric degeneracy during the run itself (a singular or non-invertible
/// Hessian, a non-finite Newton step) is NOT an error: the core recovers
/// locally by falling back to a gradient-descent step for that iteration.
/// Divergence and iteration-budget exhaustion are ordinary terminal
/// outcomes, not errors either.
#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- HybridOptions ----
    /// Gradient-norm convergence threshold must be positive and finite.
    InvalidEpsilon {
        value: f64,
        reason: &'static str,
    },

    /// Gradient-descent learning rate must be positive and finite.
    InvalidLearningRate {
        value: f64,
        reason: &'static str,
    },

    /// Divergence threshold must not be NaN.
    InvalidDivergenceThreshold {
        value: f64,
    },

    // ---- Initial point ----
    /// Initial point coordinates must be finite.
    InvalidInitialPoint {
        index: usize,
        value: f64,
    },

    /// Initial point must contain at least one coordinate.
    EmptyInitialPoint,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptError::InvalidEpsilon { value, reason } => {
                write!(f, "Invalid epsilon {value}: {reason}")
            }
            OptError::InvalidLearningRate { value, reason } => {
                write!(f, "Invalid learning rate {value}: {reason}")
            }
            OptError::InvalidDivergenceThreshold { value } => {
                write!(f, "Invalid divergence threshold {value}: must not be NaN")
            }
            OptError::InvalidInitialPoint { index, value } => {
                write!(f, "Invalid initial point at index {index}: {value}, must be finite")
            }
            OptError::EmptyInitialPoint => {
                write!(f, "Initial point must contain at least one coordinate")
            }
        }
    }
}
