//! Validation helpers for the hybrid optimizer.
//!
//! This module centralizes the consistency checks used across the optimizer
//! interface:
//!
//! - **Option checks**: [`verify_epsilon`], [`verify_learning_rate`],
//!   [`verify_divergence_threshold`] ensure configuration values are usable
//!   before a run starts.
//! - **Initial point**: [`validate_initial_point`] enforces a non-empty,
//!   all-finite starting iterate.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::optimization::{
    errors::{OptError, OptResult},
    types::Point,
};

/// Validate the gradient-norm convergence threshold.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidEpsilon`] if the value is non-finite or ≤ 0.0.
pub fn verify_epsilon(epsilon: f64) -> OptResult<()> {
    if !epsilon.is_finite() {
        return Err(OptError::InvalidEpsilon { value: epsilon, reason: "Epsilon must be finite." });
    }
    if epsilon <= 0.0 {
        return Err(OptError::InvalidEpsilon {
            value: epsilon,
            reason: "Epsilon must be positive.",
        });
    }
    Ok(())
}

/// Validate the gradient-descent learning rate.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidLearningRate`] if the value is non-finite or ≤ 0.0.
pub fn verify_learning_rate(learning_rate: f64) -> OptResult<()> {
    if !learning_rate.is_finite() {
        return Err(OptError::InvalidLearningRate {
            value: learning_rate,
            reason: "Learning rate must be finite.",
        });
    }
    if learning_rate <= 0.0 {
        return Err(OptError::InvalidLearningRate {
            value: learning_rate,
            reason: "Learning rate must be positive.",
        });
    }
    Ok(())
}

/// Validate the divergence threshold.
///
/// Any non-NaN value is legal, including `-inf` (which disables the check,
/// since no finite function value compares below it).
///
/// # Errors
/// Returns [`OptError::InvalidDivergenceThreshold`] for NaN.
pub fn verify_divergence_threshold(threshold: f64) -> OptResult<()> {
    if threshold.is_nan() {
        return Err(OptError::InvalidDivergenceThreshold { value: threshold });
    }
    Ok(())
}

/// Validate the starting iterate.
///
/// Checks:
/// - the point has at least one coordinate (`N ≥ 1`),
/// - every coordinate is finite (`NaN` and `±∞` are rejected).
///
/// # Errors
/// - [`OptError::EmptyInitialPoint`] for a zero-length point.
/// - [`OptError::InvalidInitialPoint`] with the index/value of the first
///   offending coordinate.
pub fn validate_initial_point(point: &Point) -> OptResult<()> {
    if point.is_empty() {
        return Err(OptError::EmptyInitialPoint);
    }
    for (index, &value) in point.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidInitialPoint { index, value });
        }
    }
    Ok(())
}
