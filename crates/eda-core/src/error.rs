//! Error types for interval estimation
//!
//! Provides a unified error type for all eda-intervals crates.

use thiserror::Error;

/// Core error type for interval estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to an estimator
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample with too few usable values
    pub fn too_few_values(expected: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "expected at least {expected} non-missing values, got {actual}"
        ))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for a value that is neither logical nor zero/one
    pub fn invalid_outcome(position: usize) -> Self {
        Self::InvalidInput(format!(
            "the outcome variable has to be either logical or zero/one (position {position})"
        ))
    }

    /// Check whether this is an input validation failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
