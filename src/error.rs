// src/error.rs
use thiserror::Error;

/// Error types for the jump-paths library
#[derive(Debug, Error)]
pub enum SimError {
    /// Parameter outside its mathematical domain (or outside its control range)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Cross-sectional standard deviation of the diffusion innovations was zero,
    /// so the per-step moment matching is undefined.
    #[error(
        "Degenerate normalization at step {step}: cross-sectional std dev is {std_dev} \
         (single-path runs need Normalization::Off)"
    )]
    DegenerateNormalization { step: usize, std_dev: f64 },

    /// Recursion produced a non-finite or non-positive price
    #[error("Numerical instability: {reason}")]
    NumericalInstability { reason: String },

    /// A sampling distribution rejected its derived parameters
    #[error("Random generation error: {reason}")]
    Distribution { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parameter file error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for jump-paths operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    fn invalid(name: &str, value: f64, constraint: impl Into<String>) -> SimError {
        SimError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: constraint.into(),
        }
    }

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SimResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(invalid(name, value, "must be positive (> 0)"))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SimResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(invalid(name, value, "must be non-negative (≥ 0)"))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a closed range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> SimResult<()> {
        if !(min..=max).contains(&value) {
            Err(invalid(name, value, format!("must be in range [{}, {}]", min, max)))
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            Err(invalid(name, value, "must be finite (not NaN or infinite)"))
        } else {
            Ok(())
        }
    }

    /// Validate path count
    pub fn validate_paths(paths: usize) -> SimResult<()> {
        if paths == 0 {
            Err(invalid("paths", 0.0, "must be at least 1"))
        } else {
            Ok(())
        }
    }

    /// Validate step count
    pub fn validate_steps(steps: usize) -> SimResult<()> {
        if steps == 0 {
            Err(invalid("steps", 0.0, "must be at least 1"))
        } else {
            Ok(())
        }
    }
}
