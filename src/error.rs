// src/error.rs
use std::fmt;

/// Custom error types for the bsm-greeks library
#[derive(Debug, Clone)]
pub enum GreeksError {
    /// Invalid numeric parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration (selections, axis sizing, missing fields)
    InvalidConfiguration { field: String, reason: String },

    /// Parameter file could not be read
    ConfigIo { path: String, reason: String },

    /// Parameter file contained a malformed value
    ConfigParse {
        key: String,
        value: String,
        reason: String,
    },

    /// Unknown token in a Greeks/Options/Plots enumeration
    UnknownSelection { kind: String, token: String },

    /// Requested (greek, option) pair is not present in the computed surfaces
    MissingSurface { greek: String, option: String },
}

impl fmt::Display for GreeksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreeksError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            GreeksError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            GreeksError::ConfigIo { path, reason } => {
                write!(f, "Cannot read parameter file '{}': {}", path, reason)
            }
            GreeksError::ConfigParse { key, value, reason } => {
                write!(
                    f,
                    "Malformed value '{}' for parameter '{}': {}",
                    value, key, reason
                )
            }
            GreeksError::UnknownSelection { kind, token } => {
                write!(f, "Unknown {} '{}' in selection", kind, token)
            }
            GreeksError::MissingSurface { greek, option } => {
                write!(
                    f,
                    "No computed surface for ({}, {}): not part of the selection",
                    greek, option
                )
            }
        }
    }
}

impl std::error::Error for GreeksError {}

/// Result type alias for bsm-greeks operations
pub type GreeksResult<T> = Result<T, GreeksError>;

/// Validation utilities
pub mod validation {
    use super::{GreeksError, GreeksResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> GreeksResult<()> {
        if value <= 0.0 {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> GreeksResult<()> {
        if !value.is_finite() {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate maturity-axis resolution
    pub fn validate_maturities(num_maturities: usize) -> GreeksResult<()> {
        if num_maturities == 0 {
            Err(GreeksError::InvalidConfiguration {
                field: "num_maturities".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if num_maturities > 100_000 {
            Err(GreeksError::InvalidConfiguration {
                field: "num_maturities".to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
