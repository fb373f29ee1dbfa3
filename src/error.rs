//! Error types for Asociar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Asociar operations.
///
/// Configuration errors are the only reported failures: they surface before
/// any mining work begins. Empty input is not an error (mining yields an
/// empty result), and an undefined confidence or lift ratio only removes the
/// affected candidate rule.
///
/// # Examples
///
/// ```
/// use asociar::error::AsociarError;
///
/// let err = AsociarError::InvalidHyperparameter {
///     param: "min_support".to_string(),
///     value: "1.5".to_string(),
///     constraint: "in (0, 1]".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid hyperparameter"));
/// ```
#[derive(Debug)]
pub enum AsociarError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AsociarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsociarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            AsociarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AsociarError {}

impl From<&str> for AsociarError {
    fn from(msg: &str) -> Self {
        AsociarError::Other(msg.to_string())
    }
}

impl From<String> for AsociarError {
    fn from(msg: String) -> Self {
        AsociarError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AsociarError>;
