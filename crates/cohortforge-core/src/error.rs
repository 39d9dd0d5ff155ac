//! Error types for CohortForge

use std::fmt;

use thiserror::Error;

/// Main error type for criteria construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    /// Range bounds are inverted or not comparable
    #[error("Invalid range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// Class name is empty or reserved
    #[error("Invalid class name: {0:?}")]
    InvalidClassName(String),
}

impl CriteriaError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidCriteria
    }
}

/// Result type alias for criteria operations
pub type Result<T> = std::result::Result<T, CriteriaError>;

/// Machine-readable error codes surfaced to callers of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The declared total cannot hold the requested class counts,
    /// even after combining compatible classes.
    ConflictsInputCriteria,

    /// A criteria definition is malformed.
    InvalidCriteria,

    /// A class token has no registered definition.
    UnknownClass,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConflictsInputCriteria => "CONFLICTS_INPUT_CRITERIA",
            ErrorCode::InvalidCriteria => "INVALID_CRITERIA",
            ErrorCode::UnknownClass => "UNKNOWN_CLASS",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
