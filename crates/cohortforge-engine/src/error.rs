//! Engine error types.

use std::fmt;

use cohortforge_config::ConfigError;
use cohortforge_core::ErrorCode;
use thiserror::Error;

/// Message carried by [`AnalyserError::CriteriaConflict`].
pub const CONFLICT_MESSAGE: &str = "Combined criteria has conflicts.";

/// Errors surfaced by the criteria engine.
#[derive(Debug, Error)]
pub enum AnalyserError {
    /// The declared total cannot hold the class counts, even after combining.
    #[error("{message} ({code})")]
    CriteriaConflict { code: ErrorCode, message: String },

    /// The class registry could not be built.
    #[error("Registry configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AnalyserError {
    /// Creates the conflict error returned by validation.
    pub fn conflict() -> Self {
        AnalyserError::CriteriaConflict {
            code: ErrorCode::ConflictsInputCriteria,
            message: CONFLICT_MESSAGE.to_string(),
        }
    }

    /// Returns the machine-readable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalyserError::CriteriaConflict { code, .. } => *code,
            AnalyserError::Config(_) => ErrorCode::InvalidCriteria,
        }
    }
}

/// The criteria field whose ranges did not overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaField {
    Age,
    Course,
    Subject(String),
    GroupOperation(String),
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriteriaField::Age => f.write_str("age"),
            CriteriaField::Course => f.write_str("course"),
            CriteriaField::Subject(name) => write!(f, "subject {}", name),
            CriteriaField::GroupOperation(name) => write!(f, "group operation {}", name),
        }
    }
}

/// Two class definitions cannot be merged.
///
/// Returned by the combiner and consumed by the combination search, which
/// moves on to the next candidate. Never reaches callers of validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncompatibleCriteria {
    /// A constrained field pair has disjoint ranges.
    #[error("Parameters cannot be combined: disjoint {0} ranges")]
    Disjoint(CriteriaField),

    /// A class token has no registered definition.
    #[error("Parameters cannot be combined: unknown class {0}")]
    UnknownClass(String),

    /// The merged name already belongs to a canonical class.
    #[error("Parameters cannot be combined: {0} is a canonical class")]
    CanonicalName(String),
}

impl IncompatibleCriteria {
    /// Returns the machine-readable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            IncompatibleCriteria::UnknownClass(_) => ErrorCode::UnknownClass,
            IncompatibleCriteria::Disjoint(_) | IncompatibleCriteria::CanonicalName(_) => {
                ErrorCode::InvalidCriteria
            }
        }
    }
}
