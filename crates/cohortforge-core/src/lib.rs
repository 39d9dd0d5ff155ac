//! CohortForge Core - Criteria types and range algebra
//!
//! This crate provides the fundamental abstractions for CohortForge:
//! - Generation class tokens and the criteria count map
//! - Range, marks and class criteria value types
//! - Interval intersection used when merging class definitions
//! - Error types and machine-readable error codes

pub mod criteria;
pub mod error;
pub mod generation;

pub use criteria::{
    intersect, ClassCriteria, ClassCriteriaBuilder, MarksCriteria, MarksCriteriaBuilder,
    RangeCriteria,
};
pub use error::{CriteriaError, ErrorCode, Result};
pub use generation::{CriteriaMap, GenerationClass};
