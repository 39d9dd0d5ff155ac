//! CohortForge Criteria Engine
//!
//! This crate turns a criteria line such as `"10S - 3A2B1C"` into validated
//! per-class student counts:
//! - Parsing of criteria lines and their canonical serialization
//! - Validation of class counts against the declared total
//! - Combination search that merges overlapping classes on conflict
//! - Class registry holding canonical and synthesized class definitions
//!
//! Logging levels:
//! - **INFO**: Registry loading, analysed request summaries
//! - **DEBUG**: Parsing, acceptance, combination attempts and merges
//! - **WARN**: Skipped tokens and class pairs that cannot be merged

pub mod analyser;
pub mod combiner;
pub mod error;
pub mod parser;
pub mod registry;
pub mod search;
pub mod validator;

pub use analyser::CriteriaAnalyser;
pub use error::{AnalyserError, CriteriaField, IncompatibleCriteria, CONFLICT_MESSAGE};
pub use parser::{parse, parse_str, serialize};
pub use registry::ClassCriteriaRegistry;
pub use validator::{validate, validate_map};
