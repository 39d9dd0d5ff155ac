//! CohortForge - A Student Cohort Criteria Engine in Rust
//!
//! Turn a criteria line into per-class student counts, merging overlapping
//! class definitions when the requested counts exceed the total.
//!
//! # Example
//!
//! ```rust
//! use cohortforge::prelude::*;
//!
//! let config = RegistryConfig::from_toml_str(r#"
//!     [classes.A]
//!     age = { min = 17.0, max = 21.0 }
//!
//!     [classes.B]
//!     age = { min = 20.0, max = 25.0 }
//! "#).unwrap();
//!
//! let analyser = CriteriaAnalyser::from_config(&config).unwrap();
//! let counts = analyser.analyse("10S - 3A2B").unwrap();
//! assert_eq!(counts["rand"], 5);
//! ```

// Criteria value types
pub use cohortforge_core::{
    intersect, ClassCriteria, CriteriaError, CriteriaMap, ErrorCode, GenerationClass,
    MarksCriteria, RangeCriteria,
};

// Registry configuration
pub use cohortforge_config::{ClassConfig, ConfigError, MarksConfig, RangeConfig, RegistryConfig};

// Engine
pub use cohortforge_engine::{
    combiner, parser, search, validator, AnalyserError, ClassCriteriaRegistry, CriteriaAnalyser,
    IncompatibleCriteria,
};

/// Console output for engine events.
#[cfg(feature = "console")]
pub mod console {
    pub use cohortforge_console::{init, CohortConsoleLayer};
}

pub mod prelude {
    pub use super::{
        AnalyserError, ClassCriteria, ClassCriteriaRegistry, CriteriaAnalyser, CriteriaMap,
        ErrorCode, RangeCriteria, RegistryConfig,
    };
}
