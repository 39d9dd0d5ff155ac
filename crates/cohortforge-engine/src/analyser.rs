//! Criteria analyser: the entry point used by the service layer.

use std::path::Path;
use std::sync::Arc;

use cohortforge_config::RegistryConfig;
use cohortforge_core::CriteriaMap;
use tracing::info;

use crate::error::AnalyserError;
use crate::registry::ClassCriteriaRegistry;
use crate::{parser, search, validator};

/// Parses and validates criteria lines against a shared class registry.
///
/// Cheap to clone; clones share the registry.
///
/// # Example
///
/// ```
/// use cohortforge_core::{ClassCriteria, RangeCriteria};
/// use cohortforge_engine::{ClassCriteriaRegistry, CriteriaAnalyser};
///
/// let registry = ClassCriteriaRegistry::new()
///     .with_class("A", ClassCriteria::builder().age(RangeCriteria::new(10.0, 20.0).unwrap()).build())
///     .with_class("B", ClassCriteria::builder().age(RangeCriteria::new(15.0, 25.0).unwrap()).build());
/// let analyser = CriteriaAnalyser::new(registry);
///
/// let result = analyser.analyse("5S - 3A4B").unwrap();
/// assert_eq!(result["AB"], 3);
/// assert_eq!(result["B"], 1);
/// assert_eq!(result["rand"], 1);
/// ```
#[derive(Debug, Clone)]
pub struct CriteriaAnalyser {
    registry: Arc<ClassCriteriaRegistry>,
}

impl CriteriaAnalyser {
    /// Creates an analyser owning the registry.
    pub fn new(registry: ClassCriteriaRegistry) -> Self {
        Self::with_shared_registry(Arc::new(registry))
    }

    /// Creates an analyser over a registry shared with other components.
    pub fn with_shared_registry(registry: Arc<ClassCriteriaRegistry>) -> Self {
        Self { registry }
    }

    /// Builds the registry from configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, AnalyserError> {
        Ok(Self::new(ClassCriteriaRegistry::from_config(config)?))
    }

    /// Loads the registry from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnalyserError> {
        Ok(Self::new(ClassCriteriaRegistry::load(path)?))
    }

    /// The class registry.
    pub fn registry(&self) -> &ClassCriteriaRegistry {
        &self.registry
    }

    /// Shared handle to the class registry.
    pub fn shared_registry(&self) -> Arc<ClassCriteriaRegistry> {
        Arc::clone(&self.registry)
    }

    /// See [`parser::parse`].
    pub fn parse(&self, input: Option<&str>) -> Option<CriteriaMap> {
        parser::parse(input)
    }

    /// See [`parser::serialize`].
    pub fn serialize(&self, criteria: &CriteriaMap) -> Option<String> {
        parser::serialize(criteria)
    }

    /// See [`validator::validate`].
    pub fn validate(
        &self,
        parsed: Option<CriteriaMap>,
    ) -> Result<Option<CriteriaMap>, AnalyserError> {
        validator::validate(parsed, &self.registry)
    }

    /// See [`search::combine`].
    pub fn combine(&self, criteria: &CriteriaMap) -> CriteriaMap {
        search::combine(criteria, &self.registry)
    }

    /// Parses a criteria line and validates it.
    pub fn analyse(&self, input: &str) -> Result<CriteriaMap, AnalyserError> {
        let parsed = parser::parse_str(input);
        let result = validator::validate_map(parsed, &self.registry)?;
        info!(
            event = "criteria_analysed",
            line = %parser::serialize(&result).unwrap_or_default(),
            composite_count = self.registry.composite_len(),
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "analyser_tests.rs"]
mod tests;
