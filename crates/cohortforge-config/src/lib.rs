//! Configuration system for CohortForge.
//!
//! Load the canonical generation classes from TOML or YAML files so the
//! class registry can be rebuilt at process start without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use cohortforge_config::RegistryConfig;
//!
//! let config = RegistryConfig::from_toml_str(r#"
//!     [classes.A]
//!     age = { min = 17.0, max = 21.0 }
//!     course = { min = 1.0, max = 2.0 }
//!
//!     [classes.A.marks.subjects]
//!     math = { min = 7.0, max = 10.0 }
//!
//!     [classes.B]
//!     age = { min = 20.0, max = 25.0 }
//! "#).unwrap();
//!
//! assert_eq!(config.classes.len(), 2);
//! let classes = config.into_class_criteria().unwrap();
//! assert_eq!(classes["A"].age().map(|r| r.min()), Some(17.0));
//! ```
//!
//! Use an empty registry when the file is missing:
//!
//! ```
//! use cohortforge_config::RegistryConfig;
//!
//! let config = RegistryConfig::load("cohort.toml").unwrap_or_default();
//! // Proceeds without canonical classes if the file doesn't exist
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use cohortforge_core::{ClassCriteria, GenerationClass, MarksCriteria, RangeCriteria};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Canonical class definitions keyed by class-name token.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RegistryConfig {
    /// Class definitions.
    #[serde(default)]
    pub classes: BTreeMap<String, ClassConfig>,
}

impl RegistryConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a class definition.
    pub fn with_class(mut self, name: impl Into<String>, class: ClassConfig) -> Self {
        self.classes.insert(name.into(), class);
        self
    }

    /// Checks class names and range bounds.
    ///
    /// Class names must be non-empty and must not collide with the reserved
    /// `S` and `RAND` tokens, in any letter case.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, class) in &self.classes {
            GenerationClass::check_class_name(name)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
            class.to_class_criteria().map_err(|e| {
                ConfigError::Invalid(format!("class {}: {}", name, e))
            })?;
        }
        Ok(())
    }

    /// Converts every class into its core criteria, validating first.
    pub fn into_class_criteria(&self) -> Result<BTreeMap<String, ClassCriteria>, ConfigError> {
        self.validate()?;
        let mut classes = BTreeMap::new();
        for (name, class) in &self.classes {
            let criteria = class
                .to_class_criteria()
                .map_err(|e| ConfigError::Invalid(format!("class {}: {}", name, e)))?;
            classes.insert(name.clone(), criteria);
        }
        Ok(classes)
    }
}

/// One class definition.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassConfig {
    /// Age bound.
    #[serde(default)]
    pub age: Option<RangeConfig>,

    /// Course bound.
    #[serde(default)]
    pub course: Option<RangeConfig>,

    /// Mark thresholds.
    #[serde(default)]
    pub marks: Option<MarksConfig>,
}

impl ClassConfig {
    /// Creates an unconstrained class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the age bound.
    pub fn with_age(mut self, min: f64, max: f64) -> Self {
        self.age = Some(RangeConfig { min, max });
        self
    }

    /// Sets the course bound.
    pub fn with_course(mut self, min: f64, max: f64) -> Self {
        self.course = Some(RangeConfig { min, max });
        self
    }

    /// Bounds the mark of one subject.
    pub fn with_subject(mut self, subject: impl Into<String>, min: f64, max: f64) -> Self {
        self.marks
            .get_or_insert_with(MarksConfig::default)
            .subjects
            .insert(subject.into(), RangeConfig { min, max });
        self
    }

    /// Bounds one aggregate over the marks.
    pub fn with_group_operation(
        mut self,
        operation: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        self.marks
            .get_or_insert_with(MarksConfig::default)
            .group_operations
            .insert(operation.into(), RangeConfig { min, max });
        self
    }

    /// Converts to core criteria.
    pub fn to_class_criteria(&self) -> cohortforge_core::Result<ClassCriteria> {
        let age = self.age.as_ref().map(RangeConfig::to_range).transpose()?;
        let course = self.course.as_ref().map(RangeConfig::to_range).transpose()?;
        let marks = self.marks.as_ref().map(MarksConfig::to_marks).transpose()?;
        Ok(ClassCriteria::builder().fields(age, course, marks).build())
    }
}

/// Inclusive range bound.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
}

impl RangeConfig {
    fn to_range(&self) -> cohortforge_core::Result<RangeCriteria> {
        RangeCriteria::new(self.min, self.max)
    }
}

/// Mark thresholds configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MarksConfig {
    /// Per-subject bounds.
    #[serde(default)]
    pub subjects: BTreeMap<String, RangeConfig>,

    /// Aggregate bounds, keyed by operation (e.g. `average`).
    #[serde(default)]
    pub group_operations: BTreeMap<String, RangeConfig>,
}

impl MarksConfig {
    fn to_marks(&self) -> cohortforge_core::Result<MarksCriteria> {
        let mut builder = MarksCriteria::builder();
        for (subject, range) in &self.subjects {
            builder = builder.subject(subject.clone(), range.to_range()?);
        }
        for (operation, range) in &self.group_operations {
            builder = builder.group_operation(operation.clone(), range.to_range()?);
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests;
