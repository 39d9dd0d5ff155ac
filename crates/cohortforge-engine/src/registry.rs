//! Registry of class definitions.
//!
//! Canonical classes are fixed when the registry is built and are read
//! without locking. Composite classes synthesized by the combination search
//! live behind a read-write lock; they are only ever added or overwritten,
//! never removed, for the lifetime of the registry.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use cohortforge_config::{ConfigError, RegistryConfig};
use cohortforge_core::ClassCriteria;
use parking_lot::RwLock;
use tracing::{info, warn};

/// Lookup from class-name token to its [`ClassCriteria`].
///
/// Shared across requests, typically as `Arc<ClassCriteriaRegistry>`.
///
/// # Example
///
/// ```
/// use cohortforge_core::{ClassCriteria, RangeCriteria};
/// use cohortforge_engine::ClassCriteriaRegistry;
///
/// let registry = ClassCriteriaRegistry::new()
///     .with_class("A", ClassCriteria::builder().age(RangeCriteria::new(17.0, 21.0).unwrap()).build());
///
/// assert!(registry.contains("A"));
/// assert!(registry.get("B").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ClassCriteriaRegistry {
    canonical: HashMap<String, Arc<ClassCriteria>>,
    combined: RwLock<HashMap<String, Arc<ClassCriteria>>>,
}

impl ClassCriteriaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from canonical class definitions.
    pub fn from_classes<I, K>(classes: I) -> Self
    where
        I: IntoIterator<Item = (K, ClassCriteria)>,
        K: Into<String>,
    {
        let canonical = classes
            .into_iter()
            .map(|(name, criteria)| (name.into(), Arc::new(criteria)))
            .collect();
        Self {
            canonical,
            combined: RwLock::new(HashMap::new()),
        }
    }

    /// Builds the registry from a validated configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        let registry = Self::from_classes(config.into_class_criteria()?);
        info!(event = "registry_loaded", canonical_count = registry.canonical_len());
        Ok(registry)
    }

    /// Loads the registry from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_config(&RegistryConfig::load(path)?)
    }

    /// Adds a canonical class.
    pub fn with_class(mut self, name: impl Into<String>, criteria: ClassCriteria) -> Self {
        self.canonical.insert(name.into(), Arc::new(criteria));
        self
    }

    /// Looks up a class, canonical definitions first.
    pub fn get(&self, name: &str) -> Option<Arc<ClassCriteria>> {
        if let Some(criteria) = self.canonical.get(name) {
            return Some(Arc::clone(criteria));
        }
        self.combined.read().get(name).cloned()
    }

    /// Returns true if the class is known.
    pub fn contains(&self, name: &str) -> bool {
        self.canonical.contains_key(name) || self.combined.read().contains_key(name)
    }

    /// Returns true if the class is a canonical one.
    pub fn is_canonical(&self, name: &str) -> bool {
        self.canonical.contains_key(name)
    }

    /// Stores a composite class, overwriting any previous composite of the
    /// same name.
    ///
    /// Canonical names are never shadowed: storing a composite under a
    /// canonical name leaves the registry unchanged and returns the
    /// canonical definition.
    pub fn put_combined(&self, name: impl Into<String>, criteria: ClassCriteria) -> Arc<ClassCriteria> {
        let name = name.into();
        if let Some(canonical) = self.canonical.get(&name) {
            warn!(event = "composite_shadowed", class = %name);
            return Arc::clone(canonical);
        }

        let criteria = Arc::new(criteria);
        self.combined.write().insert(name, Arc::clone(&criteria));
        criteria
    }

    /// Number of canonical classes.
    pub fn canonical_len(&self) -> usize {
        self.canonical.len()
    }

    /// Number of composite classes synthesized so far.
    pub fn composite_len(&self) -> usize {
        self.combined.read().len()
    }

    /// Names of the composite classes, sorted.
    pub fn composite_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.combined.read().keys().cloned().collect();
        names.sort();
        names
    }
}
