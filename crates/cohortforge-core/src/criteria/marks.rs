//! Mark thresholds: per-subject bounds and aggregate group-operation bounds.

use std::collections::BTreeMap;
use std::fmt;

use super::RangeCriteria;

/// Mark constraints of a class.
///
/// `subjects` bounds the mark of a single subject (e.g. `math`);
/// `group_operations` bounds an aggregate over all marks (e.g. `average`).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarksCriteria {
    #[cfg_attr(feature = "serde", serde(default))]
    subjects: BTreeMap<String, RangeCriteria>,
    #[cfg_attr(feature = "serde", serde(default))]
    group_operations: BTreeMap<String, RangeCriteria>,
}

impl MarksCriteria {
    /// Creates marks criteria from both maps.
    pub fn new(
        subjects: BTreeMap<String, RangeCriteria>,
        group_operations: BTreeMap<String, RangeCriteria>,
    ) -> Self {
        Self {
            subjects,
            group_operations,
        }
    }

    /// Starts an empty builder.
    pub fn builder() -> MarksCriteriaBuilder {
        MarksCriteriaBuilder::default()
    }

    /// Per-subject bounds.
    pub fn subjects(&self) -> &BTreeMap<String, RangeCriteria> {
        &self.subjects
    }

    /// Aggregate bounds.
    pub fn group_operations(&self) -> &BTreeMap<String, RangeCriteria> {
        &self.group_operations
    }

    /// Bound for one subject, if constrained.
    pub fn subject(&self, name: &str) -> Option<&RangeCriteria> {
        self.subjects.get(name)
    }

    /// Bound for one group operation, if constrained.
    pub fn group_operation(&self, name: &str) -> Option<&RangeCriteria> {
        self.group_operations.get(name)
    }

    /// Returns true when neither map holds a bound.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.group_operations.is_empty()
    }
}

impl fmt::Display for MarksCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let entries = self.subjects.iter().chain(self.group_operations.iter());
        for (i, (key, range)) in entries.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, range)?;
        }
        f.write_str("}")
    }
}

/// Builder for [`MarksCriteria`].
#[derive(Debug, Clone, Default)]
pub struct MarksCriteriaBuilder {
    subjects: BTreeMap<String, RangeCriteria>,
    group_operations: BTreeMap<String, RangeCriteria>,
}

impl MarksCriteriaBuilder {
    /// Bounds the mark of a subject.
    pub fn subject(mut self, name: impl Into<String>, range: RangeCriteria) -> Self {
        self.subjects.insert(name.into(), range);
        self
    }

    /// Bounds an aggregate over the marks.
    pub fn group_operation(mut self, name: impl Into<String>, range: RangeCriteria) -> Self {
        self.group_operations.insert(name.into(), range);
        self
    }

    pub fn build(self) -> MarksCriteria {
        MarksCriteria::new(self.subjects, self.group_operations)
    }
}
