//! Class criteria: the bundle of constraints that defines a generation class.

use std::fmt;

use super::{MarksCriteria, RangeCriteria};

/// Definition of a generation class.
///
/// Every field is optional; an absent field leaves that attribute
/// unconstrained. Instances are immutable once built.
///
/// # Example
///
/// ```
/// use cohortforge_core::{ClassCriteria, RangeCriteria};
///
/// let freshmen = ClassCriteria::builder()
///     .age(RangeCriteria::new(17.0, 19.0).unwrap())
///     .course(RangeCriteria::exactly(1.0).unwrap())
///     .build();
///
/// assert_eq!(freshmen.age().map(|r| r.max()), Some(19.0));
/// assert!(freshmen.marks().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassCriteria {
    #[cfg_attr(feature = "serde", serde(default))]
    age: Option<RangeCriteria>,
    #[cfg_attr(feature = "serde", serde(default))]
    course: Option<RangeCriteria>,
    #[cfg_attr(feature = "serde", serde(default))]
    marks: Option<MarksCriteria>,
}

impl ClassCriteria {
    /// Creates class criteria from its parts.
    pub fn new(
        age: Option<RangeCriteria>,
        course: Option<RangeCriteria>,
        marks: Option<MarksCriteria>,
    ) -> Self {
        Self { age, course, marks }
    }

    /// Starts an unconstrained builder.
    pub fn builder() -> ClassCriteriaBuilder {
        ClassCriteriaBuilder::default()
    }

    /// Age bound.
    pub fn age(&self) -> Option<&RangeCriteria> {
        self.age.as_ref()
    }

    /// Course bound.
    pub fn course(&self) -> Option<&RangeCriteria> {
        self.course.as_ref()
    }

    /// Mark thresholds.
    pub fn marks(&self) -> Option<&MarksCriteria> {
        self.marks.as_ref()
    }

    /// Returns true when no attribute is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.age.is_none() && self.course.is_none() && self.marks.is_none()
    }
}

impl fmt::Display for ClassCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClassCriteria(")?;
        let mut sep = "";
        if let Some(age) = &self.age {
            write!(f, "age={}", age)?;
            sep = ", ";
        }
        if let Some(course) = &self.course {
            write!(f, "{}course={}", sep, course)?;
            sep = ", ";
        }
        if let Some(marks) = &self.marks {
            write!(f, "{}marks={}", sep, marks)?;
        }
        f.write_str(")")
    }
}

/// Builder for [`ClassCriteria`].
#[derive(Debug, Clone, Default)]
pub struct ClassCriteriaBuilder {
    age: Option<RangeCriteria>,
    course: Option<RangeCriteria>,
    marks: Option<MarksCriteria>,
}

impl ClassCriteriaBuilder {
    pub fn age(mut self, range: RangeCriteria) -> Self {
        self.age = Some(range);
        self
    }

    pub fn course(mut self, range: RangeCriteria) -> Self {
        self.course = Some(range);
        self
    }

    pub fn marks(mut self, marks: MarksCriteria) -> Self {
        self.marks = Some(marks);
        self
    }

    /// Sets every field at once, absent values included.
    pub fn fields(
        mut self,
        age: Option<RangeCriteria>,
        course: Option<RangeCriteria>,
        marks: Option<MarksCriteria>,
    ) -> Self {
        self.age = age;
        self.course = course;
        self.marks = marks;
        self
    }

    pub fn build(self) -> ClassCriteria {
        ClassCriteria::new(self.age, self.course, self.marks)
    }
}
