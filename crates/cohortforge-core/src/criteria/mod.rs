//! Criteria value types
//!
//! A generation class is defined by a [`ClassCriteria`]: optional bounds on
//! age and course plus optional [`MarksCriteria`]. All bounds are inclusive
//! [`RangeCriteria`] values, merged with [`intersect`].

mod class;
mod marks;
mod range;


pub use class::{ClassCriteria, ClassCriteriaBuilder};
pub use marks::{MarksCriteria, MarksCriteriaBuilder};
pub use range::{intersect, RangeCriteria};
