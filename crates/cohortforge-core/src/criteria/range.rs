//! Inclusive numeric ranges and their intersection.

use std::fmt;

use crate::error::{CriteriaError, Result};

/// Intersects two inclusive ranges given by their bounds.
///
/// The ranges overlap iff `min_a <= max_b && max_a >= min_b`; touching
/// endpoints count as overlap. Returns `None` for disjoint ranges.
///
/// # Example
///
/// ```
/// use cohortforge_core::intersect;
///
/// assert_eq!(intersect(10.0, 20.0, 15.0, 25.0), Some((15.0, 20.0)));
/// assert_eq!(intersect(10.0, 20.0, 20.0, 30.0), Some((20.0, 20.0)));
/// assert_eq!(intersect(10.0, 20.0, 30.0, 40.0), None);
/// ```
#[inline]
pub fn intersect(min_a: f64, max_a: f64, min_b: f64, max_b: f64) -> Option<(f64, f64)> {
    if min_a <= max_b && max_a >= min_b {
        Some((min_a.max(min_b), max_a.min(max_b)))
    } else {
        None
    }
}

/// An inclusive `[min, max]` bound on a numeric student attribute
/// (age, course, a mark).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRange")
)]
pub struct RangeCriteria {
    min: f64,
    max: f64,
}

impl RangeCriteria {
    /// Creates a range, rejecting `min > max` and NaN bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        // NaN fails the comparison as well
        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(CriteriaError::InvalidRange { min, max })
        }
    }

    /// Creates a range that holds exactly one value.
    pub fn exactly(value: f64) -> Result<Self> {
        Self::new(value, value)
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true if `value` lies within the bounds.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns the overlap of two ranges, or `None` when they are disjoint.
    pub fn intersect(&self, other: &RangeCriteria) -> Option<RangeCriteria> {
        intersect(self.min, self.max, other.min, other.max).map(|(min, max)| Self { min, max })
    }
}

impl fmt::Display for RangeCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for RangeCriteria {
    type Error = CriteriaError;

    fn try_from(raw: RawRange) -> Result<Self> {
        RangeCriteria::new(raw.min, raw.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_ranges() {
        assert_eq!(intersect(10.0, 20.0, 15.0, 25.0), Some((15.0, 20.0)));
        assert_eq!(intersect(15.0, 25.0, 10.0, 20.0), Some((15.0, 20.0)));
    }

    #[test]
    fn test_contained_range() {
        assert_eq!(intersect(0.0, 100.0, 40.0, 60.0), Some((40.0, 60.0)));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert_eq!(intersect(10.0, 20.0, 30.0, 40.0), None);
        assert_eq!(intersect(30.0, 40.0, 10.0, 20.0), None);
    }

    #[test]
    fn test_new_rejects_inverted_and_nan() {
        assert!(RangeCriteria::new(3.0, 3.0).is_ok());
        assert_eq!(
            RangeCriteria::new(4.0, 3.0),
            Err(CriteriaError::InvalidRange { min: 4.0, max: 3.0 })
        );
        assert!(RangeCriteria::new(f64::NAN, 3.0).is_err());
    }

    #[test]
    fn test_range_intersect_method() {
        let a = RangeCriteria::new(10.0, 20.0).unwrap();
        let b = RangeCriteria::new(15.0, 25.0).unwrap();
        let merged = a.intersect(&b).unwrap();

        assert_eq!(merged.min(), 15.0);
        assert_eq!(merged.max(), 20.0);
        assert!(merged.contains(17.5));
        assert!(!merged.contains(21.0));
        assert_eq!(merged.to_string(), "[15, 20]");
    }
}
