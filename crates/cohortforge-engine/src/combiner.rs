//! Merging of two class definitions into one.
//!
//! Every pair of corresponding bounds is intersected. A field constrained on
//! one side only passes through unchanged; a field constrained on both sides
//! with disjoint ranges makes the whole merge fail.

use std::collections::BTreeMap;

use cohortforge_core::{ClassCriteria, MarksCriteria, RangeCriteria};

use crate::error::{CriteriaField, IncompatibleCriteria};

/// Merges two class definitions.
///
/// # Example
///
/// ```
/// use cohortforge_core::{ClassCriteria, RangeCriteria};
/// use cohortforge_engine::combiner::combine;
///
/// let a = ClassCriteria::builder().age(RangeCriteria::new(10.0, 20.0).unwrap()).build();
/// let b = ClassCriteria::builder().age(RangeCriteria::new(15.0, 25.0).unwrap()).build();
/// let merged = combine(&a, &b).unwrap();
/// assert_eq!(merged.age(), Some(&RangeCriteria::new(15.0, 20.0).unwrap()));
///
/// let c = ClassCriteria::builder().age(RangeCriteria::new(30.0, 40.0).unwrap()).build();
/// assert!(combine(&a, &c).is_err());
/// ```
pub fn combine(
    first: &ClassCriteria,
    second: &ClassCriteria,
) -> Result<ClassCriteria, IncompatibleCriteria> {
    let age = combine_range(CriteriaField::Age, first.age(), second.age())?;
    let course = combine_range(CriteriaField::Course, first.course(), second.course())?;
    let marks = combine_marks(first.marks(), second.marks())?;

    Ok(ClassCriteria::builder().fields(age, course, marks).build())
}

fn combine_range(
    field: CriteriaField,
    first: Option<&RangeCriteria>,
    second: Option<&RangeCriteria>,
) -> Result<Option<RangeCriteria>, IncompatibleCriteria> {
    match (first, second) {
        (Some(a), Some(b)) => a
            .intersect(b)
            .map(Some)
            .ok_or(IncompatibleCriteria::Disjoint(field)),
        (Some(a), None) => Ok(Some(*a)),
        (None, Some(b)) => Ok(Some(*b)),
        (None, None) => Ok(None),
    }
}

fn combine_marks(
    first: Option<&MarksCriteria>,
    second: Option<&MarksCriteria>,
) -> Result<Option<MarksCriteria>, IncompatibleCriteria> {
    match (first, second) {
        (Some(a), Some(b)) => {
            let subjects = combine_range_maps(a.subjects(), b.subjects(), CriteriaField::Subject)?;
            let group_operations = combine_range_maps(
                a.group_operations(),
                b.group_operations(),
                CriteriaField::GroupOperation,
            )?;
            Ok(Some(MarksCriteria::new(subjects, group_operations)))
        }
        (Some(a), None) => Ok(Some(a.clone())),
        (None, Some(b)) => Ok(Some(b.clone())),
        (None, None) => Ok(None),
    }
}

// Key-wise union; shared keys are intersected. The larger map is the base
// the smaller one is folded into.
fn combine_range_maps(
    first: &BTreeMap<String, RangeCriteria>,
    second: &BTreeMap<String, RangeCriteria>,
    field: fn(String) -> CriteriaField,
) -> Result<BTreeMap<String, RangeCriteria>, IncompatibleCriteria> {
    let (base, folded) = if first.len() >= second.len() {
        (first, second)
    } else {
        (second, first)
    };

    let mut result = base.clone();
    for (key, range) in folded {
        let merged = match result.get(key) {
            Some(existing) => existing
                .intersect(range)
                .ok_or_else(|| IncompatibleCriteria::Disjoint(field(key.clone())))?,
            None => *range,
        };
        result.insert(key.clone(), merged);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> RangeCriteria {
        RangeCriteria::new(min, max).unwrap()
    }

    #[test]
    fn test_overlapping_age() {
        let a = ClassCriteria::builder().age(range(10.0, 20.0)).build();
        let b = ClassCriteria::builder().age(range(15.0, 25.0)).build();

        let merged = combine(&a, &b).unwrap();
        assert_eq!(merged.age(), Some(&range(15.0, 20.0)));
        assert!(merged.course().is_none());
        assert!(merged.marks().is_none());
    }

    #[test]
    fn test_disjoint_age() {
        let a = ClassCriteria::builder().age(range(10.0, 20.0)).build();
        let b = ClassCriteria::builder().age(range(30.0, 40.0)).build();

        assert_eq!(
            combine(&a, &b),
            Err(IncompatibleCriteria::Disjoint(CriteriaField::Age))
        );
    }

    #[test]
    fn test_disjoint_course_after_compatible_age() {
        let a = ClassCriteria::builder()
            .age(range(17.0, 21.0))
            .course(range(1.0, 2.0))
            .build();
        let b = ClassCriteria::builder()
            .age(range(18.0, 30.0))
            .course(range(4.0, 5.0))
            .build();

        assert_eq!(
            combine(&a, &b),
            Err(IncompatibleCriteria::Disjoint(CriteriaField::Course))
        );
    }

    #[test]
    fn test_one_sided_fields_pass_through() {
        let a = ClassCriteria::builder().age(range(17.0, 21.0)).build();
        let b = ClassCriteria::builder()
            .course(range(3.0, 4.0))
            .marks(MarksCriteria::builder().subject("math", range(7.0, 10.0)).build())
            .build();

        let merged = combine(&a, &b).unwrap();
        assert_eq!(merged.age(), Some(&range(17.0, 21.0)));
        assert_eq!(merged.course(), Some(&range(3.0, 4.0)));
        assert_eq!(merged.marks(), b.marks());
    }

    #[test]
    fn test_unconstrained_classes_merge() {
        let merged = combine(&ClassCriteria::default(), &ClassCriteria::default()).unwrap();
        assert!(merged.is_unconstrained());
    }

    #[test]
    fn test_marks_union_and_intersection() {
        let a = ClassCriteria::builder()
            .marks(
                MarksCriteria::builder()
                    .subject("math", range(6.0, 10.0))
                    .subject("physics", range(5.0, 9.0))
                    .group_operation("average", range(7.0, 10.0))
                    .build(),
            )
            .build();
        let b = ClassCriteria::builder()
            .marks(
                MarksCriteria::builder()
                    .subject("math", range(8.0, 10.0))
                    .group_operation("min", range(4.0, 10.0))
                    .build(),
            )
            .build();

        let merged = combine(&a, &b).unwrap();
        let marks = merged.marks().unwrap();
        assert_eq!(marks.subject("math"), Some(&range(8.0, 10.0)));
        assert_eq!(marks.subject("physics"), Some(&range(5.0, 9.0)));
        assert_eq!(marks.group_operation("average"), Some(&range(7.0, 10.0)));
        assert_eq!(marks.group_operation("min"), Some(&range(4.0, 10.0)));
    }

    #[test]
    fn test_disjoint_subject_marks() {
        let a = ClassCriteria::builder()
            .marks(MarksCriteria::builder().subject("math", range(9.0, 10.0)).build())
            .build();
        let b = ClassCriteria::builder()
            .marks(MarksCriteria::builder().subject("math", range(2.0, 5.0)).build())
            .build();

        assert_eq!(
            combine(&a, &b),
            Err(IncompatibleCriteria::Disjoint(CriteriaField::Subject(
                "math".to_string()
            )))
        );
    }

    #[test]
    fn test_disjoint_group_operation() {
        let a = ClassCriteria::builder()
            .marks(MarksCriteria::builder().group_operation("average", range(9.0, 10.0)).build())
            .build();
        let b = ClassCriteria::builder()
            .marks(MarksCriteria::builder().group_operation("average", range(3.0, 6.0)).build())
            .build();

        assert_eq!(
            combine(&a, &b),
            Err(IncompatibleCriteria::Disjoint(CriteriaField::GroupOperation(
                "average".to_string()
            )))
        );
    }

    #[test]
    fn test_combine_is_symmetric() {
        let a = ClassCriteria::builder()
            .age(range(17.0, 21.0))
            .marks(MarksCriteria::builder().subject("math", range(6.0, 10.0)).build())
            .build();
        let b = ClassCriteria::builder()
            .age(range(20.0, 25.0))
            .course(range(2.0, 4.0))
            .marks(
                MarksCriteria::builder()
                    .subject("math", range(7.0, 9.0))
                    .subject("history", range(5.0, 10.0))
                    .build(),
            )
            .build();

        assert_eq!(combine(&a, &b), combine(&b, &a));
    }
}
