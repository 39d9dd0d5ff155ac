//! Combination search over conflicting class counts.
//!
//! When the requested class counts exceed the declared total, classes whose
//! definitions overlap can be served by the same students. The search walks
//! the requested classes in key order and merges each one with the first
//! compatible partner it finds (first-fit, not an optimal matching). The
//! smaller count is absorbed into the composite class; any excess stays on
//! the original class.
//!
//! Logging levels:
//! - **DEBUG**: each attempt and each successful merge
//! - **WARN**: candidate pairs that cannot be merged

use cohortforge_core::{ClassCriteria, CriteriaMap, GenerationClass};
use tracing::{debug, warn};

use crate::combiner;
use crate::error::IncompatibleCriteria;
use crate::registry::ClassCriteriaRegistry;

/// Runs one pass of the combination search.
///
/// Every original class except `S` is visited once, in key order, provided
/// an earlier merge has not already absorbed it. Its merge partner is the
/// first current entry (composites included) that is not `S`, does not
/// contain the visited class name, and whose definition can be combined with
/// it. Successful merges are registered under `visited + partner`; a pair
/// whose merged name is already a canonical class is skipped.
///
/// The returned map may still exceed the total; the caller re-checks it.
pub fn combine(criteria: &CriteriaMap, registry: &ClassCriteriaRegistry) -> CriteriaMap {
    let mut result = criteria.clone();

    for key_a in criteria.keys() {
        if key_a == GenerationClass::TOTAL_KEY {
            continue;
        }
        let Some(&count_a) = result.get(key_a) else {
            continue;
        };

        let Some((key_b, count_b, composite, merged)) = find_partner(key_a, &result, registry)
        else {
            continue;
        };

        let merged = registry.put_combined(composite.clone(), merged);
        reconcile(&mut result, key_a, count_a, &key_b, count_b, composite.clone());

        debug!(event = "criteria_combined", class = %composite, criteria = %merged);
    }

    result
}

fn find_partner(
    key_a: &str,
    current: &CriteriaMap,
    registry: &ClassCriteriaRegistry,
) -> Option<(String, u32, String, ClassCriteria)> {
    let Some(first) = registry.get(key_a) else {
        let reason = IncompatibleCriteria::UnknownClass(key_a.to_string());
        warn!(event = "combine_skipped", first = key_a, code = %reason.code(), reason = %reason);
        return None;
    };

    for (key_b, &count_b) in current {
        if key_b == GenerationClass::TOTAL_KEY || key_b.contains(key_a) {
            continue;
        }

        debug!(event = "combine_attempt", first = key_a, second = %key_b);
        let composite = GenerationClass::composite(key_a, key_b).key().to_string();
        let outcome = if registry.is_canonical(&composite) {
            Err(IncompatibleCriteria::CanonicalName(composite.clone()))
        } else {
            registry
                .get(key_b)
                .ok_or_else(|| IncompatibleCriteria::UnknownClass(key_b.clone()))
                .and_then(|second| combiner::combine(&first, &second))
        };

        match outcome {
            Ok(merged) => return Some((key_b.clone(), count_b, composite, merged)),
            Err(reason) => {
                warn!(
                    event = "combine_skipped",
                    first = key_a,
                    second = %key_b,
                    code = %reason.code(),
                    reason = %reason,
                );
            }
        }
    }

    None
}

// The smaller count moves to the composite, replacing any count already
// held under that name; the difference stays on the class that asked for more.
fn reconcile(
    result: &mut CriteriaMap,
    key_a: &str,
    count_a: u32,
    key_b: &str,
    count_b: u32,
    composite: String,
) {
    let absorbed = count_a.min(count_b);

    if count_a > count_b {
        result.insert(key_a.to_string(), count_a - count_b);
        result.remove(key_b);
    } else if count_a < count_b {
        result.insert(key_b.to_string(), count_b - count_a);
        result.remove(key_a);
    } else {
        result.remove(key_a);
        result.remove(key_b);
    }

    result.insert(composite, absorbed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohortforge_core::RangeCriteria;
    use cohortforge_test::{criteria_map, university_classes};

    fn aged(min: f64, max: f64) -> ClassCriteria {
        ClassCriteria::builder()
            .age(RangeCriteria::new(min, max).unwrap())
            .build()
    }

    fn university() -> ClassCriteriaRegistry {
        ClassCriteriaRegistry::from_classes(university_classes())
    }

    #[test]
    fn test_excess_stays_on_first_class() {
        let registry = university();
        let result = combine(&criteria_map(&[("A", 5), ("B", 3)]), &registry);

        assert_eq!(result, criteria_map(&[("AB", 3), ("A", 2)]));
        assert!(registry.contains("AB"));
    }

    #[test]
    fn test_excess_stays_on_second_class() {
        let registry = university();
        let result = combine(&criteria_map(&[("S", 5), ("A", 3), ("B", 4)]), &registry);

        assert_eq!(result, criteria_map(&[("S", 5), ("AB", 3), ("B", 1)]));
    }

    #[test]
    fn test_equal_counts_merge_completely() {
        let registry = university();
        let result = combine(&criteria_map(&[("S", 3), ("A", 2), ("B", 2)]), &registry);

        assert_eq!(result, criteria_map(&[("S", 3), ("AB", 2)]));
    }

    #[test]
    fn test_incompatible_classes_are_left_alone() {
        let registry = university();
        let input = criteria_map(&[("S", 5), ("A", 3), ("C", 4)]);

        assert_eq!(combine(&input, &registry), input);
        assert_eq!(registry.composite_len(), 0);
    }

    #[test]
    fn test_first_fit_skips_incompatible_candidates() {
        // C conflicts with D on age, so C pairs with F.
        let registry = university();
        let result = combine(&criteria_map(&[("S", 5), ("C", 2), ("D", 3), ("F", 2)]), &registry);

        assert_eq!(result, criteria_map(&[("S", 5), ("CF", 2), ("D", 3)]));
        assert_eq!(registry.composite_names(), vec!["CF".to_string()]);
    }

    #[test]
    fn test_composite_can_be_a_later_partner() {
        let registry = university();
        let result = combine(&criteria_map(&[("S", 3), ("A", 2), ("B", 2), ("E", 2)]), &registry);

        assert_eq!(result, criteria_map(&[("S", 3), ("EAB", 2)]));
        assert_eq!(
            registry.composite_names(),
            vec!["AB".to_string(), "EAB".to_string()]
        );
        let eab = registry.get("EAB").unwrap();
        assert_eq!(eab.age(), Some(&RangeCriteria::new(20.0, 21.0).unwrap()));
        assert_eq!(eab.course(), Some(&RangeCriteria::new(2.0, 2.0).unwrap()));
    }

    #[test]
    fn test_composite_containing_class_is_skipped() {
        let registry = university();
        // After A+B -> AB (with B left over), B must not merge into AB.
        let result = combine(&criteria_map(&[("A", 1), ("B", 4)]), &registry);

        assert_eq!(result, criteria_map(&[("AB", 1), ("B", 3)]));
        assert!(!registry.contains("BAB"));
    }

    #[test]
    fn test_unknown_class_is_not_merged() {
        let registry = ClassCriteriaRegistry::new().with_class("A", aged(10.0, 20.0));
        let input = criteria_map(&[("S", 2), ("A", 2), ("Q", 2)]);

        assert_eq!(combine(&input, &registry), input);
    }

    #[test]
    fn test_merged_definition_is_registered() {
        let registry = ClassCriteriaRegistry::new()
            .with_class("A", aged(10.0, 20.0))
            .with_class("B", aged(15.0, 25.0));

        combine(&criteria_map(&[("A", 1), ("B", 1)]), &registry);

        assert_eq!(*registry.get("AB").unwrap(), aged(15.0, 20.0));
        assert_eq!(*registry.get("AB").unwrap(), aged(15.0, 20.0));
    }

    #[test]
    fn test_canonical_composite_name_is_not_reused() {
        let registry = ClassCriteriaRegistry::new()
            .with_class("A", aged(10.0, 20.0))
            .with_class("B", aged(15.0, 25.0))
            .with_class("AB", aged(40.0, 50.0));
        let result = combine(&criteria_map(&[("S", 3), ("A", 2), ("B", 2)]), &registry);

        // A cannot become AB, so B later takes A under BA.
        assert_eq!(result, criteria_map(&[("S", 3), ("BA", 2)]));
        assert_eq!(*registry.get("AB").unwrap(), aged(40.0, 50.0));
        assert_eq!(*registry.get("BA").unwrap(), aged(15.0, 20.0));
        assert_eq!(registry.composite_names(), vec!["BA".to_string()]);
    }

    #[test]
    fn test_canonical_composite_name_moves_to_next_partner() {
        let registry = ClassCriteriaRegistry::new()
            .with_class("A", aged(10.0, 20.0))
            .with_class("B", aged(15.0, 25.0))
            .with_class("C", aged(10.0, 12.0))
            .with_class("AB", aged(40.0, 50.0));
        let result = combine(&criteria_map(&[("S", 3), ("A", 2), ("B", 2), ("C", 2)]), &registry);

        assert_eq!(result, criteria_map(&[("S", 3), ("AC", 2), ("B", 2)]));
        assert_eq!(*registry.get("AC").unwrap(), aged(10.0, 12.0));
    }

    #[test]
    fn test_existing_composite_count_is_replaced() {
        let registry = ClassCriteriaRegistry::new()
            .with_class("A", aged(10.0, 20.0))
            .with_class("B", aged(15.0, 25.0));
        let result = combine(
            &criteria_map(&[("S", 3), ("A", 2), ("B", 2), ("AB", u32::MAX)]),
            &registry,
        );

        assert_eq!(result, criteria_map(&[("S", 3), ("AB", 2)]));
    }

    #[test]
    fn test_total_is_never_merged() {
        let registry = ClassCriteriaRegistry::new()
            .with_class("S", aged(0.0, 100.0))
            .with_class("A", aged(10.0, 20.0));
        let input = criteria_map(&[("S", 4), ("A", 9)]);

        assert_eq!(combine(&input, &registry), input);
        assert_eq!(registry.composite_len(), 0);
    }
}
