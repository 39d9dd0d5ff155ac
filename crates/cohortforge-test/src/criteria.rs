//! Criteria map helpers.

use cohortforge_core::CriteriaMap;

/// Builds a criteria map from `(class, count)` pairs.
///
/// # Example
///
/// ```
/// use cohortforge_test::criteria_map;
///
/// let map = criteria_map(&[("S", 10), ("A", 3)]);
/// assert_eq!(map["S"], 10);
/// assert_eq!(map.len(), 2);
/// ```
pub fn criteria_map(entries: &[(&str, u32)]) -> CriteriaMap {
    entries
        .iter()
        .map(|&(class, count)| (class.to_string(), count))
        .collect()
}
