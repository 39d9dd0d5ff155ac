//! Validation of class counts against the declared total.

use cohortforge_core::{CriteriaMap, GenerationClass};
use tracing::debug;

use crate::error::AnalyserError;
use crate::parser;
use crate::registry::ClassCriteriaRegistry;
use crate::search;

/// Validates an optional parsed map.
///
/// `None` passes through as `Ok(None)`.
pub fn validate(
    parsed: Option<CriteriaMap>,
    registry: &ClassCriteriaRegistry,
) -> Result<Option<CriteriaMap>, AnalyserError> {
    parsed.map(|criteria| validate_map(criteria, registry)).transpose()
}

/// Checks that the class counts fit in the declared total.
///
/// A map that fits is returned with a `rand` entry holding the unassigned
/// remainder. A map that does not fit goes through one pass of the
/// combination search and is checked again; if it still does not fit the
/// result is [`AnalyserError::CriteriaConflict`].
///
/// A map without an `S` entry has no total to check against and is returned
/// unchanged, without a `rand` entry.
pub fn validate_map(
    criteria: CriteriaMap,
    registry: &ClassCriteriaRegistry,
) -> Result<CriteriaMap, AnalyserError> {
    match remainder(&criteria) {
        None => {
            debug!(event = "criteria_accepted", total = "none");
            Ok(criteria)
        }
        Some(rand) if rand >= 0 => {
            debug!(event = "criteria_accepted", rand);
            Ok(with_rand(criteria, rand))
        }
        Some(_) => {
            debug!(event = "combine_start", classes = criteria.len());
            let combined = search::combine(&criteria, registry);

            match remainder(&combined) {
                Some(rand) if rand >= 0 => {
                    if let Some(line) = parser::serialize(&combined) {
                        debug!(event = "result_line", line = %line);
                    }
                    Ok(with_rand(combined, rand))
                }
                _ => Err(AnalyserError::conflict()),
            }
        }
    }
}

/// Total minus the sum of every other entry, or `None` without a total.
pub fn remainder(criteria: &CriteriaMap) -> Option<i64> {
    let total = *criteria.get(GenerationClass::TOTAL_KEY)?;
    let sum: u64 = criteria
        .iter()
        .filter(|(key, _)| key.as_str() != GenerationClass::TOTAL_KEY)
        .map(|(_, &count)| u64::from(count))
        .sum();
    Some(i64::from(total) - sum as i64)
}

fn with_rand(mut criteria: CriteriaMap, rand: i64) -> CriteriaMap {
    // rand never exceeds the u32 total
    let rand = u32::try_from(rand).unwrap_or(u32::MAX);
    criteria.insert(GenerationClass::RAND_KEY.to_string(), rand);
    criteria
}
