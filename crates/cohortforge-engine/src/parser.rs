//! Criteria line parsing and canonical serialization.
//!
//! A criteria line looks like `"10S - 3A2B1C"`: a *token* is one or more
//! ASCII digits followed by exactly one ASCII letter, and a *criteria run*
//! is a whitespace-padded sequence of tokens. Tokens of a run may be
//! separated by spaces and at most one `-` splitter. Only the first run in
//! the input is honored; the rest of the input is ignored.

use std::sync::OnceLock;

use cohortforge_core::{CriteriaMap, GenerationClass};
use regex::Regex;
use tracing::{debug, warn};

const RUN_PATTERN: &str = r"[ \t]*[0-9]+[A-Za-z](?:[ \t]*(?:-[ \t]*)?[0-9]+[A-Za-z])*[ \t]*";
const TOKEN_PATTERN: &str = r"([0-9]+)([A-Za-z])";

fn run_regex() -> &'static Regex {
    static RUN: OnceLock<Regex> = OnceLock::new();
    RUN.get_or_init(|| Regex::new(RUN_PATTERN).expect("criteria run pattern compiles"))
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("criteria token pattern compiles"))
}

/// Parses an optional criteria line.
///
/// Returns `None` only for `None` input; input without a criteria run
/// yields an empty map.
///
/// # Example
///
/// ```
/// use cohortforge_engine::parser::parse;
///
/// let parsed = parse(Some("10S - 3A2B1C")).unwrap();
/// assert_eq!(parsed["S"], 10);
/// assert_eq!(parsed["A"], 3);
/// assert_eq!(parsed.len(), 4);
///
/// assert!(parse(None).is_none());
/// assert!(parse(Some("no digits here")).unwrap().is_empty());
/// ```
pub fn parse(input: Option<&str>) -> Option<CriteriaMap> {
    input.map(parse_str)
}

/// Parses a criteria line into class counts.
///
/// Later tokens with the same letter overwrite earlier ones. Tokens whose
/// count does not fit in `u32` are dropped.
pub fn parse_str(input: &str) -> CriteriaMap {
    let mut result = CriteriaMap::new();

    let Some(run) = run_regex().find(input) else {
        return result;
    };

    for token in token_regex().captures_iter(run.as_str()) {
        let digits = &token[1];
        let class = &token[2];
        match digits.parse::<u32>() {
            Ok(count) => {
                result.insert(class.to_string(), count);
            }
            Err(e) => {
                warn!(event = "token_skipped", class, digits, error = %e);
            }
        }
    }

    debug!(event = "criteria_parsed", run = run.as_str().trim(), classes = result.len());
    result
}

/// Renders a criteria map in canonical form.
///
/// The total comes first as `<n>S`, followed by every other entry as
/// `<count><class>`, ordered by count descending then class name. Returns
/// `None` for an empty map; the total segment is omitted when absent.
///
/// # Example
///
/// ```
/// use cohortforge_engine::parser::{parse_str, serialize};
///
/// let parsed = parse_str("10S - 1C2B3A");
/// assert_eq!(serialize(&parsed).as_deref(), Some("10S3A2B1C"));
/// ```
pub fn serialize(criteria: &CriteriaMap) -> Option<String> {
    if criteria.is_empty() {
        return None;
    }

    let mut entries: Vec<(&String, &u32)> = criteria
        .iter()
        .filter(|(key, _)| key.as_str() != GenerationClass::TOTAL_KEY)
        .collect();
    entries.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));

    let mut line = String::new();
    if let Some(total) = criteria.get(GenerationClass::TOTAL_KEY) {
        line.push_str(&total.to_string());
        line.push_str(GenerationClass::TOTAL_KEY);
    }
    for (key, value) in entries {
        line.push_str(&value.to_string());
        line.push_str(key);
    }
    Some(line)
}
