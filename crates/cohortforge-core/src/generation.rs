//! Generation class tokens and the per-request count map.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CriteriaError, Result};

/// Mapping from class-name token to requested student count.
///
/// Ordered by key so that every traversal (and therefore the first-fit
/// combination search) is deterministic.
pub type CriteriaMap = BTreeMap<String, u32>;

/// A population segment token.
///
/// `S` and `Rand` are reserved; every other token is a free-form class name,
/// either a single letter from the input or a composite synthesized by
/// merging two classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GenerationClass {
    /// Total student count.
    S,
    /// Unassigned remainder.
    Rand,
    /// Any other class name.
    Named(String),
}

impl GenerationClass {
    /// Key of the total count entry.
    pub const TOTAL_KEY: &'static str = "S";

    /// Key of the remainder entry in validated maps.
    pub const RAND_KEY: &'static str = "rand";

    /// Classifies a map key.
    ///
    /// # Example
    ///
    /// ```
    /// use cohortforge_core::GenerationClass;
    ///
    /// assert_eq!(GenerationClass::from_key("S"), GenerationClass::S);
    /// assert_eq!(GenerationClass::from_key("rand"), GenerationClass::Rand);
    /// assert_eq!(GenerationClass::from_key("AB"), GenerationClass::Named("AB".into()));
    /// ```
    pub fn from_key(key: &str) -> Self {
        if key == Self::TOTAL_KEY {
            GenerationClass::S
        } else if key.eq_ignore_ascii_case("rand") {
            GenerationClass::Rand
        } else {
            GenerationClass::Named(key.to_string())
        }
    }

    /// Returns the map key for this class.
    pub fn key(&self) -> &str {
        match self {
            GenerationClass::S => Self::TOTAL_KEY,
            GenerationClass::Rand => Self::RAND_KEY,
            GenerationClass::Named(name) => name,
        }
    }

    /// Returns true for `S` and `RAND`.
    pub fn is_reserved(&self) -> bool {
        !matches!(self, GenerationClass::Named(_))
    }

    /// Checks a name for use as a canonical class.
    ///
    /// Rejects empty names and the reserved `S` and `RAND` tokens in any
    /// letter case.
    ///
    /// # Example
    ///
    /// ```
    /// use cohortforge_core::GenerationClass;
    ///
    /// assert!(GenerationClass::check_class_name("A").is_ok());
    /// assert!(GenerationClass::check_class_name("s").is_err());
    /// ```
    pub fn check_class_name(name: &str) -> Result<()> {
        if name.is_empty()
            || name.eq_ignore_ascii_case(Self::TOTAL_KEY)
            || name.eq_ignore_ascii_case(Self::RAND_KEY)
        {
            return Err(CriteriaError::InvalidClassName(name.to_string()));
        }
        Ok(())
    }

    /// Builds the composite token for two merged classes, `first` then `second`.
    pub fn composite(first: &str, second: &str) -> Self {
        let mut name = String::with_capacity(first.len() + second.len());
        name.push_str(first);
        name.push_str(second);
        GenerationClass::Named(name)
    }
}

impl fmt::Display for GenerationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for GenerationClass {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}
