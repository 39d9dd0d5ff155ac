//! University class fixtures.
//!
//! Six canonical classes with a known compatibility matrix:
//!
//! | Class | Age        | Course  | Marks               |
//! |-------|------------|---------|---------------------|
//! | A     | [17, 21]   | [1, 2]  | math [7, 10]        |
//! | B     | [20, 25]   | [2, 4]  | average [8, 10]     |
//! | C     | [30, 40]   |         |                     |
//! | D     | [10, 20]   |         |                     |
//! | E     | [15, 25]   |         |                     |
//! | F     |            | [5, 6]  |                     |
//!
//! Incompatible pairs: A-C, A-F, B-C, B-F, C-D, C-E (disjoint age or
//! course). Every other pair can be merged.

use std::collections::BTreeMap;

use cohortforge_config::{ClassConfig, RegistryConfig};
use cohortforge_core::ClassCriteria;

/// Registry configuration holding the six university classes.
pub fn university_config() -> RegistryConfig {
    RegistryConfig::new()
        .with_class(
            "A",
            ClassConfig::new()
                .with_age(17.0, 21.0)
                .with_course(1.0, 2.0)
                .with_subject("math", 7.0, 10.0),
        )
        .with_class(
            "B",
            ClassConfig::new()
                .with_age(20.0, 25.0)
                .with_course(2.0, 4.0)
                .with_group_operation("average", 8.0, 10.0),
        )
        .with_class("C", ClassConfig::new().with_age(30.0, 40.0))
        .with_class("D", ClassConfig::new().with_age(10.0, 20.0))
        .with_class("E", ClassConfig::new().with_age(15.0, 25.0))
        .with_class("F", ClassConfig::new().with_course(5.0, 6.0))
}

/// The university classes converted to core criteria.
pub fn university_classes() -> BTreeMap<String, ClassCriteria> {
    university_config()
        .into_class_criteria()
        .expect("university fixture is valid")
}
