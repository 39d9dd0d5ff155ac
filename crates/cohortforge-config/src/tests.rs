//! Tests for registry configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [classes.A]
        age = { min = 17.0, max = 21.0 }
        course = { min = 1.0, max = 2.0 }

        [classes.A.marks.subjects]
        math = { min = 7.0, max = 10.0 }

        [classes.A.marks.group_operations]
        average = { min = 8.0, max = 10.0 }

        [classes.B]
        course = { min = 3.0, max = 5.0 }
    "#;

    let config = RegistryConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.classes.len(), 2);

    let a = &config.classes["A"];
    assert_eq!(a.age, Some(RangeConfig { min: 17.0, max: 21.0 }));
    let marks = a.marks.as_ref().unwrap();
    assert_eq!(marks.subjects["math"].min, 7.0);
    assert_eq!(marks.group_operations["average"].max, 10.0);

    let b = &config.classes["B"];
    assert!(b.age.is_none());
    assert!(b.marks.is_none());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        classes:
          A:
            age: { min: 17.0, max: 21.0 }
          C:
            marks:
              subjects:
                physics: { min: 5.0, max: 9.0 }
    "#;

    let config = RegistryConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.classes.len(), 2);
    let classes = config.into_class_criteria().unwrap();
    assert_eq!(
        classes["C"]
            .marks()
            .and_then(|m| m.subject("physics"))
            .map(|r| r.max()),
        Some(9.0)
    );
}

#[test]
fn test_builder() {
    let config = RegistryConfig::new()
        .with_class("A", ClassConfig::new().with_age(17.0, 21.0))
        .with_class(
            "B",
            ClassConfig::new()
                .with_course(1.0, 1.0)
                .with_subject("math", 9.0, 10.0)
                .with_group_operation("average", 8.5, 10.0),
        );

    let classes = config.into_class_criteria().unwrap();
    assert_eq!(classes.len(), 2);
    let marks = classes["B"].marks().unwrap();
    assert_eq!(marks.subjects().len(), 1);
    assert_eq!(marks.group_operations().len(), 1);
}

#[test]
fn test_empty_config() {
    let config = RegistryConfig::from_toml_str("").unwrap();
    assert!(config.classes.is_empty());
    assert!(config.into_class_criteria().unwrap().is_empty());
}

#[test]
fn test_inverted_range_is_invalid() {
    let config = RegistryConfig::new().with_class("A", ClassConfig::new().with_age(30.0, 20.0));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_reserved_names_are_invalid() {
    for name in ["S", "s", "RAND", "rand", ""] {
        let config = RegistryConfig::new().with_class(name, ClassConfig::new());
        assert!(
            matches!(config.validate(), Err(ConfigError::Invalid(_))),
            "{:?} should be rejected",
            name
        );
    }
}

#[test]
fn test_lowercase_total_is_reserved() {
    let config = RegistryConfig::new().with_class("s", ClassConfig::new().with_age(1.0, 2.0));
    match config.validate() {
        Err(ConfigError::Invalid(message)) => assert_eq!(message, "Invalid class name: \"s\""),
        other => panic!("expected invalid class name, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let result = RegistryConfig::load("/nonexistent/cohort.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_toml() {
    let result = RegistryConfig::from_toml_str("[classes.A\nage = 3");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}
