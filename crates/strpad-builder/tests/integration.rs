use std::fmt::Write;
use strpad_builder::{BuilderConfig, BuilderError, StringBuilder};

#[test]
fn test_default_growth_sequence() {
    let mut sb = StringBuilder::default();
    let mut seen = vec![sb.capacity()];
    for _ in 0..60 {
        sb.push('x');
        if *seen.last().unwrap() != sb.capacity() {
            seen.push(sb.capacity());
        }
    }
    assert_eq!(seen, vec![15, 23, 35, 53, 80]);
    assert_eq!(sb.len(), 60);
}

#[test]
fn test_config_from_json_drives_builder() {
    let config: BuilderConfig =
        serde_json::from_str(r#"{ "initial_capacity": 2, "growth_factor": 2.0 }"#).unwrap();
    let mut sb = StringBuilder::from_config(&config).unwrap();
    sb.push_str("abcde");
    assert_eq!(sb.capacity(), 8);
    assert_eq!(sb.finish(), "abcde");
}

#[test]
fn test_invalid_config_from_json() {
    let config: BuilderConfig = serde_json::from_str(r#"{ "growth_factor": 0.9 }"#).unwrap();
    assert_eq!(
        StringBuilder::from_config(&config).unwrap_err(),
        BuilderError::InvalidGrowthFactor(0.9)
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BuilderError::InvalidGrowthFactor(1.0).to_string(),
        "invalid growth factor 1: must be finite and greater than 1.0"
    );
    assert_eq!(
        BuilderError::InteriorNul(3).to_string(),
        "content has an interior nul byte at position 3"
    );
}

#[test]
fn test_formatted_table_row() {
    let mut sb = StringBuilder::new(4, 1.5).unwrap();
    for (name, qty) in [("apple", 3), ("kiwi", 12)] {
        write!(sb, "{name}:{qty};").unwrap();
    }
    assert_eq!(sb.finish(), "apple:3;kiwi:12;");
}

#[test]
fn test_dropped_builder_does_not_affect_others() {
    let mut kept = StringBuilder::default();
    {
        let mut dropped = StringBuilder::default();
        dropped.push_str("discarded");
    }
    kept.push_str("kept");
    assert_eq!(kept.finish(), "kept");
}
