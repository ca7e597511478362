//! Config Validation Tests
//!
//! Typo detection and range validation for `AnalysisConfig`, exercised
//! independently from the tortuosity engine.

use tortuosity_index::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use tortuosity_index::config::{AnalysisConfig, ConfigError};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_scaling_key_warns_with_suggestion() {
    let toml_str = r#"
[scaling]
dense_coeficient = 0.02
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("dense_coeficient"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("scaling.dense_coefficient")
    );
}

#[test]
fn typo_in_survey_section_warns() {
    let toml_str = r#"
[survey]
naem = "Pad C 4H"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("survey.name"));
    assert!(warnings[0].to_string().contains("did you mean 'survey.name'"));
}

#[test]
fn typo_does_not_prevent_loading() {
    let config = AnalysisConfig::from_toml_str(
        r#"
[survey]
name = "Pad C 4H"
naem = "typo"
"#,
    )
    .expect("unknown keys are warnings only");
    assert_eq!(config.survey.name, "Pad C 4H");
}

#[test]
fn every_known_key_is_accepted_by_serde() {
    let config = AnalysisConfig::default();
    let text = config.to_toml().expect("serialize defaults");
    assert!(validate_unknown_keys(&text).is_empty());

    // Every leaf the serializer writes must be listed as known
    let known = known_config_keys();
    for line in text.lines().filter(|l| l.contains('=')) {
        let key = line.split('=').next().unwrap_or_default().trim();
        assert!(
            known.iter().any(|k| k.ends_with(&format!(".{key}"))),
            "Serialized key '{key}' missing from known_config_keys()"
        );
    }
}

#[test]
fn garbage_key_gets_no_suggestion() {
    let known = known_config_keys();
    assert!(suggest_correction("zzzzzzzzzzzzzzzz", &known).is_none());
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn zero_base_is_rejected() {
    let err = AnalysisConfig::from_toml_str("[scaling]\nbase = 0.0\n").unwrap_err();
    match err {
        ConfigError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("scaling.base")));
        }
        other => panic!("Expected validation error, got {other}"),
    }
}

#[test]
fn negative_chord_threshold_is_rejected() {
    let err =
        AnalysisConfig::from_toml_str("[analysis]\nmin_chord_length_ft = -1.0\n").unwrap_err();
    assert!(err.to_string().contains("min_chord_length_ft"));
}

#[test]
fn unusual_reference_spacing_only_warns() {
    let mut config = AnalysisConfig::default();
    config.scaling.reference_spacing_ft = 500.0;
    let (errors, warnings) = validate_physical_ranges(&config);
    assert!(errors.is_empty());
    assert!(warnings.iter().any(|w| w.field == "scaling.reference_spacing_ft"));
    assert!(config.validate().is_ok());
}

#[test]
fn malformed_toml_is_parse_error() {
    let result = AnalysisConfig::from_toml_str("[scaling\nbase = ");
    assert!(matches!(result, Err(ConfigError::Parse(_, _))));
}

#[test]
fn wrong_value_type_is_parse_error() {
    let result =
        AnalysisConfig::from_toml_str("[analysis]\napply_frequency_correction = \"yes\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_, _))));
}
