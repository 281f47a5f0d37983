//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ConvoConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_too_high() {
    let mut config = ConvoConfig::default();
    config.completion.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.temperature"));
}

#[test]
fn catches_negative_temperature() {
    let mut config = ConvoConfig::default();
    config.completion.temperature = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = ConvoConfig::default();
    config.completion.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn temperature_bounds_are_inclusive() {
    let mut config = ConvoConfig::default();
    config.completion.temperature = 0.0;
    assert!(validate(&config).is_ok());
    config.completion.temperature = 2.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_timeout() {
    let mut config = ConvoConfig::default();
    config.transcription.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("transcription.timeout_secs"));
}

#[test]
fn catches_empty_model() {
    let mut config = ConvoConfig::default();
    config.completion.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.model must not be empty"));
}

#[test]
fn catches_bad_api_base() {
    let mut config = ConvoConfig::default();
    config.completion.api_base = "api.openai.com/v1".into();
    config.transcription.api_base = Some("ftp://example.com".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.api_base"));
    assert!(err.contains("transcription.api_base"));
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = ConvoConfig::default();
    config.completion.max_tokens = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.max_tokens"));
}

#[test]
fn catches_unknown_log_level() {
    let mut config = ConvoConfig::default();
    config.logging.level = "verbose".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = ConvoConfig::default();
    config.logging.level = "DEBUG".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = ConvoConfig::default();
    config.completion.temperature = 9.0;
    config.completion.timeout_secs = 0;
    config.auth.api_key_env = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.temperature"));
    assert!(err.contains("completion.timeout_secs"));
    assert!(err.contains("auth.api_key_env"));
    assert_eq!(err.matches(';').count(), 2);
}
