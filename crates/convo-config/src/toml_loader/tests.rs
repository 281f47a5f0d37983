//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_convo_config.toml"));
    assert!(matches!(
        result,
        Err(convo_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[completion]
model = "gpt-4o"
temperature = 0.2

[transcription]
language = "de"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.completion.model, "gpt-4o");
    assert!((config.completion.temperature - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.transcription.language.as_deref(), Some("de"));
    // Defaults preserved
    assert_eq!(config.transcription.model, "whisper-1");
    assert_eq!(config.chat.download_path, "conversation.md");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(convo_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[completion]
temperature = 5.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.completion.temperature - 5.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("convo").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.completion.model, "gpt-4o-mini");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ConvoConfig;

    let config: ConvoConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.completion.model, "gpt-4o-mini");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("convo"));
        assert!(path_str.ends_with("config.toml"));
    }
}
