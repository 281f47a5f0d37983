//! convo configuration system.
//!
//! TOML-based configuration with validation and credential lookup. All
//! config sections use defaults so partial configs work out of the box.

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::resolve_api_key;
pub use schema::{CompletionErrorPolicy, ConvoConfig};

use convo_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default
/// location.
///
/// The result is not validated here: callers apply command-line overrides
/// first and then run [`validation::validate`] once on the final values.
pub fn load_config(path: Option<&Path>) -> Result<ConvoConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_leaves_validation_to_the_caller() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[completion]\ntemperature = 3.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!((config.completion.temperature - 3.0).abs() < f64::EPSILON);
        assert!(matches!(
            validation::validate(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[completion]\nstream = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.completion.stream);
    }

    #[test]
    fn load_config_missing_explicit_path_is_not_found() {
        let err = load_config(Some(Path::new("/tmp/convo_missing_cfg.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
