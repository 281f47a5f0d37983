//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ConvoConfig;
use convo_common::ConfigError;

use helpers::{validate_non_empty, validate_range_f64, validate_range_u64, validate_url};

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ConvoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_completion(&mut errors, config);
    validate_transcription(&mut errors, config);
    validate_logging(&mut errors, config);
    validate_non_empty(&mut errors, "auth.api_key_env", &config.auth.api_key_env);
    validate_non_empty(&mut errors, "chat.download_path", &config.chat.download_path);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_completion(errors: &mut Vec<String>, config: &ConvoConfig) {
    let c = &config.completion;
    validate_non_empty(errors, "completion.model", &c.model);
    validate_range_f64(errors, "completion.temperature", c.temperature, 0.0, 2.0);
    validate_range_u64(errors, "completion.timeout_secs", c.timeout_secs, 1, 3600);
    validate_url(errors, "completion.api_base", &c.api_base);
    if c.max_tokens == Some(0) {
        errors.push("completion.max_tokens must be greater than 0".into());
    }
}

fn validate_transcription(errors: &mut Vec<String>, config: &ConvoConfig) {
    let t = &config.transcription;
    validate_non_empty(errors, "transcription.model", &t.model);
    validate_range_u64(errors, "transcription.timeout_secs", t.timeout_secs, 1, 3600);
    if let Some(ref base) = t.api_base {
        validate_url(errors, "transcription.api_base", base);
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &ConvoConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
