//! API credential resolution.
//!
//! The credential is read once at startup. A missing or blank value is a
//! fatal configuration error; no request is attempted without one.

use convo_common::ConfigError;

/// Read the API key from the environment variable named `var`.
pub fn resolve_api_key(var: &str) -> Result<String, ConfigError> {
    resolve_api_key_with(var, |name| std::env::var(name).ok())
}

/// Same as [`resolve_api_key`] with a pluggable variable lookup.
pub fn resolve_api_key_with(
    var: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingCredential(var.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_key_is_returned_trimmed() {
        let key = resolve_api_key_with("OPENAI_API_KEY", |_| Some(" sk-test \n".into())).unwrap();
        assert_eq!(key, "sk-test");
    }

    #[test]
    fn missing_key_is_missing_credential() {
        let err = resolve_api_key_with("OPENAI_API_KEY", |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref v) if v == "OPENAI_API_KEY"));
    }

    #[test]
    fn blank_key_is_missing_credential() {
        let err = resolve_api_key_with("MY_KEY", |_| Some("   ".into())).unwrap_err();
        assert!(err.to_string().contains("MY_KEY"));
    }

    #[test]
    fn lookup_uses_configured_variable_name() {
        let key = resolve_api_key_with("CUSTOM_VAR", |name| {
            (name == "CUSTOM_VAR").then(|| "abc".to_string())
        })
        .unwrap();
        assert_eq!(key, "abc");
    }
}
