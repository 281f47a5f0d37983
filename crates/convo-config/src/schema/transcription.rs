//! Speech-to-text backend configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    pub model: String,
    /// ISO-639-1 hint passed to the backend; autodetect when unset.
    pub language: Option<String>,
    /// Falls back to `completion.api_base` when unset.
    pub api_base: Option<String>,
    pub timeout_secs: u64,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            model: "whisper-1".into(),
            language: None,
            api_base: None,
            timeout_secs: 300,
        }
    }
}
