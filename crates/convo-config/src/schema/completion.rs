//! Completion backend configuration types.

use serde::{Deserialize, Serialize};

/// Chat completion backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub model: String,
    /// Sampling temperature, 0.0-2.0.
    pub temperature: f64,
    pub max_tokens: Option<u32>,
    pub system_prompt: Option<String>,
    pub api_base: String,
    pub timeout_secs: u64,
    /// Print reply fragments as they arrive.
    pub stream: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            temperature: 0.7,
            max_tokens: None,
            system_prompt: None,
            api_base: "https://api.openai.com/v1".into(),
            timeout_secs: 120,
            stream: true,
        }
    }
}
