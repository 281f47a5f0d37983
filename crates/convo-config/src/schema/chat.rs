//! Chat surface behavior.

use serde::{Deserialize, Serialize};

/// What happens to the user's turn when the completion call fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompletionErrorPolicy {
    /// Leave the unanswered user turn in the history.
    #[default]
    Keep,
    /// Remove the unanswered user turn.
    Rollback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub on_completion_error: CompletionErrorPolicy,
    /// Default target of `/download`.
    pub download_path: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            on_completion_error: CompletionErrorPolicy::Keep,
            download_path: "conversation.md".into(),
        }
    }
}
