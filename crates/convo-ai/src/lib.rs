//! Conversation engine for convo.
//!
//! Provides:
//! - the `Turn` / `Conversation` data model
//! - `CompletionClient` and `TranscriptionClient` seams with OpenAI-backed
//!   implementations (chat completions and Whisper)
//! - SSE parsing for streamed replies
//! - the `ConversationController` that drives one submission end to end
//! - token usage tracking

pub mod controller;
pub mod conversation;
pub(crate) mod http;
pub mod input;
pub mod openai;
pub mod streaming;
pub mod token_tracker;
pub mod whisper;

use async_trait::async_trait;

pub use controller::{ConversationController, FailurePolicy, SubmitError};
pub use conversation::Conversation;
pub use input::{AudioClip, AudioFormat, Input};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use token_tracker::TokenTracker;
pub use whisper::{WhisperClient, WhisperConfig};

/// Callback receiving reply fragments as they stream in.
pub type ChunkCallback = Box<dyn Fn(String) + Send + Sync>;

/// A backend that produces the next assistant reply for a conversation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Return the assistant reply to `turns`, which is the full history in
    /// chronological order.
    async fn complete(&self, turns: &[Turn]) -> Result<Completion, AiError>;

    /// Like [`complete`](Self::complete) but reports reply fragments to
    /// `on_chunk` as they arrive. The default emits the whole reply at once.
    async fn complete_streaming(
        &self,
        turns: &[Turn],
        on_chunk: ChunkCallback,
    ) -> Result<Completion, AiError> {
        let completion = self.complete(turns).await?;
        if !completion.content.is_empty() {
            on_chunk(completion.content.clone());
        }
        Ok(completion)
    }
}

/// A backend that turns recorded audio into text.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, AiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The reply produced by a [`CompletionClient`].
#[derive(Debug, Clone, Default)]
pub struct Completion {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Failure talking to a hosted backend.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

impl From<AiError> for convo_common::ConvoError {
    fn from(err: AiError) -> Self {
        convo_common::ConvoError::Ai(err.to_string())
    }
}
