//! Controller struct and configuration.

use std::sync::Arc;

use crate::token_tracker::TokenTracker;
use crate::{CompletionClient, TranscriptionClient};

use super::types::FailurePolicy;

/// Turns user input into conversation turns using the hosted backends.
///
/// The conversation itself is not owned here; every call takes it by
/// `&mut`, so one conversation cannot see two submissions at once.
pub struct ConversationController {
    pub(super) completion: Arc<dyn CompletionClient>,
    pub(super) transcription: Arc<dyn TranscriptionClient>,
    pub(super) failure_policy: FailurePolicy,
    /// Label usage is recorded under, normally the model name.
    pub(super) provider: String,
    pub(super) tracker: TokenTracker,
}

impl ConversationController {
    pub fn new(
        completion: Arc<dyn CompletionClient>,
        transcription: Arc<dyn TranscriptionClient>,
    ) -> Self {
        Self {
            completion,
            transcription,
            failure_policy: FailurePolicy::default(),
            provider: "default".to_string(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Token usage across every completion this controller made.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
