//! Controller error and policy types.

use crate::AiError;

/// Why a submission did not produce an assistant turn.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("transcription failed: {0}")]
    Transcription(#[source] AiError),
    #[error("transcription returned no text")]
    EmptyTranscript,
    #[error("completion failed: {0}")]
    Completion(#[source] AiError),
}

impl SubmitError {
    /// The audio never became a user turn.
    pub fn is_transcription(&self) -> bool {
        matches!(self, Self::Transcription(_) | Self::EmptyTranscript)
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion(_))
    }
}

impl From<SubmitError> for convo_common::ConvoError {
    fn from(err: SubmitError) -> Self {
        convo_common::ConvoError::Ai(err.to_string())
    }
}

/// What to do with the user turn when the completion call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep the unanswered user turn so the history shows what was asked.
    #[default]
    KeepUserTurn,
    /// Remove the unanswered user turn, leaving the history as it was.
    RollBack,
}
