//! Async submission methods for ConversationController.

use tracing::{debug, info, warn};

use crate::conversation::Conversation;
use crate::{AudioClip, ChunkCallback, Input, Turn};

use super::manager::ConversationController;
use super::types::{FailurePolicy, SubmitError};

impl ConversationController {
    /// Submit one input and return the new assistant turn.
    ///
    /// On success two turns are appended to `conversation`. If audio cannot
    /// be transcribed nothing is appended and the completion backend is not
    /// called. If the completion call fails the user turn stays appended
    /// unless the policy is [`FailurePolicy::RollBack`].
    pub async fn submit(
        &mut self,
        conversation: &mut Conversation,
        input: Input,
    ) -> Result<Turn, SubmitError> {
        self.run(conversation, input, None).await
    }

    /// Same as [`submit`](Self::submit), forwarding reply fragments to
    /// `on_chunk` as they arrive.
    pub async fn submit_streaming(
        &mut self,
        conversation: &mut Conversation,
        input: Input,
        on_chunk: ChunkCallback,
    ) -> Result<Turn, SubmitError> {
        self.run(conversation, input, Some(on_chunk)).await
    }

    async fn run(
        &mut self,
        conversation: &mut Conversation,
        input: Input,
        on_chunk: Option<ChunkCallback>,
    ) -> Result<Turn, SubmitError> {
        debug!(
            session = conversation.id().short(),
            kind = input.kind(),
            history = conversation.len(),
            "submission received"
        );

        let text = self.resolve(input).await?;

        conversation.push(Turn::user(text));

        let result = match on_chunk {
            Some(on_chunk) => {
                self.completion
                    .complete_streaming(conversation.turns(), on_chunk)
                    .await
            }
            None => self.completion.complete(conversation.turns()).await,
        };

        let completion = match result {
            Ok(completion) => completion,
            Err(e) => {
                warn!(session = conversation.id().short(), "completion failed: {e}");
                if self.failure_policy == FailurePolicy::RollBack {
                    conversation.pop_unanswered();
                }
                return Err(SubmitError::Completion(e));
            }
        };

        self.tracker.record(&self.provider, &completion.usage);
        info!(
            session = conversation.id().short(),
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "assistant replied"
        );

        let reply = Turn::assistant(completion.content);
        conversation.push(reply.clone());
        Ok(reply)
    }

    /// Turn an input into the text of its user turn without touching any
    /// conversation. Audio is transcribed; text passes through unchanged.
    ///
    /// Front ends use this to show what audio was heard before the reply
    /// arrives, then submit the text.
    pub async fn resolve(&self, input: Input) -> Result<String, SubmitError> {
        match input {
            Input::Text(text) => Ok(text),
            Input::Audio(clip) => self.transcribe(&clip).await,
        }
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, SubmitError> {
        let text = self
            .transcription
            .transcribe(clip)
            .await
            .map_err(SubmitError::Transcription)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyTranscript);
        }
        debug!(chars = text.len(), "audio transcribed");
        Ok(text.to_string())
    }
}
