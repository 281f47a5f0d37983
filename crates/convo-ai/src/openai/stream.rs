//! Accumulates a chat completions SSE stream into one reply.

use tracing::{debug, warn};

use crate::streaming::SseEvent;
use crate::{AiError, Completion, TokenUsage};

use super::client::{non_empty, OpenAiClient, STREAM_DONE};

/// Running state of one streamed reply.
///
/// Events after `[DONE]` or after the first error payload are ignored.
#[derive(Debug, Default)]
pub(crate) struct StreamState {
    content: String,
    usage: Option<TokenUsage>,
    failure: Option<AiError>,
    done: bool,
}

impl StreamState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns the text fragment to forward, if any.
    pub fn feed(&mut self, event: &SseEvent) -> Option<String> {
        if self.done || self.failure.is_some() {
            return None;
        }
        if event.data.trim() == STREAM_DONE {
            self.done = true;
            return None;
        }
        match OpenAiClient::parse_stream_chunk(&event.data) {
            Ok(delta) => {
                if delta.usage.is_some() {
                    self.usage = delta.usage;
                }
                let chunk = delta.content?;
                self.content.push_str(&chunk);
                Some(chunk)
            }
            Err(e) => {
                self.failure = Some(e);
                None
            }
        }
    }

    pub fn finish(self) -> Result<Completion, AiError> {
        if let Some(e) = self.failure {
            return Err(e);
        }
        if !self.done {
            warn!("completion stream ended without [DONE] marker");
        }
        if self.usage.is_none() {
            debug!("no usage data received in streaming response");
        }
        Ok(Completion {
            content: non_empty(self.content)?,
            usage: self.usage.unwrap_or_default(),
        })
    }
}
