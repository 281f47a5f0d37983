//! CompletionClient implementation for OpenAiClient (complete + streaming).

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{http, AiError, ChunkCallback, Completion, CompletionClient, Turn};

use super::client::OpenAiClient;
use super::stream::StreamState;

impl OpenAiClient {
    async fn post(&self, body: &serde_json::Value) -> Result<reqwest::Response, AiError> {
        let response = self
            .http
            .post(self.config.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(http::send_error)?;
        http::check_status(response).await
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, turns: &[Turn]) -> Result<Completion, AiError> {
        let body = self.build_request_body(turns, false);

        debug!(model = %self.config.model, turns = turns.len(), "chat completion request");

        let response = self.post(&body).await?;
        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Timeout
            } else {
                AiError::ParseError(e.to_string())
            }
        })?;

        Self::parse_response(&json)
    }

    async fn complete_streaming(
        &self,
        turns: &[Turn],
        on_chunk: ChunkCallback,
    ) -> Result<Completion, AiError> {
        let body = self.build_request_body(turns, true);

        debug!(
            model = %self.config.model,
            turns = turns.len(),
            "chat completion streaming request"
        );

        let response = self.post(&body).await?;

        let mut state = StreamState::new();
        parse_sse_stream(response, |event: SseEvent| {
            if let Some(chunk) = state.feed(&event) {
                on_chunk(chunk);
            }
        })
        .await?;

        state.finish()
    }
}
