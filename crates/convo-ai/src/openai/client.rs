//! OpenAI client struct, request building, and response parsing.

use crate::{http, AiError, Completion, TokenUsage, Turn};

use super::config::OpenAiConfig;

/// Terminal payload of a chat completions SSE stream.
pub(crate) const STREAM_DONE: &str = "[DONE]";

/// Chat completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

/// What one streamed chunk contributed.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct StreamDelta {
    pub content: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = http::build_client(config.timeout)?;
        Ok(Self { config, http })
    }

    /// Build the JSON request body. `turns` is sent in order, after the
    /// system prompt if one is configured.
    pub(crate) fn build_request_body(&self, turns: &[Turn], stream: bool) -> serde_json::Value {
        let mut msgs = Vec::with_capacity(turns.len() + 1);
        if let Some(ref system) = self.config.system_prompt {
            msgs.push(serde_json::json!({
                "role": "system",
                "content": system,
            }));
        }
        for turn in turns {
            msgs.push(serde_json::json!({
                "role": turn.role().as_str(),
                "content": turn.content(),
            }));
        }

        let mut body = serde_json::json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": msgs,
        });

        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        if stream {
            body["stream"] = serde_json::json!(true);
            body["stream_options"] = serde_json::json!({ "include_usage": true });
        }

        body
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(json: &serde_json::Value) -> Result<Completion, AiError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("no message content in response".to_string()))?;

        Ok(Completion {
            content: non_empty(content)?,
            usage: parse_usage(&json["usage"]).unwrap_or_default(),
        })
    }

    /// Parse one streamed `data:` payload (everything except `[DONE]`).
    pub(crate) fn parse_stream_chunk(data: &str) -> Result<StreamDelta, AiError> {
        let json: serde_json::Value =
            serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

        if let Some(message) = json["error"]["message"].as_str() {
            return Err(AiError::ApiError(message.to_string()));
        }

        Ok(StreamDelta {
            content: json["choices"][0]["delta"]["content"]
                .as_str()
                .filter(|s| !s.is_empty())
                .map(String::from),
            usage: parse_usage(&json["usage"]),
        })
    }
}

/// A reply with nothing but whitespace is never appended as a turn.
pub(crate) fn non_empty(content: String) -> Result<String, AiError> {
    if content.trim().is_empty() {
        return Err(AiError::ParseError("reply has no content".to_string()));
    }
    Ok(content)
}

fn parse_usage(usage: &serde_json::Value) -> Option<TokenUsage> {
    if !usage.is_object() {
        return None;
    }
    Some(TokenUsage {
        input_tokens: usage["prompt_tokens"].as_u64().unwrap_or(0),
        output_tokens: usage["completion_tokens"].as_u64().unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: OpenAiConfig) -> OpenAiClient {
        OpenAiClient::new(config).unwrap()
    }

    #[test]
    fn request_body_preserves_turn_order() {
        let c = client(OpenAiConfig::new("k"));
        let turns = [Turn::user("Hello"), Turn::assistant("Hi!"), Turn::user("Bye")];
        let body = c.build_request_body(&turns, false);

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.7);
        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0], serde_json::json!({"role": "user", "content": "Hello"}));
        assert_eq!(msgs[1]["role"], "assistant");
        assert_eq!(msgs[2]["content"], "Bye");
        assert!(body.get("stream").is_none());
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn request_body_prepends_system_prompt() {
        let c = client(
            OpenAiConfig::new("k")
                .with_system_prompt(Some("be brief".into()))
                .with_max_tokens(Some(64)),
        );
        let body = c.build_request_body(&[Turn::user("q")], true);
        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs[0], serde_json::json!({"role": "system", "content": "be brief"}));
        assert_eq!(msgs[1]["role"], "user");
        assert_eq!(body["max_tokens"], 64);
        assert_eq!(body["stream"], true);
        assert_eq!(body["stream_options"]["include_usage"], true);
    }

    #[test]
    fn parse_response_reads_content_and_usage() {
        let json = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "4"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 1, "total_tokens": 13}
        });
        let completion = OpenAiClient::parse_response(&json).unwrap();
        assert_eq!(completion.content, "4");
        assert_eq!(completion.usage.input_tokens, 12);
        assert_eq!(completion.usage.output_tokens, 1);
    }

    #[test]
    fn parse_response_without_content_is_error() {
        let json = serde_json::json!({"choices": [{"message": {"content": null}}]});
        assert!(matches!(
            OpenAiClient::parse_response(&json),
            Err(AiError::ParseError(_))
        ));
        assert!(OpenAiClient::parse_response(&serde_json::json!({})).is_err());
    }

    #[test]
    fn parse_response_with_empty_content_is_error() {
        for content in ["", "  \n"] {
            let json = serde_json::json!({"choices": [{"message": {"content": content}}]});
            let err = OpenAiClient::parse_response(&json).unwrap_err();
            assert_eq!(err.to_string(), "Parse error: reply has no content");
        }
    }

    #[test]
    fn parse_response_missing_usage_defaults_to_zero() {
        let json = serde_json::json!({"choices": [{"message": {"content": "ok"}}]});
        let completion = OpenAiClient::parse_response(&json).unwrap();
        assert_eq!(completion.usage.total_tokens(), 0);
    }

    #[test]
    fn stream_chunk_with_content() {
        let delta = OpenAiClient::parse_stream_chunk(
            r#"{"choices":[{"index":0,"delta":{"content":"Hel"}}]}"#,
        )
        .unwrap();
        assert_eq!(delta.content.as_deref(), Some("Hel"));
        assert!(delta.usage.is_none());
    }

    #[test]
    fn stream_chunk_role_only_has_no_content() {
        let delta = OpenAiClient::parse_stream_chunk(
            r#"{"choices":[{"index":0,"delta":{"role":"assistant","content":""}}]}"#,
        )
        .unwrap();
        assert_eq!(delta, StreamDelta::default());
    }

    #[test]
    fn stream_chunk_usage_only() {
        let delta = OpenAiClient::parse_stream_chunk(
            r#"{"choices":[],"usage":{"prompt_tokens":5,"completion_tokens":2}}"#,
        )
        .unwrap();
        assert!(delta.content.is_none());
        assert_eq!(
            delta.usage,
            Some(TokenUsage {
                input_tokens: 5,
                output_tokens: 2
            })
        );
    }

    #[test]
    fn stream_chunk_error_payload() {
        let err = OpenAiClient::parse_stream_chunk(r#"{"error":{"message":"overloaded"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn stream_chunk_invalid_json() {
        assert!(matches!(
            OpenAiClient::parse_stream_chunk("not json"),
            Err(AiError::ParseError(_))
        ));
    }
}
