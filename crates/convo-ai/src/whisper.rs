//! OpenAI Whisper API client for speech-to-text.
//!
//! Audio submitted by the user is uploaded as multipart form data and the
//! transcript is returned as plain text.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::openai::DEFAULT_API_BASE;
use crate::{http, AiError, AudioClip, TranscriptionClient};

/// Whisper API client configuration.
#[derive(Clone)]
pub struct WhisperConfig {
    pub api_key: String,
    pub model: String,
    pub language: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl fmt::Debug for WhisperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhisperConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("language", &self.language)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl WhisperConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "whisper-1".to_string(),
            language: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(300),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_language(mut self, lang: Option<String>) -> Self {
        self.language = lang;
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.api_base.trim_end_matches('/'))
    }
}

/// Whisper speech-to-text client.
pub struct WhisperClient {
    config: WhisperConfig,
    http: reqwest::Client,
}

impl WhisperClient {
    pub fn new(config: WhisperConfig) -> Result<Self, AiError> {
        let http = http::build_client(config.timeout)?;
        Ok(Self { config, http })
    }

    fn build_form(&self, clip: &AudioClip) -> Result<reqwest::multipart::Form, AiError> {
        let file_part = reqwest::multipart::Part::bytes(clip.bytes.clone())
            .file_name(clip.filename())
            .mime_str(clip.format.mime())
            .map_err(|e| AiError::ApiError(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());

        if let Some(ref lang) = self.config.language {
            form = form.text("language", lang.clone());
        }
        Ok(form)
    }
}

/// Pull the transcript out of a transcription response body.
pub(crate) fn parse_transcript(json: &serde_json::Value) -> Result<String, AiError> {
    json["text"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| AiError::ParseError("no 'text' field in response".to_string()))
}

#[async_trait]
impl TranscriptionClient for WhisperClient {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, AiError> {
        debug!(
            model = %self.config.model,
            size = clip.len(),
            format = clip.format.extension(),
            "Whisper transcription request"
        );

        let form = self.build_form(clip)?;

        let response = self
            .http
            .post(self.config.endpoint())
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(http::send_error)?;
        let response = http::check_status(response).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        parse_transcript(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = WhisperConfig::new("k");
        assert_eq!(config.model, "whisper-1");
        assert!(config.language.is_none());
        assert_eq!(config.endpoint(), "https://api.openai.com/v1/audio/transcriptions");
    }

    #[test]
    fn debug_redacts_key() {
        let debug = format!("{:?}", WhisperConfig::new("sk-secret"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn parse_transcript_reads_text() {
        let json = serde_json::json!({"text": "What is 2+2?"});
        assert_eq!(parse_transcript(&json).unwrap(), "What is 2+2?");
    }

    #[test]
    fn parse_transcript_missing_text() {
        let json = serde_json::json!({"error": "nope"});
        assert!(matches!(parse_transcript(&json), Err(AiError::ParseError(_))));
    }

    #[test]
    fn form_builds_for_each_format() {
        let client = WhisperClient::new(WhisperConfig::new("k").with_language(Some("en".into())))
            .unwrap();
        let clip = AudioClip::new(vec![0u8; 16], crate::AudioFormat::Mp3);
        assert!(client.build_form(&clip).is_ok());
    }
}
