//! OpenAI chat completions client.
//!
//! Implements the `CompletionClient` trait via the chat completions API
//! (`{api_base}/chat/completions`), with optional SSE streaming.

mod api;
mod client;
mod config;
mod stream;

pub use client::OpenAiClient;
pub use config::{OpenAiConfig, DEFAULT_API_BASE};
