//! Conversation controller.
//!
//! Drives one submission end to end: resolve input to text (transcribing
//! audio if needed), append the user turn, ask the completion backend for a
//! reply given the full history, append the assistant turn.

mod manager;
mod submit;
mod types;


pub use manager::ConversationController;
pub use types::{FailurePolicy, SubmitError};
