//! Configuration schema types for convo.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod completion;
mod system;
mod transcription;

pub use chat::*;
pub use completion::*;
pub use system::*;
pub use transcription::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConvoConfig {
    pub completion: CompletionConfig,
    pub transcription: TranscriptionConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}
