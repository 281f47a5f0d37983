//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# convo configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[completion]
model = "gpt-4o-mini"
temperature = 0.7        # 0.0-2.0
# max_tokens = 1024
# system_prompt = "You are a helpful assistant."
# api_base = "https://api.openai.com/v1"
# timeout_secs = 120     # 1-3600
# stream = true

[transcription]
# model = "whisper-1"
# language = "en"
# api_base = "https://api.openai.com/v1"
# timeout_secs = 300     # 1-3600

[chat]
# keep | rollback
# on_completion_error = "keep"
# download_path = "conversation.md"

[logging]
# trace | debug | info | warn | error
# level = "info"

[auth]
# api_key_env = "OPENAI_API_KEY"
"##
    .to_string()
}
