//! Parsing of one line typed at the prompt.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line; nothing is submitted.
    Empty,
    /// Plain text to send.
    Say(String),
    Audio(PathBuf),
    History,
    /// Export the transcript, optionally to a specific path.
    Download(Option<PathBuf>),
    Usage,
    Clear,
    Help,
    Quit,
    Unknown(String),
    /// A command that needs an argument and got none.
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  /audio <path>      transcribe an audio file and send it
  /history           show the conversation so far
  /download [path]   save the conversation as Markdown
  /usage             show token usage
  /clear             start a new conversation
  /help              show this help
  /quit              exit
start a line with // to send a message beginning with /";

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    // `//text` sends `/text` literally.
    if let Some(rest) = trimmed.strip_prefix("//") {
        return Command::Say(format!("/{rest}"));
    }

    let Some(body) = trimmed.strip_prefix('/') else {
        return Command::Say(trimmed.to_string());
    };

    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (body, None),
    };

    match name {
        "audio" => match arg {
            Some(path) => Command::Audio(PathBuf::from(path)),
            None => Command::MissingArgument("/audio <path>"),
        },
        "history" => Command::History,
        "download" | "save" => Command::Download(arg.map(PathBuf::from)),
        "usage" => Command::Usage,
        "clear" | "new" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}
