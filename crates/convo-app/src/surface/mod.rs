//! Terminal chat surface: renders the conversation and collects input.

mod command;
mod render;


use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use convo_ai::{AudioClip, AudioFormat, Conversation, ConversationController, Input, Role};
use convo_common::ConvoError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use command::{parse, Command, HELP};

const PLACEHOLDER: &str = "Type your message...";

pub struct SurfaceOptions {
    /// Shown in the banner, normally the model name.
    pub title: String,
    pub stream: bool,
    pub download_path: PathBuf,
}

/// Line-oriented chat front end.
///
/// Each line read is handled to completion before the next is read.
pub struct ChatSurface<W> {
    controller: ConversationController,
    conversation: Conversation,
    out: Arc<Mutex<W>>,
    options: SurfaceOptions,
}

impl<W: Write + Send + 'static> ChatSurface<W> {
    pub fn new(controller: ConversationController, out: W, options: SurfaceOptions) -> Self {
        Self {
            controller,
            conversation: Conversation::new(),
            out: Arc::new(Mutex::new(out)),
            options,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[cfg(test)]
    pub fn controller(&self) -> &ConversationController {
        &self.controller
    }

    /// Shared handle to the output sink.
    #[cfg(test)]
    pub fn output(&self) -> Arc<Mutex<W>> {
        self.out.clone()
    }

    /// Read lines until EOF or `/quit`.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<(), ConvoError> {
        self.println(&format!("convo - {}", self.options.title))?;
        self.println(&format!("{PLACEHOLDER} (/help for commands)"))?;
        info!(session = self.conversation.id().short(), "chat session started");

        let mut lines = input.lines();
        loop {
            self.print("you> ")?;
            let Some(line) = lines.next_line().await? else {
                self.println("")?;
                break;
            };

            match parse(&line) {
                Command::Empty => continue,
                Command::Quit => break,
                Command::Say(text) => self.submit(Input::Text(text)).await?,
                Command::Audio(path) => self.submit_audio(&path).await?,
                Command::History => {
                    let text = render::scrollback(&self.conversation);
                    if text.is_empty() {
                        self.println("(no messages yet)")?;
                    } else {
                        self.println(&text)?;
                    }
                }
                Command::Download(path) => self.download(path)?,
                Command::Usage => self.usage()?,
                Command::Clear => {
                    self.conversation = Conversation::new();
                    info!(session = self.conversation.id().short(), "conversation cleared");
                    self.println("(new conversation)")?;
                }
                Command::Help => self.println(HELP)?,
                Command::Unknown(name) => {
                    self.println(&format!("unknown command /{name}; try /help"))?;
                }
                Command::MissingArgument(usage) => {
                    self.println(&format!("usage: {usage}"))?;
                }
            }
        }

        info!(
            session = self.conversation.id().short(),
            turns = self.conversation.len(),
            "chat session ended"
        );
        Ok(())
    }

    async fn submit(&mut self, input: Input) -> Result<(), ConvoError> {
        let result = if self.options.stream {
            // The prefix goes out with the first fragment, so a request that
            // fails before replying prints only the error.
            let started = Arc::new(AtomicBool::new(false));
            let prefix = format!("{}> ", render::speaker(Role::Assistant));
            let out = self.out.clone();
            let on_chunk = {
                let started = started.clone();
                Box::new(move |chunk: String| {
                    let mut out = lock(&out);
                    if !started.swap(true, Ordering::SeqCst) {
                        let _ = write!(out, "{prefix}");
                    }
                    let _ = write!(out, "{chunk}");
                    let _ = out.flush();
                })
            };
            let result = self
                .controller
                .submit_streaming(&mut self.conversation, input, on_chunk)
                .await;
            if started.load(Ordering::SeqCst) {
                self.println("")?;
            }
            result
        } else {
            let result = self.controller.submit(&mut self.conversation, input).await;
            if let Ok(ref turn) = result {
                self.println(&render::turn_line(turn))?;
            }
            result
        };

        if let Err(e) = result {
            self.println(&format!("error: {e}"))?;
        }
        Ok(())
    }

    /// Transcribe and show what was heard, then send it as text.
    async fn submit_audio(&mut self, path: &Path) -> Result<(), ConvoError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("failed to read audio {}: {e}", path.display());
                return self.println(&format!("error: cannot read {}: {e}", path.display()));
            }
        };
        debug!(path = %path.display(), size = bytes.len(), "submitting audio");

        let clip = AudioClip::new(bytes, AudioFormat::from_path(path));
        match self.controller.resolve(Input::Audio(clip)).await {
            Ok(text) => {
                self.println(&format!("(heard: {text})"))?;
                self.submit(Input::Text(text)).await
            }
            Err(e) => self.println(&format!("error: {e}")),
        }
    }

    fn download(&mut self, path: Option<PathBuf>) -> Result<(), ConvoError> {
        let path = path.unwrap_or_else(|| self.options.download_path.clone());
        let text = render::markdown(&self.conversation, chrono::Utc::now());
        match std::fs::write(&path, text) {
            Ok(()) => {
                info!("transcript written to {}", path.display());
                self.println(&format!(
                    "saved {} turns to {}",
                    self.conversation.len(),
                    path.display()
                ))
            }
            Err(e) => self.println(&format!("error: cannot write {}: {e}", path.display())),
        }
    }

    fn usage(&mut self) -> Result<(), ConvoError> {
        let tracker = self.controller.tracker();
        let line = format!(
            "{} calls, {} input + {} output = {} tokens",
            tracker.call_count(),
            tracker.total().input_tokens,
            tracker.total().output_tokens,
            tracker.total_tokens()
        );
        self.println(&line)
    }

    fn print(&self, text: &str) -> Result<(), ConvoError> {
        let mut out = lock(&self.out);
        write!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }

    fn println(&self, text: &str) -> Result<(), ConvoError> {
        let mut out = lock(&self.out);
        writeln!(out, "{text}")?;
        Ok(())
    }
}

/// A panic while printing leaves nothing worth protecting; keep writing.
fn lock<W>(out: &Mutex<W>) -> MutexGuard<'_, W> {
    out.lock().unwrap_or_else(|e| e.into_inner())
}
