//! User input units handed to the controller.

use std::path::Path;

/// One unit of user input: typed text or a recorded clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Audio(AudioClip),
}

impl Input {
    pub fn text(s: impl Into<String>) -> Self {
        Input::Text(s.into())
    }

    pub fn audio(bytes: Vec<u8>) -> Self {
        Input::Audio(AudioClip::wav(bytes))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Input::Text(_) => "text",
            Input::Audio(_) => "audio",
        }
    }
}

/// Audio container formats the transcription backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Wav,
    Mp3,
    M4a,
    Webm,
    Ogg,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" | "mpeg" | "mpga" => Some(Self::Mp3),
            "m4a" | "mp4" => Some(Self::M4a),
            "webm" => Some(Self::Webm),
            "ogg" | "oga" => Some(Self::Ogg),
            _ => None,
        }
    }

    /// Guess from a file path's extension, defaulting to WAV.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
        }
    }
}

/// Raw recorded audio plus its container format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, format: AudioFormat) -> Self {
        Self { bytes, format }
    }

    pub fn wav(bytes: Vec<u8>) -> Self {
        Self::new(bytes, AudioFormat::Wav)
    }

    /// Filename sent in the multipart upload, e.g. `audio.wav`.
    pub fn filename(&self) -> String {
        format!("audio.{}", self.format.extension())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
