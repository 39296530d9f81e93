//! Speech recognition seam.
//!
//! The recognizer is an opaque service: it takes a waveform file and
//! returns source-language text. Backends are swappable behind the
//! [`SpeechRecognizer`] trait: a local whisper.cpp model, a remote
//! inference endpoint, or a mock in tests.

pub mod http;
pub mod whisper;

pub use http::HttpRecognizer;
pub use whisper::{WhisperConfig, WhisperRecognizer};

use crate::error::{Result, VoxbridgeError};
use async_trait::async_trait;
use std::path::Path;

/// Trait for speech-to-text recognition over a waveform file.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Transcribe the waveform at `audio` into source-language text.
    ///
    /// The source language is fixed at construction time; implementations
    /// pass it to the underlying model as a decoding hint.
    async fn recognize(&self, audio: &Path) -> Result<String>;

    /// Name of the loaded model, for logging.
    fn model_name(&self) -> &str;
}

/// Mock recognizer for testing.
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    model_name: String,
    response: String,
    should_fail: bool,
}

impl MockRecognizer {
    /// Create a new mock recognizer with default settings.
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            response: "mock recognition".to_string(),
            should_fail: false,
        }
    }

    /// Configure the mock to return a specific transcript.
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the mock to fail on recognize.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl SpeechRecognizer for MockRecognizer {
    async fn recognize(&self, _audio: &Path) -> Result<String> {
        if self.should_fail {
            Err(VoxbridgeError::Recognition {
                message: "mock recognition failure".to_string(),
            })
        } else {
            Ok(self.response.clone())
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
