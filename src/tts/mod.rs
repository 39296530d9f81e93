//! Speech synthesis seam.
//!
//! The synthesizer writes a waveform for the translated text to a
//! caller-chosen path. The voice is selected by the target language's
//! static synthesis model, never dynamically registered.

pub mod http;

pub use http::HttpSynthesizer;

use crate::audio::wav;
use crate::defaults;
use crate::error::{Result, VoxbridgeError};
use crate::lang::LanguageTarget;
use async_trait::async_trait;
use std::path::Path;

/// Trait for text-to-speech synthesis into a WAV file.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in `target`'s voice and write the waveform to
    /// `out_wav`. The file is fully written when this returns.
    async fn synthesize(&self, text: &str, target: LanguageTarget, out_wav: &Path) -> Result<()>;
}

/// Mock synthesizer for testing.
///
/// Writes a real, parseable WAV (100ms of silence per input character,
/// capped at one second) so downstream assertions on file existence and
/// size hold.
#[derive(Debug, Clone, Default)]
pub struct MockSynthesizer {
    should_fail: bool,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail on synthesize.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str, _target: LanguageTarget, out_wav: &Path) -> Result<()> {
        if self.should_fail {
            return Err(VoxbridgeError::Synthesis {
                message: "mock synthesis failure".to_string(),
            });
        }
        let tenth_secs = text.chars().count().clamp(1, 10);
        let samples = vec![0i16; tenth_secs * defaults::SAMPLE_RATE as usize / 10];
        wav::write_wav(out_wav, &samples, defaults::SAMPLE_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_writes_parseable_nonempty_wav() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hello_en.wav");

        let synthesizer = MockSynthesizer::new();
        synthesizer
            .synthesize("hello world", LanguageTarget::English, &out)
            .await
            .unwrap();

        assert!(out.exists());
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
        let (samples, rate) = wav::read_wav(&out).unwrap();
        assert_eq!(rate, defaults::SAMPLE_RATE);
        assert!(!samples.is_empty());
    }

    #[tokio::test]
    async fn mock_failure_maps_to_synthesis_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("never.wav");

        let synthesizer = MockSynthesizer::new().with_failure();
        let result = synthesizer
            .synthesize("hello", LanguageTarget::German, &out)
            .await;

        assert!(matches!(result, Err(VoxbridgeError::Synthesis { .. })));
        assert!(!out.exists());
    }
}
