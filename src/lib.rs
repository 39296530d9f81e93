//! voxbridge - Chinese speech to translated speech
//!
//! A sequential ASR -> MT -> TTS pipeline over swappable model backends,
//! with a batch runner, WER scoring, and a corpus extraction utility.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod audio;
pub mod batch;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod defaults;
pub mod error;
pub mod lang;
pub mod metrics;
pub mod mt;
pub mod pipeline;
pub mod reference;
pub mod stt;
pub mod tts;

// Core seams (audio in -> text -> text -> audio out)
pub use audio::{IngestedAudio, WaveformHandle, ingest};
pub use mt::Translator;
pub use stt::SpeechRecognizer;
pub use tts::SpeechSynthesizer;

// Pipeline
pub use pipeline::{Pipeline, PipelineOutput, TranscriptPair};

// Error handling
pub use error::{Result, VoxbridgeError};

// Config and language table
pub use config::Config;
pub use lang::LanguageTarget;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
