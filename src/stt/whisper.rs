//! Local whisper.cpp recognition backend.
//!
//! Requires the `whisper` feature (and cmake at build time). Without the
//! feature this module compiles to a stub that errors on use, so backend
//! selection stays uniform across builds.

#[cfg(feature = "whisper")]
use crate::audio::wav;
use crate::defaults;
use crate::error::{Result, VoxbridgeError};
use crate::stt::SpeechRecognizer;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(feature = "whisper")]
use std::sync::Mutex;
#[cfg(feature = "whisper")]
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// Configuration for the whisper recognition backend.
#[derive(Debug, Clone)]
pub struct WhisperConfig {
    /// Path to the ggml model file.
    pub model_path: PathBuf,
    /// Source-language decoding hint (fixed to "zh" in this pipeline).
    pub language: String,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/ggml-tiny.bin"),
            language: defaults::SOURCE_LANGUAGE.to_string(),
        }
    }
}

/// Whisper-based recognizer.
#[cfg(feature = "whisper")]
pub struct WhisperRecognizer {
    context: Mutex<WhisperContext>,
    config: WhisperConfig,
    model_name: String,
}

/// Whisper-based recognizer placeholder (without the `whisper` feature).
#[cfg(not(feature = "whisper"))]
#[derive(Debug)]
pub struct WhisperRecognizer {
    #[allow(dead_code)]
    config: WhisperConfig,
    model_name: String,
}

fn model_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(feature = "whisper")]
impl WhisperRecognizer {
    /// Load the model at `config.model_path`.
    ///
    /// # Errors
    /// Returns `RecognitionModelNotFound` if the file is missing and
    /// `Recognition` if whisper fails to load it.
    pub fn new(config: WhisperConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(VoxbridgeError::RecognitionModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }

        let model_name = model_name_from_path(&config.model_path);

        let context = WhisperContext::new_with_params(
            config
                .model_path
                .to_str()
                .ok_or_else(|| VoxbridgeError::Recognition {
                    message: "Invalid UTF-8 in model path".to_string(),
                })?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| VoxbridgeError::Recognition {
            message: format!("Failed to load Whisper model: {}", e),
        })?;

        Ok(Self {
            context: Mutex::new(context),
            config,
            model_name,
        })
    }

    fn transcribe_samples(&self, samples: &[i16]) -> Result<String> {
        // Whisper expects f32 in [-1.0, 1.0]
        let audio_f32: Vec<f32> = samples.iter().map(|&s| s as f32 / 32768.0).collect();

        let context = self
            .context
            .lock()
            .map_err(|e| VoxbridgeError::Recognition {
                message: format!("Failed to acquire context lock: {}", e),
            })?;

        let mut state = context
            .create_state()
            .map_err(|e| VoxbridgeError::Recognition {
                message: format!("Failed to create Whisper state: {}", e),
            })?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some(&self.config.language));
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, &audio_f32)
            .map_err(|e| VoxbridgeError::Recognition {
                message: format!("Whisper inference failed: {}", e),
            })?;

        let mut transcription = String::new();
        for segment in state.as_iter() {
            transcription.push_str(&segment.to_string());
        }

        Ok(transcription)
    }
}

#[cfg(feature = "whisper")]
#[async_trait]
impl SpeechRecognizer for WhisperRecognizer {
    async fn recognize(&self, audio: &Path) -> Result<String> {
        let (samples, rate) = wav::read_wav(audio)?;
        // The model expects 16kHz input regardless of the file's rate
        let samples = if rate == defaults::SAMPLE_RATE {
            samples
        } else {
            wav::resample(&samples, rate, defaults::SAMPLE_RATE)
        };
        self.transcribe_samples(&samples)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(not(feature = "whisper"))]
impl WhisperRecognizer {
    /// Create a new whisper recognizer (stub implementation).
    pub fn new(config: WhisperConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(VoxbridgeError::RecognitionModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }
        let model_name = model_name_from_path(&config.model_path);
        Ok(Self { config, model_name })
    }
}

#[cfg(not(feature = "whisper"))]
#[async_trait]
impl SpeechRecognizer for WhisperRecognizer {
    async fn recognize(&self, _audio: &Path) -> Result<String> {
        Err(VoxbridgeError::Recognition {
            message: concat!(
                "Whisper feature not enabled. This binary was built without local recognition.\n",
                "Rebuild with: cargo build --features whisper\n",
                "If the build fails with cmake errors, install: sudo apt install cmake"
            )
            .to_string(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_is_rejected() {
        let config = WhisperConfig {
            model_path: PathBuf::from("/nonexistent/ggml-tiny.bin"),
            language: "zh".to_string(),
        };
        let result = WhisperRecognizer::new(config);
        match result {
            Err(VoxbridgeError::RecognitionModelNotFound { path }) => {
                assert!(path.contains("ggml-tiny.bin"));
            }
            _ => panic!("Expected RecognitionModelNotFound"),
        }
    }

    #[test]
    fn default_config_uses_source_language() {
        let config = WhisperConfig::default();
        assert_eq!(config.language, "zh");
    }

    #[test]
    fn model_name_comes_from_file_stem() {
        assert_eq!(
            model_name_from_path(Path::new("/models/ggml-tiny.bin")),
            "ggml-tiny"
        );
    }
}
