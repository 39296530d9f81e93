//! Configuration for backend selection and service endpoints.

use crate::defaults;
use crate::error::{Result, VoxbridgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub stt: SttConfig,
    pub mt: MtConfig,
    pub tts: TtsConfig,
}

/// Which recognition backend to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SttBackend {
    /// Remote inference endpoint.
    Http,
    /// Local whisper.cpp model (requires the `whisper` feature).
    Whisper,
}

/// Speech recognition configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    pub backend: SttBackend,
    /// Recognizer model size (e.g. "tiny", "base").
    pub model: String,
    /// Source-language decoding hint.
    pub language: String,
    /// Endpoint for the http backend.
    pub endpoint: String,
    /// ggml model directory for the whisper backend.
    pub model_dir: PathBuf,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MtConfig {
    pub endpoint: String,
    pub source_lang: String,
}

/// Synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TtsConfig {
    pub endpoint: String,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            backend: SttBackend::Http,
            model: defaults::DEFAULT_MODEL.to_string(),
            language: defaults::SOURCE_LANGUAGE.to_string(),
            endpoint: "http://localhost:9000".to_string(),
            model_dir: PathBuf::from("models"),
        }
    }
}

impl Default for MtConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9001".to_string(),
            source_lang: defaults::SOURCE_LANGUAGE.to_string(),
        }
    }
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9002".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields use default values; invalid TOML is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file, or return defaults if it does not
    /// exist. Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Config = toml::from_str(&contents)?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(VoxbridgeError::Io(e)),
        }
    }

    /// Default configuration file path: `~/.config/voxbridge/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("voxbridge")
            .join("config.toml")
    }
}
