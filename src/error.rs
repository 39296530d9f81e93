//! Error types for voxbridge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxbridgeError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unsupported target language: {code}")]
    UnsupportedLanguage { code: String },

    // Audio errors
    #[error("Audio error: {message}")]
    Audio { message: String },

    // Model invocation errors, one variant per pipeline stage
    #[error("Recognition model not found at {path}")]
    RecognitionModelNotFound { path: String },

    #[error("Speech recognition failed: {message}")]
    Recognition { message: String },

    #[error("Translation failed: {message}")]
    Translation { message: String },

    #[error("Speech synthesis failed: {message}")]
    Synthesis { message: String },

    // Reference transcript file errors
    #[error("Malformed reference transcript at line {line}: {message}")]
    Reference { line: usize, message: String },

    // Corpus extraction errors
    #[error("Corpus download failed: {message}")]
    Download { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, VoxbridgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn unsupported_language_display() {
        let error = VoxbridgeError::UnsupportedLanguage {
            code: "ja".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported target language: ja");
    }

    #[test]
    fn recognition_display() {
        let error = VoxbridgeError::Recognition {
            message: "decoder diverged".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Speech recognition failed: decoder diverged"
        );
    }

    #[test]
    fn translation_display() {
        let error = VoxbridgeError::Translation {
            message: "endpoint returned 503".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Translation failed: endpoint returned 503"
        );
    }

    #[test]
    fn synthesis_display() {
        let error = VoxbridgeError::Synthesis {
            message: "empty waveform".to_string(),
        };
        assert_eq!(error.to_string(), "Speech synthesis failed: empty waveform");
    }

    #[test]
    fn reference_display_includes_line() {
        let error = VoxbridgeError::Reference {
            line: 7,
            message: "missing '|' separator".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed reference transcript at line 7: missing '|' separator"
        );
    }

    #[test]
    fn from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: VoxbridgeError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn from_toml_error() {
        let toml_error = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let error: VoxbridgeError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: VoxbridgeError = io_error.into();
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<VoxbridgeError>();
        assert_sync::<VoxbridgeError>();
    }
}
