//! Remote synthesis backend.
//!
//! Posts the translated text plus the per-language model identifier and
//! writes the returned WAV bytes to the output path.

use crate::error::{Result, VoxbridgeError};
use crate::lang::LanguageTarget;
use crate::tts::SpeechSynthesizer;
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    model: &'a str,
}

/// Synthesizer backed by a remote HTTP inference service.
#[derive(Debug, Clone)]
pub struct HttpSynthesizer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSynthesizer {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSynthesizer {
    async fn synthesize(&self, text: &str, target: LanguageTarget, out_wav: &Path) -> Result<()> {
        let request = SynthesizeRequest {
            text,
            model: target.synthesis_model(),
        };

        let response = self
            .client
            .post(format!("{}/synthesize", self.endpoint))
            .json(&request)
            .send()
            .await
            .map_err(|e| VoxbridgeError::Synthesis {
                message: format!("Request to {} failed: {}", self.endpoint, e),
            })?;

        if !response.status().is_success() {
            return Err(VoxbridgeError::Synthesis {
                message: format!("Synthesis service returned {}", response.status()),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VoxbridgeError::Synthesis {
                message: format!("Failed to read synthesis response: {}", e),
            })?;

        if bytes.is_empty() {
            return Err(VoxbridgeError::Synthesis {
                message: "Synthesis service returned an empty waveform".to_string(),
            });
        }

        tokio::fs::write(out_wav, &bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_static_model_id() {
        let request = SynthesizeRequest {
            text: "bonjour",
            model: LanguageTarget::French.synthesis_model(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "tts_models/fr/css10/vits");
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_synthesis_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x.wav");
        let synthesizer = HttpSynthesizer::new("http://127.0.0.1:9");
        let result = synthesizer
            .synthesize("hello", LanguageTarget::English, &out)
            .await;
        assert!(matches!(result, Err(VoxbridgeError::Synthesis { .. })));
    }
}
