//! Remote recognition backend.
//!
//! Posts the raw WAV bytes to a configured inference endpoint and reads
//! the transcript from its JSON response. The endpoint is an opaque
//! service; model and language travel as query parameters.

use crate::error::{Result, VoxbridgeError};
use crate::stt::SpeechRecognizer;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    text: String,
}

/// Recognizer backed by a remote HTTP inference service.
#[derive(Debug, Clone)]
pub struct HttpRecognizer {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    language: String,
}

impl HttpRecognizer {
    /// Create a recognizer against `endpoint` (e.g. `http://localhost:9000`).
    ///
    /// `model` is the recognizer size hint; `language` the fixed source
    /// language.
    pub fn new(endpoint: &str, model: &str, language: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            language: language.to_string(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for HttpRecognizer {
    async fn recognize(&self, audio: &Path) -> Result<String> {
        let bytes = tokio::fs::read(audio).await?;

        let response = self
            .client
            .post(format!("{}/transcribe", self.endpoint))
            .query(&[
                ("language", self.language.as_str()),
                ("model", self.model.as_str()),
            ])
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(bytes)
            .send()
            .await
            .map_err(|e| VoxbridgeError::Recognition {
                message: format!("Request to {} failed: {}", self.endpoint, e),
            })?;

        if !response.status().is_success() {
            return Err(VoxbridgeError::Recognition {
                message: format!("Recognition service returned {}", response.status()),
            });
        }

        let body: TranscribeResponse =
            response
                .json()
                .await
                .map_err(|e| VoxbridgeError::Recognition {
                    message: format!("Invalid recognition response: {}", e),
                })?;

        Ok(body.text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
