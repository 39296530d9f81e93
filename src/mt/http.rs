//! Remote translation backend.

use crate::error::{Result, VoxbridgeError};
use crate::lang::LanguageTarget;
use crate::mt::Translator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translation: String,
}

/// Translator backed by a remote HTTP inference service.
///
/// The source language is fixed at construction; the destination travels
/// in every request, mirroring a forced-decoding target token.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
    source_lang: String,
}

impl HttpTranslator {
    pub fn new(endpoint: &str, source_lang: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            source_lang: source_lang.to_string(),
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, target: LanguageTarget) -> Result<String> {
        let request = TranslateRequest {
            text,
            source_lang: &self.source_lang,
            target_lang: target.code(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.endpoint))
            .json(&request)
            .send()
            .await
            .map_err(|e| VoxbridgeError::Translation {
                message: format!("Request to {} failed: {}", self.endpoint, e),
            })?;

        if !response.status().is_success() {
            return Err(VoxbridgeError::Translation {
                message: format!("Translation service returned {}", response.status()),
            });
        }

        let body: TranslateResponse =
            response
                .json()
                .await
                .map_err(|e| VoxbridgeError::Translation {
                    message: format!("Invalid translation response: {}", e),
                })?;

        Ok(body.translation)
    }
}
