//! Machine translation seam.
//!
//! The translator is configured once with the fixed source language and
//! told the destination language on every call.

pub mod http;

pub use http::HttpTranslator;

use crate::error::{Result, VoxbridgeError};
use crate::lang::LanguageTarget;
use async_trait::async_trait;

/// Trait for text translation into one of the supported targets.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from the configured source language into `target`.
    async fn translate(&self, text: &str, target: LanguageTarget) -> Result<String>;
}

/// Mock translator for testing.
///
/// Returns either a fixed response or, by default, a deterministic
/// rendering of its input so tests can assert the target was threaded
/// through.
#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    response: Option<String>,
    should_fail: bool,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return a specific translation.
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }

    /// Configure the mock to fail on translate.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: LanguageTarget) -> Result<String> {
        if self.should_fail {
            return Err(VoxbridgeError::Translation {
                message: "mock translation failure".to_string(),
            });
        }
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Ok(format!("[{}] {}", target.code(), text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_default_echoes_with_target_code() {
        let translator = MockTranslator::new();
        let out = translator
            .translate("你好", LanguageTarget::German)
            .await
            .unwrap();
        assert_eq!(out, "[de] 你好");
    }

    #[tokio::test]
    async fn mock_fixed_response_wins() {
        let translator = MockTranslator::new().with_response("hello world");
        let out = translator
            .translate("你好", LanguageTarget::English)
            .await
            .unwrap();
        assert_eq!(out, "hello world");
    }

    #[tokio::test]
    async fn mock_failure_maps_to_translation_error() {
        let translator = MockTranslator::new().with_failure();
        let result = translator.translate("你好", LanguageTarget::French).await;
        assert!(matches!(result, Err(VoxbridgeError::Translation { .. })));
    }
}
