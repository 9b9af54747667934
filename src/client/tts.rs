//! TTS (Text-to-Speech) client.

use super::SpeechBackend;
use crate::request::SpeechPayload;
use crate::transport::{HttpTransport, DEFAULT_BASE_URL};
use crate::types::GenerateContentResponse;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Environment variable consulted when no key is given to the builder.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Client for text-to-speech synthesis.
pub struct TtsClient {
    transport: HttpTransport,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    pub async fn synthesize(&self, payload: &SpeechPayload) -> Result<GenerateContentResponse> {
        tracing::debug!(
            model = payload.model.id(),
            multi_speaker = payload.is_multi_speaker(),
            estimated_tokens = payload.estimated_tokens,
            "sending generateContent request"
        );
        self.transport
            .generate_content(payload.model.id(), &payload.body)
            .await
    }
}

#[async_trait]
impl SpeechBackend for TtsClient {
    async fn generate_content(&self, payload: &SpeechPayload) -> Result<GenerateContentResponse> {
        self.synthesize(payload).await
    }
}

pub struct TtsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    proxy_url: Option<String>,
    timeout_secs: u64,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            proxy_url: None,
            timeout_secs: 120,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn maybe_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Override base URL (primarily for testing with mock servers)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn proxy_url(mut self, url: Option<String>) -> Self {
        self.proxy_url = url;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs.max(1);
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "Google Gemini API key required",
                    ErrorContext::new()
                        .with_field_path(API_KEY_ENV)
                        .with_source("tts_client_builder"),
                )
            })?;
        if api_key.chars().any(char::is_whitespace) {
            return Err(Error::configuration_with_context(
                "API key must not contain whitespace",
                ErrorContext::new()
                    .with_field_path(API_KEY_ENV)
                    .with_source("tts_client_builder"),
            ));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let transport = HttpTransport::new(
            base_url,
            api_key,
            Duration::from_secs(self.timeout_secs),
            self.proxy_url.as_deref(),
        )?;
        Ok(TtsClient { transport })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
