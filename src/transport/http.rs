use crate::error_code::RemoteErrorClass;
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, ErrorContext, Result};
use reqwest::Proxy;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// HTTP client for the `generateContent` endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
        proxy_url: Option<&str>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(15))
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    ErrorContext::new().with_field_path("VOICEGEN_PROXY_URL"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    pub async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::from(e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::from(e)))?;

        if !status.is_success() {
            return Err(remote_error(status.as_u16(), &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            Error::empty_response_with_context(
                format!("Malformed response envelope: {}", e),
                ErrorContext::new().with_source("http_transport"),
            )
        })
    }
}

/// Builds `Error::Remote` from a Google-style error body:
/// `{"error": {"code", "message", "status", "details": [{"reason"}]}}`.
fn remote_error(status: u16, body: &[u8]) -> Error {
    let parsed: Option<serde_json::Value> = serde_json::from_slice(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));

    let rpc_status = error
        .and_then(|e| e.get("status"))
        .and_then(|s| s.as_str());
    let reason = error
        .and_then(|e| e.get("details"))
        .and_then(|d| d.as_array())
        .and_then(|details| {
            details
                .iter()
                .find_map(|d| d.get("reason").and_then(|r| r.as_str()))
        });
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(String::from)
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());

    Error::Remote {
        status,
        class: RemoteErrorClass::classify(status, rpc_status, reason),
        message,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("could not connect: {0}")]
    Connect(reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e)
        } else if e.is_connect() {
            TransportError::Connect(e)
        } else {
            TransportError::Http(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_interpolates_model() {
        let t = HttpTransport::new(
            "https://example.test/",
            "k",
            Duration::from_secs(5),
            None,
        )
        .unwrap();
        assert_eq!(
            t.endpoint("gemini-2.5-flash-preview-tts"),
            "https://example.test/v1beta/models/gemini-2.5-flash-preview-tts:generateContent"
        );
    }

    #[test]
    fn google_error_body_is_classified() {
        let body = br#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT","details":[{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"API_KEY_INVALID"}]}}"#;
        match remote_error(400, body) {
            Error::Remote {
                status,
                class,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(class, RemoteErrorClass::Authentication);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn plain_text_error_body_is_kept() {
        match remote_error(502, b"Bad Gateway\n") {
            Error::Remote { class, message, .. } => {
                assert_eq!(class, RemoteErrorClass::ServerError);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
