//! Mock Gemini server fixture shared by the integration tests.
#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mockito::{Matcher, Mock, Server, ServerGuard};
use voicegen::TtsClient;

pub const TEST_KEY: &str = "test-key";
pub const FLASH_PATH: &str = "/v1beta/models/gemini-2.5-flash-preview-tts:generateContent";

/// Test fixture that owns a mockito server.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server.
    pub fn client(&self) -> TtsClient {
        TtsClient::builder()
            .api_key(TEST_KEY)
            .base_url(&self.base_url)
            .timeout_secs(5)
            .build()
            .expect("client builds")
    }

    /// 200 response carrying `pcm` as inline audio.
    pub async fn mock_audio(&mut self, path: &str, pcm: &[u8]) -> Mock {
        let body = audio_envelope(pcm, "audio/L16;codec=pcm;rate=24000");
        self.mock_json(path, 200, &body.to_string()).await
    }

    pub async fn mock_json(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("x-goog-api-key", TEST_KEY)
            .match_header("content-type", Matcher::Regex("application/json".into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn audio_envelope(pcm: &[u8], mime_type: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{
                    "inlineData": {
                        "mimeType": mime_type,
                        "data": STANDARD.encode(pcm)
                    }
                }]
            },
            "finishReason": "STOP"
        }]
    })
}

/// `n` bytes of a simple ramp, little-endian 16-bit.
pub fn pcm_ramp(n: usize) -> Vec<u8> {
    (0..n / 2)
        .flat_map(|i| ((i % 2000) as i16 - 1000).to_le_bytes())
        .collect()
}
