use crate::request::SpeechPayload;
use crate::types::GenerateContentResponse;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can turn a [`SpeechPayload`] into a response envelope.
///
/// Implemented by [`super::TtsClient`] for the real service; tests plug in
/// canned responses.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    async fn generate_content(&self, payload: &SpeechPayload) -> Result<GenerateContentResponse>;
}

#[async_trait]
impl<T: SpeechBackend + ?Sized> SpeechBackend for Arc<T> {
    async fn generate_content(&self, payload: &SpeechPayload) -> Result<GenerateContentResponse> {
        (**self).generate_content(payload).await
    }
}
