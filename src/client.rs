//! Speech client for the Gemini TTS service.
//!
//! Keep the public surface small: [`TtsClient`] performs one HTTP call per
//! payload, [`SpeechBackend`] is the seam the orchestrator talks through.

mod backend;
mod tts;

pub use backend::SpeechBackend;
pub use tts::{TtsClient, TtsClientBuilder, API_KEY_ENV};
