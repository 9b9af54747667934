//! # voicegen
//!
//! 基于 Google Gemini TTS 的语音生成库：把文本与音色选择整理成请求，解码返回的 PCM 音频并写出 WAV 文件。
//!
//! Text-to-speech generation on top of the Google Gemini speech models.
//!
//! ## Overview
//!
//! A generation is one pass through four stages:
//!
//! 1. [`request::RequestBuilder`] validates the text and shapes the `generateContent` body
//!    (single voice, or two speaker-voice bindings).
//! 2. [`client::TtsClient`] performs the HTTP call.
//! 3. [`response::ResponseDecoder`] pulls the inline PCM out of the response envelope.
//! 4. [`audio::write_wav`] frames the PCM as 24 kHz / 16-bit / mono WAV and renames it into place.
//!
//! [`generation::Orchestrator`] sequences these stages, reports progress and turns every
//! failure into a [`generation::GenerationOutcome::Failure`] with a [`error_code::FailureKind`].
//! [`generation::GenerationWorker`] runs it off the interactive thread.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voicegen::client::TtsClient;
//! use voicegen::generation::{Orchestrator, GenerationOutcome};
//! use voicegen::request::GenerationRequest;
//! use voicegen::types::Voice;
//!
//! #[tokio::main]
//! async fn main() -> voicegen::Result<()> {
//!     let client = TtsClient::builder().api_key("your-api-key").build()?;
//!     let orchestrator = Orchestrator::new(client, "outputs");
//!
//!     let request = GenerationRequest::single("Have a wonderful day!", Voice::Kore);
//!     let progress = |m: &str| println!("{m}");
//!     match orchestrator.generate(&request, &progress).await {
//!         GenerationOutcome::Success { output_path, .. } => println!("saved {}", output_path.display()),
//!         GenerationOutcome::Failure { kind, message } => eprintln!("{kind}: {message}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Voice / model / language catalogs and the wire envelope |
//! | [`request`] | Request validation, structured prompts, payload shaping |
//! | [`response`] | Response envelope decoding |
//! | [`audio`] | PCM audio result and WAV serialization |
//! | [`transport`] | HTTP transport and transport errors |
//! | [`client`] | Speech client and the backend seam |
//! | [`generation`] | Orchestrator, outcomes, progress, background worker |
//! | [`store`] | Settings, history log, credentials |
//! | [`config`] | Environment-driven configuration |
//! | [`utils`] | File naming and formatting helpers |

pub mod audio;
pub mod client;
pub mod config;
pub mod error_code;
pub mod generation;
pub mod request;
pub mod response;
pub mod store;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use client::{SpeechBackend, TtsClient, TtsClientBuilder};
pub use config::AppConfig;
pub use error_code::FailureKind;
pub use generation::{GenerationOutcome, GenerationWorker, Orchestrator};
pub use request::{GenerationRequest, SpeakerBinding, SpeakerMode, StructuredPrompt};
pub use types::{Language, TtsModel, Voice};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
