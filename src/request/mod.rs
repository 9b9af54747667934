//! 请求构建模块：把用户选择（文本、音色、模型、语言）整理成一次 Gemini TTS 请求。
//!
//! # Request Module
//!
//! Pure transforms from user input to a validated [`SpeechPayload`]:
//!
//! | Item | Description |
//! |------|-------------|
//! | [`GenerationRequest`] | One user action: text, speaker mode, model, language |
//! | [`StructuredPrompt`] | Profile / scene / director's notes / transcript composition |
//! | [`RequestBuilder`] | Validation + payload shaping |
//! | [`estimate_tokens`] | `chars / 4` token estimate used for the size ceiling |
//!
//! ## Example
//!
//! ```rust
//! use voicegen::request::{GenerationRequest, RequestBuilder};
//! use voicegen::types::Voice;
//!
//! let request = GenerationRequest::single("Hello there", Voice::Puck);
//! let payload = RequestBuilder::new().build(&request).unwrap();
//! assert_eq!(payload.body.speaker_config_count(), 1);
//! ```

mod builder;
mod prompt;
mod types;
mod validation;

pub use builder::{RequestBuilder, SpeechPayload};
pub use prompt::StructuredPrompt;
pub use types::{GenerationRequest, SpeakerBinding, SpeakerMode};
pub use validation::{estimate_tokens, validate_text, DEFAULT_TOKEN_CEILING};
