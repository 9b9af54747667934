//! 类型系统模块：语音目录（音色、模型、语言）与 Gemini 请求/响应信封类型。
//!
//! # Types Module
//!
//! Strongly-typed catalogs for everything a user can pick, plus the JSON
//! envelope exchanged with the Gemini `generateContent` endpoint.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Voice`] | One of the 30 prebuilt synthetic voices |
//! | [`TtsModel`] | Supported speech models (Flash / Pro) |
//! | [`Language`] | Optional locale hint (`None` means auto-detect) |
//! | [`GenerateContentRequest`] | Outgoing request body |
//! | [`GenerateContentResponse`] | Incoming response envelope |
//!
//! ## Example
//!
//! ```rust
//! use voicegen::types::{Language, TtsModel, Voice};
//!
//! let voice: Voice = "kore".parse().unwrap();
//! assert_eq!(voice.as_str(), "Kore");
//! assert_eq!(TtsModel::Pro.id(), "gemini-2.5-pro-preview-tts");
//! assert_eq!(Language::parse_optional("auto").unwrap(), None);
//! ```

pub mod content;
pub mod language;
pub mod model;
pub mod voice;

pub use content::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, MultiSpeakerVoiceConfig, Part, PrebuiltVoiceConfig, PromptFeedback,
    SpeakerVoiceConfig, SpeechConfig, VoiceConfig,
};
pub use language::Language;
pub use model::TtsModel;
pub use voice::Voice;
