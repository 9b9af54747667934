//! Request types.

use crate::types::{Language, TtsModel, Voice};
use std::fmt;

/// Pairing of a speaker label used in the transcript with a voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerBinding {
    pub name: String,
    pub voice: Voice,
}

impl SpeakerBinding {
    pub fn new(name: impl Into<String>, voice: Voice) -> Self {
        Self {
            name: name.into(),
            voice,
        }
    }
}

impl fmt::Display for SpeakerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.voice)
    }
}

/// Who speaks the text.
///
/// Single-speaker carries exactly one voice and no speaker names; multi-speaker
/// carries bindings, of which the first two are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerMode {
    Single { voice: Voice },
    Multi { speakers: Vec<SpeakerBinding> },
}

impl SpeakerMode {
    pub fn is_multi(&self) -> bool {
        matches!(self, SpeakerMode::Multi { .. })
    }

    /// Human-readable voice summary (`Kore` or `Alice=Kore, Bob=Puck`).
    pub fn voice_summary(&self) -> String {
        match self {
            SpeakerMode::Single { voice } => voice.to_string(),
            SpeakerMode::Multi { speakers } => speakers
                .iter()
                .take(2)
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// One generation, built fresh per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub mode: SpeakerMode,
    pub model: TtsModel,
    pub language: Option<Language>,
}

impl GenerationRequest {
    pub fn single(text: impl Into<String>, voice: Voice) -> Self {
        Self {
            text: text.into(),
            mode: SpeakerMode::Single { voice },
            model: TtsModel::default(),
            language: None,
        }
    }

    pub fn multi(text: impl Into<String>, speakers: Vec<SpeakerBinding>) -> Self {
        Self {
            text: text.into(),
            mode: SpeakerMode::Multi { speakers },
            model: TtsModel::default(),
            language: None,
        }
    }

    pub fn with_model(mut self, model: TtsModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }
}
