//! Speech model catalog.

use crate::{Error, ErrorContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported text-to-speech models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TtsModel {
    #[default]
    #[serde(rename = "gemini-2.5-flash-preview-tts")]
    Flash,
    #[serde(rename = "gemini-2.5-pro-preview-tts")]
    Pro,
}

impl TtsModel {
    pub const ALL: [TtsModel; 2] = [TtsModel::Flash, TtsModel::Pro];

    /// Model identifier used in the endpoint path.
    pub fn id(&self) -> &'static str {
        match self {
            TtsModel::Flash => "gemini-2.5-flash-preview-tts",
            TtsModel::Pro => "gemini-2.5-pro-preview-tts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TtsModel::Flash => "Gemini 2.5 Flash TTS (Fast)",
            TtsModel::Pro => "Gemini 2.5 Pro TTS (Quality)",
        }
    }

    /// Short alias accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            TtsModel::Flash => "flash",
            TtsModel::Pro => "pro",
        }
    }
}

impl fmt::Display for TtsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TtsModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TtsModel::ALL
            .iter()
            .copied()
            .find(|m| m.id() == wanted || m.alias() == wanted)
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("Unknown model: {}", s.trim()),
                    ErrorContext::new()
                        .with_field_path("request.model")
                        .with_details("expected `flash`, `pro` or a full model id"),
                )
            })
    }
}
