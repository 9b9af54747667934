//! Request shaping.

use super::types::{GenerationRequest, SpeakerBinding, SpeakerMode};
use super::validation::{validate_text, DEFAULT_TOKEN_CEILING};
use crate::types::{
    Content, GenerateContentRequest, GenerationConfig, MultiSpeakerVoiceConfig,
    SpeakerVoiceConfig, SpeechConfig, TtsModel, VoiceConfig,
};
use crate::{Error, ErrorContext, Result};

/// Maximum number of speakers the multi-speaker config accepts.
pub const MAX_SPEAKERS: usize = 2;

/// A validated request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechPayload {
    pub model: TtsModel,
    pub body: GenerateContentRequest,
    pub estimated_tokens: usize,
}

impl SpeechPayload {
    pub fn is_multi_speaker(&self) -> bool {
        self.body
            .generation_config
            .speech_config
            .multi_speaker_voice_config
            .is_some()
    }
}

/// Turns a [`GenerationRequest`] into a [`SpeechPayload`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    token_ceiling: usize,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            token_ceiling: DEFAULT_TOKEN_CEILING,
        }
    }

    pub fn token_ceiling(mut self, ceiling: usize) -> Self {
        self.token_ceiling = ceiling;
        self
    }

    pub fn build(&self, request: &GenerationRequest) -> Result<SpeechPayload> {
        let estimated_tokens = validate_text(&request.text, self.token_ceiling)?;

        let mut speech_config = match &request.mode {
            SpeakerMode::Single { voice } => SpeechConfig {
                voice_config: Some(VoiceConfig::prebuilt(voice.as_str())),
                ..SpeechConfig::default()
            },
            SpeakerMode::Multi { speakers } => SpeechConfig {
                multi_speaker_voice_config: Some(MultiSpeakerVoiceConfig {
                    speaker_voice_configs: speaker_configs(speakers)?,
                }),
                ..SpeechConfig::default()
            },
        };
        speech_config.language_code = request.language.map(|l| l.code().to_string());

        Ok(SpeechPayload {
            model: request.model,
            body: GenerateContentRequest {
                contents: vec![Content::user_text(request.text.trim())],
                generation_config: GenerationConfig {
                    response_modalities: vec!["AUDIO".to_string()],
                    speech_config,
                },
            },
            estimated_tokens,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bindings past the second are dropped; blank names become `Speaker1` / `Speaker2`.
fn speaker_configs(speakers: &[SpeakerBinding]) -> Result<Vec<SpeakerVoiceConfig>> {
    if speakers.len() > MAX_SPEAKERS {
        tracing::debug!(
            given = speakers.len(),
            kept = MAX_SPEAKERS,
            "dropping surplus speakers"
        );
    }

    let configs: Vec<SpeakerVoiceConfig> = speakers
        .iter()
        .take(MAX_SPEAKERS)
        .enumerate()
        .map(|(i, s)| {
            let name = s.name.trim();
            SpeakerVoiceConfig {
                speaker: if name.is_empty() {
                    format!("Speaker{}", i + 1)
                } else {
                    name.to_string()
                },
                voice_config: VoiceConfig::prebuilt(s.voice.as_str()),
            }
        })
        .collect();

    if configs.len() != MAX_SPEAKERS {
        return Err(Error::validation_with_context(
            format!(
                "Multi-speaker mode needs exactly {} speakers, got {}",
                MAX_SPEAKERS,
                configs.len()
            ),
            ErrorContext::new()
                .with_field_path("request.mode.speakers")
                .with_source("request_builder"),
        ));
    }
    if configs[0].speaker == configs[1].speaker {
        return Err(Error::validation_with_context(
            format!("Speaker names must differ (both are '{}')", configs[0].speaker),
            ErrorContext::new()
                .with_field_path("request.mode.speakers")
                .with_source("request_builder"),
        ));
    }

    Ok(configs)
}
