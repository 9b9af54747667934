//! Response envelope decoding.
//!
//! `candidates[0].content.parts[*].inlineData` carries base64 PCM with a mime
//! type such as `audio/L16;codec=pcm;rate=24000`.

use crate::audio::{AudioResult, SAMPLE_RATE};
use crate::types::{GenerateContentResponse, InlineData};
use crate::{Error, ErrorContext, Result};
use base64::Engine as _;

/// Extracts audio from a `generateContent` response.
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoder;

impl ResponseDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, response: &GenerateContentResponse) -> Result<AudioResult> {
        let candidate = response.candidates.first().ok_or_else(|| {
            let reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref());
            empty(
                match reason {
                    Some(r) => format!("Response contained no candidates (blocked: {})", r),
                    None => "Response contained no candidates".to_string(),
                },
                "candidates",
            )
        })?;

        let finish = candidate
            .finish_reason
            .as_deref()
            .filter(|r| *r != "STOP")
            .map(|r| format!(" (finish reason: {})", r))
            .unwrap_or_default();

        let parts = candidate
            .content
            .as_ref()
            .map(|c| c.parts.as_slice())
            .unwrap_or_default();
        if parts.is_empty() {
            return Err(empty(
                format!("Candidate contained no content parts{}", finish),
                "candidates[0].content.parts",
            ));
        }

        let inline = parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .ok_or_else(|| {
                empty(
                    format!("Candidate contained no inline audio data{}", finish),
                    "candidates[0].content.parts[].inlineData",
                )
            })?;

        check_mime_type(inline)?;

        let pcm = base64::engine::general_purpose::STANDARD
            .decode(inline.data.trim())
            .map_err(|e| {
                empty(
                    format!("Inline audio data is not valid base64: {}", e),
                    "candidates[0].content.parts[].inlineData.data",
                )
            })?;
        if pcm.is_empty() {
            return Err(empty(
                format!("Inline audio data is empty{}", finish),
                "candidates[0].content.parts[].inlineData.data",
            ));
        }
        if pcm.len() % 2 != 0 {
            return Err(Error::unsupported_format_with_context(
                format!("{} bytes is not a whole number of 16-bit samples", pcm.len()),
                ErrorContext::new()
                    .with_field_path("candidates[0].content.parts[].inlineData.data")
                    .with_source("response_decoder"),
            ));
        }

        Ok(AudioResult::pcm16_mono(pcm))
    }
}

fn empty(message: String, field: &str) -> Error {
    Error::empty_response_with_context(
        message,
        ErrorContext::new()
            .with_field_path(field)
            .with_source("response_decoder"),
    )
}

/// Accepts an absent mime type; otherwise requires 16-bit PCM at 24 kHz.
fn check_mime_type(inline: &InlineData) -> Result<()> {
    let mime = inline.mime_type.trim();
    if mime.is_empty() {
        return Ok(());
    }

    let mut params = mime.split(';').map(str::trim);
    let essence = params.next().unwrap_or_default().to_ascii_lowercase();
    let supported = essence == "audio/l16" || essence == "audio/pcm";
    let rate = params
        .filter_map(|p| p.split_once('='))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("rate"))
        .map(|(_, v)| v.trim().parse::<u32>());

    let rate_ok = match rate {
        None => true,
        Some(Ok(r)) => r == SAMPLE_RATE,
        Some(Err(_)) => false,
    };

    if supported && rate_ok {
        Ok(())
    } else {
        Err(Error::unsupported_format_with_context(
            format!(
                "Expected 16-bit PCM at {} Hz, got '{}'",
                SAMPLE_RATE, inline.mime_type
            ),
            ErrorContext::new()
                .with_field_path("candidates[0].content.parts[].inlineData.mimeType")
                .with_source("response_decoder"),
        ))
    }
}
