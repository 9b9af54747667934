//! Input text validation.

use crate::{Error, ErrorContext, Result};

/// Ceiling on the estimated token count of one request.
pub const DEFAULT_TOKEN_CEILING: usize = 32_000;

/// Rough token estimate: one token per four characters.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4
}

/// Reject empty text and text whose estimate exceeds `ceiling`.
///
/// Returns the estimate on success so callers can display it.
pub fn validate_text(text: &str, ceiling: usize) -> Result<usize> {
    if text.trim().is_empty() {
        return Err(Error::validation_with_context(
            "Text cannot be empty",
            ErrorContext::new()
                .with_field_path("request.text")
                .with_source("request_builder"),
        ));
    }

    let estimated = estimate_tokens(text);
    if estimated > ceiling {
        return Err(Error::validation_with_context(
            format!(
                "Text is too long (estimated {} tokens, max {})",
                estimated, ceiling
            ),
            ErrorContext::new()
                .with_field_path("request.text")
                .with_details(format!("estimated_tokens={}, ceiling={}", estimated, ceiling))
                .with_source("request_builder"),
        ));
    }

    Ok(estimated)
}
