//! Failure taxonomy and remote error classification.
//!
//! Two layers live here:
//!
//! - [`FailureKind`]: the user-facing outcome categories a generation can end in.
//!   Every [`crate::Error`] maps onto exactly one kind.
//! - [`RemoteErrorClass`]: finer classification of non-2xx answers from the
//!   speech service, derived from the HTTP status and the Google RPC status string.
//!
//! | Code  | Kind               | Recoverable by                         |
//! |-------|--------------------|----------------------------------------|
//! | E1001 | validation         | editing the input text / speakers      |
//! | E1002 | configuration      | entering a new API key                 |
//! | E2001 | transport          | checking network, key, quota           |
//! | E3001 | empty_response     | rephrasing or retrying later           |
//! | E3002 | unsupported_format | nothing locally; service changed       |
//! | E4001 | io_write           | picking another output directory       |
//!
//! ## Example
//!
//! ```rust
//! use voicegen::error_code::{FailureKind, RemoteErrorClass};
//!
//! assert_eq!(FailureKind::EmptyResponse.code(), "E3001");
//! let class = RemoteErrorClass::from_http_status(429);
//! assert_eq!(class.name(), "rate_limited");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// E1001: Empty text, text over the token ceiling, or bad speaker setup
    Validation,
    /// E1002: Missing or malformed API credential, unreadable settings
    Configuration,
    /// E2001: The external call failed outright (network, auth rejection, quota)
    Transport,
    /// E3001: The call succeeded but carried no usable audio
    EmptyResponse,
    /// E3002: The audio is not 16-bit mono PCM at 24 kHz
    UnsupportedFormat,
    /// E4001: The output file could not be created or written
    IoWrite,
}

impl FailureKind {
    /// Returns the canonical code string (e.g., `"E1001"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "E1001",
            Self::Configuration => "E1002",
            Self::Transport => "E2001",
            Self::EmptyResponse => "E3001",
            Self::UnsupportedFormat => "E3002",
            Self::IoWrite => "E4001",
        }
    }

    /// Returns the standard name (e.g., `"validation"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
            Self::Transport => "transport",
            Self::EmptyResponse => "empty_response",
            Self::UnsupportedFormat => "unsupported_format",
            Self::IoWrite => "io_write",
        }
    }

    /// Short dialog-style title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation => "Validation Error",
            Self::Configuration => "API Key Required",
            Self::Transport => "Generation Error",
            Self::EmptyResponse => "No Audio Returned",
            Self::UnsupportedFormat => "Unsupported Audio",
            Self::IoWrite => "Save Failed",
        }
    }

    /// What the user can do about it.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Validation => "Edit the text or speaker settings and try again.",
            Self::Configuration => {
                "Set your Google Gemini API key with `voicegen set-key <KEY>` or GEMINI_API_KEY."
            }
            Self::Transport => "Check your network connection, API key and quota, then retry.",
            Self::EmptyResponse => {
                "The service returned no audio. Rephrase the text or try again later."
            }
            Self::UnsupportedFormat => {
                "The service returned audio in an unexpected format; nothing was saved."
            }
            Self::IoWrite => "Choose a writable output directory with enough free space.",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Classification of an error answer from the speech service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorClass {
    InvalidRequest,
    Authentication,
    PermissionDenied,
    NotFound,
    RateLimited,
    QuotaExhausted,
    ServerError,
    Overloaded,
    Timeout,
    Unknown,
}

impl RemoteErrorClass {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::QuotaExhausted => "quota_exhausted",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a later attempt could succeed without changing the request.
    ///
    /// Nothing retries automatically today; this is reported so the caller can.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Overloaded | Self::Timeout
        )
    }

    /// Maps a Google RPC status string (`error.status` in the error body).
    pub fn from_rpc_status(status: &str) -> Option<Self> {
        let class = match status {
            "INVALID_ARGUMENT" | "FAILED_PRECONDITION" | "OUT_OF_RANGE" => Self::InvalidRequest,
            "UNAUTHENTICATED" => Self::Authentication,
            "PERMISSION_DENIED" => Self::PermissionDenied,
            "NOT_FOUND" => Self::NotFound,
            "RESOURCE_EXHAUSTED" => Self::QuotaExhausted,
            "INTERNAL" => Self::ServerError,
            "UNAVAILABLE" => Self::Overloaded,
            "DEADLINE_EXCEEDED" => Self::Timeout,
            _ => return None,
        };
        Some(class)
    }

    /// Maps an HTTP status code to the most likely class.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            429 => Self::RateLimited,
            503 => Self::Overloaded,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Prefers the RPC status when it is recognized, falls back to HTTP status.
    ///
    /// Gemini answers a bad API key with HTTP 400 and reason `API_KEY_INVALID`,
    /// which is reported as an authentication failure.
    pub fn classify(http_status: u16, rpc_status: Option<&str>, reason: Option<&str>) -> Self {
        if matches!(reason, Some("API_KEY_INVALID") | Some("API_KEY_EXPIRED")) {
            return Self::Authentication;
        }
        rpc_status
            .and_then(Self::from_rpc_status)
            .unwrap_or_else(|| Self::from_http_status(http_status))
    }
}

impl fmt::Display for RemoteErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
