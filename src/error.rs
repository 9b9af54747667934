use crate::error_code::{FailureKind, RemoteErrorClass};
use crate::transport::TransportError;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "request.text", "settings.last_date")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected value, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "request_builder", "response_decoder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for voicegen.
///
/// Every variant maps onto exactly one [`FailureKind`], which is what callers
/// show to the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Remote error: HTTP {status} ({class}): {message}")]
    Remote {
        status: u16,
        class: RemoteErrorClass,
        message: String,
    },

    #[error("Empty response: {message}{}", format_context(.context))]
    EmptyResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("Unsupported audio format: {message}{}", format_context(.context))]
    UnsupportedFormat {
        message: String,
        context: ErrorContext,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new empty-response error with structured context
    pub fn empty_response_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::EmptyResponse {
            message: msg.into(),
            context,
        }
    }

    /// Create a new unsupported-format error with structured context
    pub fn unsupported_format_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::UnsupportedFormat {
            message: msg.into(),
            context,
        }
    }

    pub fn io_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::IoWrite {
            path: path.into(),
            source,
        }
    }

    /// The user-facing failure category of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Validation { .. } => FailureKind::Validation,
            Error::Configuration { .. } | Error::Serialization(_) => FailureKind::Configuration,
            Error::Transport(_) | Error::Remote { .. } => FailureKind::Transport,
            Error::EmptyResponse { .. } => FailureKind::EmptyResponse,
            Error::UnsupportedFormat { .. } => FailureKind::UnsupportedFormat,
            Error::IoWrite { .. } | Error::Io(_) => FailureKind::IoWrite,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. }
            | Error::Configuration { context, .. }
            | Error::EmptyResponse { context, .. }
            | Error::UnsupportedFormat { context, .. } => Some(context),
            _ => None,
        }
    }
}
