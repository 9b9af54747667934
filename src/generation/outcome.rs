use crate::error_code::FailureKind;
use crate::Error;
use std::path::PathBuf;

/// Terminal result of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success {
        output_path: PathBuf,
        bytes_written: u64,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

impl GenerationOutcome {
    pub fn from_error(err: &Error) -> Self {
        GenerationOutcome::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        match self {
            GenerationOutcome::Success { output_path, .. } => Some(output_path),
            GenerationOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            GenerationOutcome::Failure { kind, .. } => Some(*kind),
            GenerationOutcome::Success { .. } => None,
        }
    }
}

impl From<Error> for GenerationOutcome {
    fn from(err: Error) -> Self {
        GenerationOutcome::from_error(&err)
    }
}
