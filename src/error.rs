//! Error type shared by the loader, the schedulers and the CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ProcessId;
use crate::validation::ValidationError;

/// Errors that can occur while loading, simulating or rendering.
///
/// None of these are recoverable inside the crate; they propagate to the
/// caller, which reports them and stops.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid args: {0}")]
    InvalidArguments(String),
    #[error("error accessing scheduling file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
    #[error("invalid process id: {0}")]
    InvalidProcessId(ProcessId),
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error("invalid process list: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimError::InvalidInput(errors)
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, SimError>;
