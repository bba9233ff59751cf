//! Client error types

use std::path::PathBuf;
use thiserror::Error;

use shared::{ApiFailure, SharedError};

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error types
///
/// `Transport`, `Service` and `Precondition` are terminal for a single
/// operation only; the session records them as its status and stays usable.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Service error (status {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Service { status: u16, detail: Option<String> },

    #[error("Precondition failed: {message}")]
    Precondition { message: String },

    #[error("Failed to write {path}: {source}")]
    FileSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid parameter: {0}")]
    Parameter(#[from] SharedError),
}

impl ClientError {
    pub fn config(message: impl Into<String>) -> Self {
        ClientError::Config { message: message.into() }
    }
}

impl From<ApiFailure> for ClientError {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Transport(message) => ClientError::Transport { message },
            ApiFailure::MalformedResponse(message) => ClientError::Transport {
                message: format!("malformed response: {message}"),
            },
            ApiFailure::Service { status, detail } => ClientError::Service { status, detail },
        }
    }
}
