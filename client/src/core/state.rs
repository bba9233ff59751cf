//! Session state machine: status line plus the latest result set

use shared::{ApiFailure, ExportFormat};

use crate::error::{ClientError, ClientResult};

/// Fixed status lines shown to the user
pub mod status_messages {
    pub const GENERATE_SUCCESS: &str = "Jokes generated successfully!";
    pub const GENERATE_CONNECT_FAILED: &str = "Failed to connect to API. Make sure the backend is running.";
    pub const GENERATE_FAILED: &str = "Error generating jokes";
    pub const EXPORT_NOTHING_TO_SAVE: &str = "No jokes to save! Generate some first.";
    pub const EXPORT_FAILED: &str = "Failed to save file";
    pub const EXPORT_ERROR: &str = "Error saving file";

    pub fn export_saved(format: shared::ExportFormat) -> String {
        format!("Saved as {}", format.extension().to_uppercase())
    }
}

use status_messages::*;

/// Observable status of a session; exactly one holds at a time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SessionStatus {
    /// Current status line, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            SessionStatus::Idle | SessionStatus::Loading => None,
            SessionStatus::Success(message) | SessionStatus::Error(message) => Some(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SessionStatus::Error(_))
    }
}

/// Status and results: the whole observable state of a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    status: SessionStatus,
    results: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Latest results in the order the service returned them
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Enter `Loading`, dropping the previous results and status line
    pub fn begin_generation(&mut self) {
        self.results.clear();
        self.status = SessionStatus::Loading;
    }

    /// Leave `Loading` with the outcome of the generate call
    pub fn finish_generation(&mut self, outcome: Result<Vec<String>, ApiFailure>) -> ClientResult<usize> {
        match outcome {
            Ok(jokes) => {
                let count = jokes.len();
                self.results = jokes;
                self.status = SessionStatus::Success(GENERATE_SUCCESS.to_string());
                Ok(count)
            }
            Err(failure) => {
                let message = match &failure {
                    ApiFailure::Transport(_) | ApiFailure::MalformedResponse(_) => GENERATE_CONNECT_FAILED.to_string(),
                    ApiFailure::Service { detail, .. } => {
                        detail.clone().unwrap_or_else(|| GENERATE_FAILED.to_string())
                    }
                };
                self.status = SessionStatus::Error(message);
                Err(ClientError::from(failure))
            }
        }
    }

    /// Replace the status line with the outcome of an export; results are untouched
    pub fn record_export(&mut self, format: ExportFormat, outcome: &ClientResult<impl Sized>) {
        self.status = match outcome {
            Ok(_) => SessionStatus::Success(export_saved(format)),
            Err(ClientError::Precondition { .. }) => SessionStatus::Error(EXPORT_NOTHING_TO_SAVE.to_string()),
            Err(ClientError::Service { .. }) => SessionStatus::Error(EXPORT_FAILED.to_string()),
            Err(_) => SessionStatus::Error(EXPORT_ERROR.to_string()),
        };
    }
}
