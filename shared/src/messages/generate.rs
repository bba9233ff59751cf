//! Generate endpoint messages

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::{Darkness, OutputType, Tone, TransitionType};

/// Body of `POST /generate`
///
/// `transition_type` is always present on the wire and is `null` for every
/// output type other than routines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub tone: Tone,
    pub output_type: OutputType,
    pub transition_type: Option<TransitionType>,
    pub madness: f64,
    pub darkness: Darkness,
    pub num_jokes: u8,
}

/// Success body of `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub jokes: Vec<String>,
}

impl GenerateResponse {
    pub fn from_json(body: &str) -> SharedResult<Self> {
        serde_json::from_str(body).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }
}

/// Failure body of any endpoint; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorResponse {
    /// Extract the service-provided detail, tolerating bodies that are not JSON
    pub fn detail_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.detail)
            .filter(|detail| !detail.is_empty())
    }
}
