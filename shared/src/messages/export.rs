//! Export endpoint messages

use serde::{Deserialize, Serialize};

use crate::types::ExportFormat;

/// Body of `POST /save`; the success response is the raw file bytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub jokes: Vec<String>,
    pub format: ExportFormat,
}
