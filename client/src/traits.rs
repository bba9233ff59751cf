//! Service trait definitions for dependency injection
//!
//! All I/O performed by a session goes through these traits.

use std::path::PathBuf;
use async_trait::async_trait;

use shared::{ApiFailure, ExportRequest, GenerateRequest};
use crate::core::DownloadedFile;
use crate::error::ClientResult;

/// Remote generation service
#[mockall::automock]
#[async_trait]
pub trait ComedyApi: Send + Sync {
    /// Submit a generation request and return the jokes in service order
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<String>, ApiFailure>;

    /// Convert a result set into a file of the requested format
    async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ApiFailure>;
}

/// Platform file-save primitive
#[mockall::automock]
#[async_trait]
pub trait FileSink: Send + Sync {
    /// Persist the blob under its filename and return where it landed
    async fn deliver(&self, file: &DownloadedFile) -> ClientResult<PathBuf>;
}
