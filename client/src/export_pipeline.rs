//! Export pipeline: result set + format in, saved file out

use std::path::PathBuf;
use tracing::debug;

use shared::{ExportFormat, ExportRequest};
use crate::core::{DownloadedFile, status_messages};
use crate::error::{ClientError, ClientResult};
use crate::traits::{ComedyApi, FileSink};

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub format: ExportFormat,
    pub path: PathBuf,
    pub size: usize,
}

/// Export `results` through the service and hand the bytes to `sink`.
///
/// An empty result set fails locally without touching the service.
pub async fn export_results<A, F>(
    api: &A,
    sink: &F,
    results: &[String],
    format: ExportFormat,
) -> ClientResult<SavedFile>
where
    A: ComedyApi + ?Sized,
    F: FileSink + ?Sized,
{
    if results.is_empty() {
        return Err(ClientError::Precondition {
            message: status_messages::EXPORT_NOTHING_TO_SAVE.to_string(),
        });
    }

    let request = ExportRequest {
        jokes: results.to_vec(),
        format,
    };
    let bytes = api.export(&request).await?;
    debug!("Export returned {} bytes as {}", bytes.len(), format);

    let file = DownloadedFile::new(format, bytes);
    let path = sink.deliver(&file).await?;

    Ok(SavedFile {
        filename: file.filename,
        format,
        path,
        size: file.bytes.len(),
    })
}
