//! Filesystem implementation of the file-save primitive

use std::path::PathBuf;
use async_trait::async_trait;
use tracing::debug;

use crate::core::DownloadedFile;
use crate::error::{ClientError, ClientResult};
use crate::traits::FileSink;

/// Writes exported files into a directory
#[derive(Debug, Clone)]
pub struct RealFileSink {
    output_dir: PathBuf,
}

impl RealFileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl FileSink for RealFileSink {
    async fn deliver(&self, file: &DownloadedFile) -> ClientResult<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ClientError::FileSave {
                path: self.output_dir.clone(),
                source,
            })?;

        let path = self.output_dir.join(&file.filename);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|source| ClientError::FileSave {
                path: path.clone(),
                source,
            })?;

        debug!(
            "Wrote {} bytes ({}) to {}",
            file.bytes.len(),
            file.content_type(),
            path.display()
        );
        Ok(path)
    }
}
