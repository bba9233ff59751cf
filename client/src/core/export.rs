//! Export artifacts handed to the file-save sink

use shared::ExportFormat;

/// Base name of every exported file
pub const EXPORT_BASENAME: &str = "deadpandr_jokes";

/// Filename for an export of the given format
pub fn export_filename(format: ExportFormat) -> String {
    format!("{EXPORT_BASENAME}.{}", format.extension())
}

/// Byte blob returned by the export endpoint, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub filename: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl DownloadedFile {
    pub fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            filename: export_filename(format),
            format,
            bytes,
        }
    }

    /// MIME type implied by the format
    pub fn content_type(&self) -> &'static str {
        match self.format {
            ExportFormat::Txt => "text/plain; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}
