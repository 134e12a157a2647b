use std::io;

use thiserror::Error;

/// Custom error type for export rendering
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("Workbook rendering failed: {0}")]
    Xlsx(String),

    #[error("Failed to write export file: {0}")]
    Io(#[from] io::Error),
}

impl From<lopdf::Error> for ExportError {
    fn from(error: lopdf::Error) -> Self {
        ExportError::Pdf(error.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Xlsx(error.to_string())
    }
}

impl From<ExportError> for String {
    fn from(error: ExportError) -> Self {
        error.to_string()
    }
}
