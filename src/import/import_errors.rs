use std::io;

use thiserror::Error;

/// Custom error type for spreadsheet ingestion
#[derive(Debug, Error)]
pub enum ImportError {
    /// The uploaded file could not be decoded as a spreadsheet
    #[error("Could not read spreadsheet: {0}")]
    Parse(String),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// Every ingested row failed validation; nothing was written
    #[error("No valid data found in spreadsheet")]
    EmptyBatch,

    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),
}

impl From<calamine::Error> for ImportError {
    fn from(error: calamine::Error) -> Self {
        ImportError::Parse(error.to_string())
    }
}

impl From<ImportError> for String {
    fn from(error: ImportError) -> Self {
        error.to_string()
    }
}
