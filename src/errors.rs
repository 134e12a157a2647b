use thiserror::Error;

use crate::export::ExportError;
use crate::import::ImportError;
use crate::stocks::StockError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the inventory engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Stock error: {0}")]
    Stock(#[from] StockError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl From<Error> for String {
    fn from(error: Error) -> Self {
        error.to_string()
    }
}
