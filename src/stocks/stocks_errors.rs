use thiserror::Error;

/// Custom error type for stock-related operations
#[derive(Debug, Error)]
pub enum StockError {
    /// Opaque failure from the record store; the engine never interprets
    /// the underlying cause beyond "failed".
    #[error("Record store error: {0}")]
    Store(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<StockError> for String {
    fn from(error: StockError) -> Self {
        error.to_string()
    }
}
