pub(crate) mod import_errors;
pub(crate) mod import_model;
pub(crate) mod import_normalizer;
pub(crate) mod import_reader;
pub(crate) mod import_service;

pub use import_errors::ImportError;
pub use import_model::{ImportRow, ImportSummary, NormalizedBatch};
pub use import_normalizer::normalize_rows;
pub use import_reader::{ensure_supported_extension, read_rows_from_bytes, SUPPORTED_EXTENSIONS};
pub use import_service::{ImportService, ImportServiceTrait};
