use serde::{Deserialize, Serialize};

use crate::stocks::NewStock;

/// One loosely-typed spreadsheet row: exact header label to scalar cell
/// value, the shape the reader hands to the normalizer.
pub type ImportRow = serde_json::Map<String, serde_json::Value>;

/// Outcome of one ingestion batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Rows materialized from the uploaded sheet
    pub total_rows: usize,
    /// Rows that passed validation and were written
    pub inserted: usize,
}

impl ImportSummary {
    /// Rows dropped by validation
    pub fn skipped(&self) -> usize {
        self.total_rows - self.inserted
    }
}

/// A normalized batch, ready for a single store insert.
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub records: Vec<NewStock>,
    pub total_rows: usize,
}

impl NormalizedBatch {
    /// True when no row survived validation
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
