use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::import_errors::ImportError;
use super::import_model::{ImportRow, ImportSummary};
use super::import_normalizer::normalize_rows;
use super::import_reader::{ensure_supported_extension, read_rows_from_bytes};
use crate::stocks::StockServiceTrait;
use crate::Result;

/// Trait defining the contract for spreadsheet ingestion operations.
#[async_trait]
pub trait ImportServiceTrait: Send + Sync {
    async fn import_workbook_bytes(&self, owner_id: &str, bytes: &[u8]) -> Result<ImportSummary>;
    async fn import_workbook_file(&self, owner_id: &str, path: &Path) -> Result<ImportSummary>;
}

/// Service for ingesting uploaded spreadsheets into the record store
pub struct ImportService {
    stock_service: Arc<dyn StockServiceTrait>,
}

impl ImportService {
    pub fn new(stock_service: Arc<dyn StockServiceTrait>) -> Self {
        Self { stock_service }
    }

    /// Normalizes the rows and writes the surviving records in one batch
    /// insert. A batch with no surviving row is rejected before the store is
    /// touched, so a junk upload cannot produce an empty write.
    async fn import_rows(&self, owner_id: &str, rows: Vec<ImportRow>) -> Result<ImportSummary> {
        let batch = normalize_rows(owner_id, &rows);
        if batch.is_empty() {
            return Err(ImportError::EmptyBatch.into());
        }
        let inserted = self.stock_service.create_stocks(batch.records).await?;
        debug!("Imported {} of {} uploaded rows", inserted, batch.total_rows);
        Ok(ImportSummary {
            total_rows: batch.total_rows,
            inserted,
        })
    }
}

#[async_trait]
impl ImportServiceTrait for ImportService {
    /// Ingests an uploaded workbook passed as raw bytes
    async fn import_workbook_bytes(&self, owner_id: &str, bytes: &[u8]) -> Result<ImportSummary> {
        let rows = read_rows_from_bytes(bytes)?;
        self.import_rows(owner_id, rows).await
    }

    /// Reads and ingests a workbook file; only `.xlsx` and `.xls` names are
    /// accepted
    async fn import_workbook_file(&self, owner_id: &str, path: &Path) -> Result<ImportSummary> {
        ensure_supported_extension(path)?;
        let bytes = tokio::fs::read(path).await.map_err(ImportError::Io)?;
        let rows = read_rows_from_bytes(&bytes)?;
        self.import_rows(owner_id, rows).await
    }
}
