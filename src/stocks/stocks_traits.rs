use async_trait::async_trait;

use super::stocks_model::{NewStock, Stock};
use crate::Result;

/// Contract for the external record store. Insertion assigns `id` and
/// `created_at`; reads return the full set ordered by creation time, oldest
/// first. Store failures surface as an opaque [`super::StockError::Store`],
/// never interpreted beyond "failed".
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    /// Inserts one record and returns it with store-assigned fields.
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;

    /// Inserts a batch in a single call; either every record is written or
    /// none is. Returns the inserted count.
    async fn create_stocks(&self, new_stocks: Vec<NewStock>) -> Result<usize>;

    /// Returns every record, ordered by `created_at` ascending.
    async fn get_stocks(&self) -> Result<Vec<Stock>>;
}

/// Trait defining the contract for stock record operations.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;
    async fn create_stocks(&self, new_stocks: Vec<NewStock>) -> Result<usize>;
    async fn get_stocks(&self) -> Result<Vec<Stock>>;
}
