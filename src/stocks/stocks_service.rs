use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::stocks_model::{NewStock, Stock};
use super::stocks_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::Result;

/// Service for managing stock records
pub struct StockService {
    repository: Arc<dyn StockRepositoryTrait>,
}

impl StockService {
    /// Creates a new StockService instance over the injected store gateway
    pub fn new(repository: Arc<dyn StockRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl StockServiceTrait for StockService {
    /// Validates and persists one record
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock> {
        new_stock.validate()?;
        let stock = self.repository.create_stock(new_stock).await?;
        debug!("Created stock record {}", stock.id);
        Ok(stock)
    }

    /// Persists a batch as a single atomic insert
    async fn create_stocks(&self, new_stocks: Vec<NewStock>) -> Result<usize> {
        let count = self.repository.create_stocks(new_stocks).await?;
        debug!("Created {} stock records", count);
        Ok(count)
    }

    /// Retrieves every record, oldest first
    async fn get_stocks(&self) -> Result<Vec<Stock>> {
        self.repository.get_stocks().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::stocks_repository::MemoryStockRepository;
    use rust_decimal_macros::dec;

    fn service() -> StockService {
        StockService::new(Arc::new(MemoryStockRepository::new()))
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_the_store() {
        let service = service();
        let invalid = NewStock::new("u-1", "", "RC-01", dec!(1), dec!(2), 1);
        assert!(service.create_stock(invalid).await.is_err());
        assert!(service.get_stocks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_returns_stored_record() {
        let service = service();
        let stock = service
            .create_stock(NewStock::new("u-1", "Red Car", "RC-01", dec!(2.5), dec!(5), 4))
            .await
            .unwrap();
        assert!(!stock.id.is_empty());
        assert_eq!(stock.stock_value, dec!(10.00));
    }
}
