use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::stocks_errors::StockError;
use super::stocks_model::{NewStock, Stock};
use super::stocks_traits::StockRepositoryTrait;
use crate::Result;

/// In-memory implementation of the record store gateway. Assigns UUID ids
/// and creation timestamps the way the hosted store would; used when
/// embedding the engine without a backend and throughout the tests.
#[derive(Default)]
pub struct MemoryStockRepository {
    records: RwLock<Vec<Stock>>,
}

impl MemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn materialize(new_stock: NewStock) -> Stock {
        Stock {
            id: Uuid::new_v4().to_string(),
            owner_id: new_stock.owner_id,
            item_name: new_stock.item_name,
            item_code: new_stock.item_code,
            purchase_price: new_stock.purchase_price,
            selling_price: new_stock.selling_price,
            quantity: new_stock.quantity,
            stock_value: new_stock.stock_value,
            created_at: Utc::now(),
        }
    }
}

fn lock_error<E>(_: E) -> StockError {
    StockError::Store("stock store lock is poisoned".to_string())
}

#[async_trait]
impl StockRepositoryTrait for MemoryStockRepository {
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock> {
        new_stock.validate()?;
        let stock = Self::materialize(new_stock);
        let mut records = self.records.write().map_err(lock_error)?;
        records.push(stock.clone());
        debug!("Inserted stock record {}", stock.id);
        Ok(stock)
    }

    async fn create_stocks(&self, new_stocks: Vec<NewStock>) -> Result<usize> {
        // The whole batch is checked before anything is written; one bad
        // record fails the insert with no partial state.
        for new_stock in &new_stocks {
            new_stock.validate()?;
        }
        let mut records = self.records.write().map_err(lock_error)?;
        let count = new_stocks.len();
        records.extend(new_stocks.into_iter().map(Self::materialize));
        debug!("Inserted {} stock records", count);
        Ok(count)
    }

    async fn get_stocks(&self) -> Result<Vec<Stock>> {
        let records = self.records.read().map_err(lock_error)?;
        let mut stocks = records.clone();
        stocks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(stocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_stock(name: &str, code: &str) -> NewStock {
        NewStock::new("u-1", name, code, dec!(2.5), dec!(5), 4)
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamp() {
        let repository = MemoryStockRepository::new();
        let stock = repository
            .create_stock(new_stock("Red Car", "RC-01"))
            .await
            .unwrap();
        assert!(!stock.id.is_empty());
        assert_eq!(stock.stock_value, dec!(10.00));
    }

    #[tokio::test]
    async fn reads_come_back_oldest_first() {
        let repository = MemoryStockRepository::new();
        for (name, code) in [("Red Car", "RC-01"), ("Blue Train", "BT-07"), ("Kite", "KT-03")] {
            repository.create_stock(new_stock(name, code)).await.unwrap();
        }
        let stocks = repository.get_stocks().await.unwrap();
        let names: Vec<&str> = stocks.iter().map(|s| s.item_name.as_str()).collect();
        assert_eq!(names, ["Red Car", "Blue Train", "Kite"]);
    }

    #[tokio::test]
    async fn invalid_record_is_rejected() {
        let repository = MemoryStockRepository::new();
        let result = repository.create_stock(new_stock("", "RC-01")).await;
        assert!(result.is_err());
        assert!(repository.get_stocks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn batch_insert_is_all_or_nothing() {
        let repository = MemoryStockRepository::new();
        let batch = vec![
            new_stock("Red Car", "RC-01"),
            new_stock("", "BT-07"),
            new_stock("Kite", "KT-03"),
        ];
        assert!(repository.create_stocks(batch).await.is_err());
        assert!(repository.get_stocks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn batch_insert_reports_count() {
        let repository = MemoryStockRepository::new();
        let batch = vec![new_stock("Red Car", "RC-01"), new_stock("Kite", "KT-03")];
        assert_eq!(repository.create_stocks(batch).await.unwrap(), 2);
        assert_eq!(repository.get_stocks().await.unwrap().len(), 2);
    }
}
