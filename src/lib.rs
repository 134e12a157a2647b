pub mod constants;
pub mod errors;
pub mod export;
pub mod import;
pub mod stocks;

pub use errors::{Error, Result};
pub use import::{ImportService, ImportServiceTrait, ImportSummary};
pub use stocks::{
    MemoryStockRepository, NewStock, Stock, StockForm, StockListView, StockRepositoryTrait,
    StockService, StockServiceTrait,
};
