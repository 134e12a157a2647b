pub(crate) mod stocks_cache;
pub(crate) mod stocks_constants;
pub(crate) mod stocks_errors;
pub(crate) mod stocks_filter;
pub(crate) mod stocks_model;
pub(crate) mod stocks_repository;
pub(crate) mod stocks_service;
pub(crate) mod stocks_traits;
pub(crate) mod stocks_valuation;
pub(crate) mod stocks_view;

pub use stocks_cache::StockCache;
pub use stocks_constants::*;
pub use stocks_errors::StockError;
pub use stocks_filter::filter_stocks;
pub use stocks_model::{NewStock, Stock, StockForm};
pub use stocks_repository::MemoryStockRepository;
pub use stocks_service::StockService;
pub use stocks_traits::{StockRepositoryTrait, StockServiceTrait};
pub use stocks_valuation::{
    format_currency, format_money, preview_stock_value, stock_value, total_stock_value,
};
pub use stocks_view::StockListView;
