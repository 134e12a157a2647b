use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::stocks_errors::StockError;
use super::stocks_valuation::{parse_decimal, parse_quantity, preview_stock_value, stock_value};

/// One persisted inventory line. `stock_value` is derived from the purchase
/// price and quantity at write time and stored alongside them; `id` and
/// `created_at` are assigned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub owner_id: String,
    pub item_name: String,
    pub item_code: String,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub quantity: i64,
    pub stock_value: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a stock record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    pub owner_id: String,
    pub item_name: String,
    pub item_code: String,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub quantity: i64,
    pub stock_value: Decimal,
}

impl NewStock {
    /// Builds an input record, deriving `stock_value` from the purchase price
    /// and quantity. Both the manual form and the spreadsheet normalizer go
    /// through here, so the derived value can never disagree with its inputs.
    pub fn new(
        owner_id: impl Into<String>,
        item_name: impl Into<String>,
        item_code: impl Into<String>,
        purchase_price: Decimal,
        selling_price: Decimal,
        quantity: i64,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            item_name: item_name.into(),
            item_code: item_code.into(),
            purchase_price,
            selling_price,
            quantity,
            stock_value: stock_value(purchase_price, quantity),
        }
    }

    /// Validates the new stock data
    pub fn validate(&self) -> Result<(), StockError> {
        if self.item_name.trim().is_empty() {
            return Err(StockError::InvalidData(
                "Item name cannot be empty".to_string(),
            ));
        }
        if self.item_code.trim().is_empty() {
            return Err(StockError::InvalidData(
                "Item code cannot be empty".to_string(),
            ));
        }
        if self.purchase_price.is_sign_negative() {
            return Err(StockError::InvalidData(
                "Purchase price cannot be negative".to_string(),
            ));
        }
        if self.selling_price.is_sign_negative() {
            return Err(StockError::InvalidData(
                "Selling price cannot be negative".to_string(),
            ));
        }
        if self.quantity < 0 {
            return Err(StockError::InvalidData(
                "Quantity cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Raw manual-entry form state, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockForm {
    pub item_name: String,
    pub item_code: String,
    pub purchase_price: String,
    pub selling_price: String,
    pub quantity: String,
}

impl StockForm {
    /// Live stock-value preview shown under the form fields.
    pub fn preview_value(&self) -> Decimal {
        preview_stock_value(&self.purchase_price, &self.quantity)
    }

    /// Strict conversion for submission: unlike the forgiving spreadsheet
    /// path, every field must be present and parseable or nothing is written.
    /// Name and code are trimmed before the record is built.
    pub fn into_new_stock(self, owner_id: &str) -> Result<NewStock, StockError> {
        let item_name = self.item_name.trim().to_string();
        let item_code = self.item_code.trim().to_string();
        if item_name.is_empty() {
            return Err(StockError::InvalidData("Item name is required".to_string()));
        }
        if item_code.is_empty() {
            return Err(StockError::InvalidData("Item code is required".to_string()));
        }
        let purchase_price = parse_decimal(&self.purchase_price).ok_or_else(|| {
            StockError::InvalidData(format!(
                "Invalid purchase price: '{}'",
                self.purchase_price
            ))
        })?;
        let selling_price = parse_decimal(&self.selling_price).ok_or_else(|| {
            StockError::InvalidData(format!("Invalid selling price: '{}'", self.selling_price))
        })?;
        let quantity = parse_quantity(&self.quantity)
            .ok_or_else(|| StockError::InvalidData(format!("Invalid quantity: '{}'", self.quantity)))?;

        let new_stock = NewStock::new(
            owner_id,
            item_name,
            item_code,
            purchase_price,
            selling_price,
            quantity,
        );
        new_stock.validate()?;
        Ok(new_stock)
    }
}
