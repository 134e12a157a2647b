//! Column labels shared by the ingestion normalizer and the exports.
//!
//! The display-cased labels are written by the spreadsheet export and are the
//! first alias accepted by the ingestion normalizer; the snake-cased variants
//! cover files produced by other tools.

/// Display label for the item name column
pub const ITEM_NAME_LABEL: &str = "Item Name";

/// Display label for the item code column
pub const ITEM_CODE_LABEL: &str = "Item Code";

/// Display label for the purchase price column
pub const PURCHASE_PRICE_LABEL: &str = "Purchase Price";

/// Display label for the selling price column
pub const SELLING_PRICE_LABEL: &str = "Selling Price";

/// Display label for the quantity column
pub const QUANTITY_LABEL: &str = "Quantity";

/// Display label for the derived stock value column
pub const STOCK_VALUE_LABEL: &str = "Stock Value";

/// Accepted labels for the item name field, in lookup order
pub const ITEM_NAME_ALIASES: [&str; 2] = [ITEM_NAME_LABEL, "item_name"];

/// Accepted labels for the item code field, in lookup order
pub const ITEM_CODE_ALIASES: [&str; 2] = [ITEM_CODE_LABEL, "item_code"];

/// Accepted labels for the purchase price field, in lookup order
pub const PURCHASE_PRICE_ALIASES: [&str; 2] = [PURCHASE_PRICE_LABEL, "purchase_price"];

/// Accepted labels for the selling price field, in lookup order
pub const SELLING_PRICE_ALIASES: [&str; 2] = [SELLING_PRICE_LABEL, "selling_price"];

/// Accepted labels for the quantity field, in lookup order
pub const QUANTITY_ALIASES: [&str; 2] = [QUANTITY_LABEL, "quantity"];

/// Column order shared by the PDF and spreadsheet exports
pub const EXPORT_COLUMNS: [&str; 6] = [
    ITEM_NAME_LABEL,
    ITEM_CODE_LABEL,
    PURCHASE_PRICE_LABEL,
    SELLING_PRICE_LABEL,
    QUANTITY_LABEL,
    STOCK_VALUE_LABEL,
];
