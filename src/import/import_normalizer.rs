use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use super::import_model::{ImportRow, NormalizedBatch};
use crate::stocks::stocks_constants::{
    ITEM_CODE_ALIASES, ITEM_NAME_ALIASES, PURCHASE_PRICE_ALIASES, QUANTITY_ALIASES,
    SELLING_PRICE_ALIASES,
};
use crate::stocks::stocks_valuation::{parse_decimal, parse_quantity};
use crate::stocks::NewStock;

/// Normalizes one ingestion batch into validated stock records owned by the
/// given user.
///
/// Header aliases are tried in order, human-readable label first. Rows whose
/// name or code is missing or blank after coercion are dropped silently; the
/// operation reports how many survived, never which. Bad numeric cells fall
/// back to zero and on their own never invalidate a row.
pub fn normalize_rows(owner_id: &str, rows: &[ImportRow]) -> NormalizedBatch {
    let mut records = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match normalize_row(owner_id, row) {
            Some(record) => records.push(record),
            None => debug!("Dropping row {}: missing item name or code", index + 1),
        }
    }
    NormalizedBatch {
        records,
        total_rows: rows.len(),
    }
}

/// Normalizes a single row; `None` when it has no usable name or code.
fn normalize_row(owner_id: &str, row: &ImportRow) -> Option<NewStock> {
    let item_name = resolve_text(row, &ITEM_NAME_ALIASES)?;
    let item_code = resolve_text(row, &ITEM_CODE_ALIASES)?;
    let purchase_price = resolve_decimal(row, &PURCHASE_PRICE_ALIASES);
    let selling_price = resolve_decimal(row, &SELLING_PRICE_ALIASES);
    let quantity = resolve_integer(row, &QUANTITY_ALIASES);
    Some(NewStock::new(
        owner_id,
        item_name,
        item_code,
        purchase_price,
        selling_price,
        quantity,
    ))
}

/// First alias whose cell coerces to non-blank text wins. A present but
/// blank cell falls through to the next alias.
fn resolve_text(row: &ImportRow, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|label| row.get(*label).and_then(coerce_text))
}

fn coerce_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// First alias with a present cell wins; an unparsable cell defaults to zero
/// rather than falling through or invalidating the row.
fn resolve_decimal(row: &ImportRow, aliases: &[&str]) -> Decimal {
    aliases
        .iter()
        .find_map(|label| row.get(*label))
        .and_then(coerce_decimal)
        .unwrap_or(Decimal::ZERO)
}

fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Some(Decimal::from(integer))
            } else {
                number.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(text) => parse_decimal(text),
        _ => None,
    }
}

fn resolve_integer(row: &ImportRow, aliases: &[&str]) -> i64 {
    aliases
        .iter()
        .find_map(|label| row.get(*label))
        .and_then(coerce_integer)
        .unwrap_or(0)
}

/// Integer coercion truncates fractional values toward zero, the same rule
/// the manual form applies to quantities.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Some(integer)
            } else {
                number.as_f64().map(|float| float.trunc() as i64)
            }
        }
        Value::String(text) => parse_quantity(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::stock_value;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn row(value: Value) -> ImportRow {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn mixed_label_row_normalizes() {
        let rows = vec![row(json!({
            "Item Name": "Red Car",
            "item_code": "RC-01",
            "Purchase Price": "5",
            "Selling Price": "8",
            "Quantity": "10",
        }))];
        let batch = normalize_rows("u-1", &rows);
        assert_eq!(batch.total_rows, 1);
        assert_eq!(batch.records.len(), 1);

        let record = &batch.records[0];
        assert_eq!(record.item_name, "Red Car");
        assert_eq!(record.item_code, "RC-01");
        assert_eq!(record.purchase_price, dec!(5));
        assert_eq!(record.selling_price, dec!(8));
        assert_eq!(record.quantity, 10);
        assert_eq!(record.stock_value, dec!(50.00));
        assert_eq!(record.owner_id, "u-1");
    }

    #[test]
    fn snake_case_numeric_labels_resolve() {
        let rows = vec![row(json!({
            "item_name": "Blue Train",
            "item_code": "BT-07",
            "purchase_price": "2.5",
            "selling_price": "5",
            "quantity": "4",
        }))];
        let record = &normalize_rows("u-1", &rows).records[0];
        assert_eq!(record.purchase_price, dec!(2.5));
        assert_eq!(record.selling_price, dec!(5));
        assert_eq!(record.quantity, 4);
    }

    #[test]
    fn rows_missing_name_or_code_are_dropped() {
        let rows = vec![
            row(json!({"Item Name": "Red Car", "Item Code": "RC-01"})),
            row(json!({"Item Name": "No Code"})),
            row(json!({"Item Name": "Kite", "Item Code": "KT-03"})),
        ];
        let batch = normalize_rows("u-1", &rows);
        assert_eq!(batch.total_rows, 3);
        assert_eq!(batch.records.len(), 2);
        let names: Vec<&str> = batch.records.iter().map(|r| r.item_name.as_str()).collect();
        assert_eq!(names, ["Red Car", "Kite"]);
    }

    #[test]
    fn display_label_wins_over_snake_case() {
        let rows = vec![row(json!({
            "Item Name": "Display",
            "item_name": "Snake",
            "Item Code": "RC-01",
        }))];
        let batch = normalize_rows("u-1", &rows);
        assert_eq!(batch.records[0].item_name, "Display");
    }

    #[test]
    fn blank_display_label_falls_through() {
        let rows = vec![row(json!({
            "Item Name": "   ",
            "item_name": "Snake",
            "Item Code": "RC-01",
        }))];
        let batch = normalize_rows("u-1", &rows);
        assert_eq!(batch.records[0].item_name, "Snake");
    }

    #[test]
    fn numeric_cells_coerce_to_text_and_numbers() {
        let rows = vec![row(json!({
            "Item Name": "Red Car",
            "Item Code": 12345,
            "Purchase Price": 2.5,
            "Selling Price": 5,
            "Quantity": 10,
        }))];
        let record = &normalize_rows("u-1", &rows).records[0];
        assert_eq!(record.item_code, "12345");
        assert_eq!(record.purchase_price, dec!(2.5));
        assert_eq!(record.quantity, 10);
    }

    #[test]
    fn unparsable_numbers_default_to_zero_without_dropping_the_row() {
        let rows = vec![row(json!({
            "Item Name": "Red Car",
            "Item Code": "RC-01",
            "Purchase Price": "a lot",
            "Quantity": "many",
        }))];
        let batch = normalize_rows("u-1", &rows);
        assert_eq!(batch.records.len(), 1);
        let record = &batch.records[0];
        assert_eq!(record.purchase_price, Decimal::ZERO);
        assert_eq!(record.selling_price, Decimal::ZERO);
        assert_eq!(record.quantity, 0);
        assert_eq!(record.stock_value, Decimal::ZERO);
    }

    #[test]
    fn numeric_prefix_strings_default_to_zero() {
        // "5abc" is not read as 5; the cell counts as unparsable
        let rows = vec![row(json!({
            "Item Name": "Red Car",
            "Item Code": "RC-01",
            "Purchase Price": "5abc",
            "Quantity": "4",
        }))];
        let batch = normalize_rows("u-1", &rows);
        assert_eq!(batch.records.len(), 1);
        let record = &batch.records[0];
        assert_eq!(record.purchase_price, Decimal::ZERO);
        assert_eq!(record.stock_value, Decimal::ZERO);
        assert_eq!(record.quantity, 4);
    }

    #[test]
    fn fractional_quantities_truncate() {
        let rows = vec![row(json!({
            "Item Name": "Red Car",
            "Item Code": "RC-01",
            "Quantity": "5.9",
        }))];
        assert_eq!(normalize_rows("u-1", &rows).records[0].quantity, 5);

        let rows = vec![row(json!({
            "Item Name": "Red Car",
            "Item Code": "RC-01",
            "Quantity": 5.9,
        }))];
        assert_eq!(normalize_rows("u-1", &rows).records[0].quantity, 5);
    }

    #[test]
    fn derived_value_matches_the_calculator() {
        let rows = vec![row(json!({
            "Item Name": "Red Car",
            "Item Code": "RC-01",
            "Purchase Price": "2.5",
            "Quantity": "4",
        }))];
        let record = &normalize_rows("u-1", &rows).records[0];
        assert_eq!(record.stock_value, stock_value(dec!(2.5), 4));
        assert_eq!(record.stock_value, dec!(10.00));
    }

    #[test]
    fn normalization_is_idempotent() {
        let rows = vec![row(json!({
            "item_name": "Red Car",
            "item_code": "RC-01",
            "purchase_price": "2.5",
            "selling_price": "5",
            "quantity": "4",
        }))];
        let first = normalize_rows("u-1", &rows);

        // feed the normalized records back through under display labels
        let echoed: Vec<ImportRow> = first
            .records
            .iter()
            .map(|record| {
                row(json!({
                    "Item Name": record.item_name,
                    "Item Code": record.item_code,
                    "Purchase Price": record.purchase_price.to_string(),
                    "Selling Price": record.selling_price.to_string(),
                    "Quantity": record.quantity.to_string(),
                }))
            })
            .collect();
        let second = normalize_rows("u-1", &echoed);
        assert_eq!(first.records, second.records);
    }

    #[test]
    fn empty_input_produces_an_empty_batch() {
        let batch = normalize_rows("u-1", &[]);
        assert_eq!(batch.total_rows, 0);
        assert!(batch.is_empty());
    }
}
