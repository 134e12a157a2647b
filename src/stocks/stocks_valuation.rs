use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::stocks_model::Stock;
use crate::constants::{CURRENCY_PREFIX, DISPLAY_DECIMAL_PRECISION};

/// Monetary value of a stock line: purchase price times quantity, rounded to
/// display precision. Used at submission time to populate the persisted
/// `stock_value` and by the live form preview.
pub fn stock_value(purchase_price: Decimal, quantity: i64) -> Decimal {
    (purchase_price * Decimal::from(quantity)).round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Live-preview variant over raw form input, recomputed on every keystroke.
/// Returns `0.00` when either field is empty or does not parse as a number.
pub fn preview_stock_value(purchase_price: &str, quantity: &str) -> Decimal {
    match (parse_decimal(purchase_price), parse_quantity(quantity)) {
        (Some(price), Some(quantity)) => stock_value(price, quantity),
        _ => Decimal::ZERO,
    }
}

/// Summed persisted stock value over a record slice (the list footer total).
pub fn total_stock_value(stocks: &[Stock]) -> Decimal {
    stocks.iter().map(|stock| stock.stock_value).sum()
}

/// Two-fraction-digit display, e.g. `10.00`.
pub fn format_money(value: Decimal) -> String {
    format!("{:.prec$}", value, prec = DISPLAY_DECIMAL_PRECISION as usize)
}

/// Display with the currency prefix, e.g. `$10.00`.
pub fn format_currency(value: Decimal) -> String {
    format!("{}{}", CURRENCY_PREFIX, format_money(value))
}

/// Parses a decimal field from raw text; empty and non-numeric input yield `None`.
pub(crate) fn parse_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Parses an integer quantity from raw text. Fractional input truncates
/// toward zero, matching the form's integer coercion.
pub(crate) fn parse_quantity(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(quantity) = trimmed.parse::<i64>() {
        return Some(quantity);
    }
    Decimal::from_str(trimmed)
        .ok()
        .and_then(|value| value.trunc().to_i64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn stock_with_value(value: Decimal) -> Stock {
        Stock {
            id: "s-1".to_string(),
            owner_id: "u-1".to_string(),
            item_name: "Teddy Bear".to_string(),
            item_code: "TB-01".to_string(),
            purchase_price: dec!(1),
            selling_price: dec!(2),
            quantity: 1,
            stock_value: value,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stock_value_is_rounded_product() {
        assert_eq!(stock_value(dec!(5), 10), dec!(50));
        assert_eq!(stock_value(dec!(2.5), 4), dec!(10));
        assert_eq!(stock_value(dec!(1.999), 2), dec!(4.00));
        assert_eq!(stock_value(dec!(0), 100), dec!(0));
    }

    #[test]
    fn preview_matches_submission_value() {
        assert_eq!(preview_stock_value("2.5", "4"), stock_value(dec!(2.5), 4));
        assert_eq!(format_money(preview_stock_value("2.5", "4")), "10.00");
    }

    #[test]
    fn preview_defaults_to_zero_on_missing_or_bad_input() {
        assert_eq!(preview_stock_value("", "4"), Decimal::ZERO);
        assert_eq!(preview_stock_value("2.5", ""), Decimal::ZERO);
        assert_eq!(preview_stock_value("abc", "4"), Decimal::ZERO);
        assert_eq!(preview_stock_value("2.5", "lots"), Decimal::ZERO);
        assert_eq!(preview_stock_value("  ", "  "), Decimal::ZERO);
        assert_eq!(format_money(preview_stock_value("", "")), "0.00");
    }

    #[test]
    fn numeric_prefix_strings_do_not_parse() {
        // "5abc" is rejected outright rather than read as 5
        assert_eq!(parse_decimal("5abc"), None);
        assert_eq!(parse_quantity("5abc"), None);
        assert_eq!(preview_stock_value("5abc", "4"), Decimal::ZERO);
        assert_eq!(preview_stock_value("2.5", "4 dozen"), Decimal::ZERO);
    }

    #[test]
    fn quantity_input_truncates_fractions() {
        assert_eq!(parse_quantity("5.9"), Some(5));
        assert_eq!(parse_quantity("4.0"), Some(4));
        assert_eq!(preview_stock_value("2", "5.9"), dec!(10));
    }

    #[test]
    fn money_formatting_pads_fraction_digits() {
        assert_eq!(format_money(dec!(10)), "10.00");
        assert_eq!(format_currency(dec!(7.5)), "$7.50");
    }

    #[test]
    fn total_sums_persisted_values() {
        let stocks = vec![stock_with_value(dec!(10.50)), stock_with_value(dec!(4.25))];
        assert_eq!(total_stock_value(&stocks), dec!(14.75));
        assert_eq!(total_stock_value(&[]), Decimal::ZERO);
    }
}
