use super::stocks_model::Stock;

/// Returns the visible subset for a search query. A blank query yields the
/// full set unchanged; any other query is matched exactly as typed, with
/// whitespace significant, as a case-insensitive substring of the name or
/// code. Input order is preserved.
pub fn filter_stocks(stocks: &[Stock], query: &str) -> Vec<Stock> {
    if query.trim().is_empty() {
        return stocks.to_vec();
    }
    let query = query.to_lowercase();
    stocks
        .iter()
        .filter(|stock| {
            stock.item_name.to_lowercase().contains(&query)
                || stock.item_code.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
