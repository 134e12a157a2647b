use super::stocks_model::Stock;

/// Read-through cache of the record store. The list screen reads from here
/// instead of hitting the store on every render; the single invalidation
/// point sits right after a successful write, so staleness is bounded by one
/// fetch round trip.
#[derive(Debug, Default)]
pub struct StockCache {
    records: Option<Vec<Stock>>,
}

impl StockCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no fetched set is held and the cache must be filled before use
    pub fn is_stale(&self) -> bool {
        self.records.is_none()
    }

    /// Replaces the cached set with a freshly fetched one
    pub fn fill(&mut self, stocks: Vec<Stock>) {
        self.records = Some(stocks);
    }

    /// Drops the cached set; called once after each successful write
    pub fn invalidate(&mut self) {
        self.records = None;
    }

    /// The cached set; empty while stale
    pub fn records(&self) -> &[Stock] {
        self.records.as_deref().unwrap_or_default()
    }
}
