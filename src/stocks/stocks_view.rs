use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::stocks_cache::StockCache;
use super::stocks_filter::filter_stocks;
use super::stocks_model::{Stock, StockForm};
use super::stocks_traits::StockServiceTrait;
use super::stocks_valuation::total_stock_value;
use crate::import::{ImportServiceTrait, ImportSummary};
use crate::{export, Result};

/// Drives the stock list screen for one signed-in user: owns the
/// read-through cache, the search query, and the busy flag.
///
/// All methods take `&self` and are meant to run on the single cooperative
/// context behind the UI. While a mutating operation (form submission or
/// spreadsheet ingestion) is in flight, the busy flag drops any further
/// mutating call rather than queueing it; those calls return `Ok(None)`. The
/// flag is cleared on every exit path, success or failure.
pub struct StockListView {
    stock_service: Arc<dyn StockServiceTrait>,
    import_service: Arc<dyn ImportServiceTrait>,
    user_id: String,
    state: RwLock<ViewState>,
    busy: AtomicBool,
}

#[derive(Default)]
struct ViewState {
    cache: StockCache,
    query: String,
    visible: Vec<Stock>,
}

impl ViewState {
    fn recompute_visible(&mut self) {
        self.visible = filter_stocks(self.cache.records(), &self.query);
    }
}

impl StockListView {
    pub fn new(
        stock_service: Arc<dyn StockServiceTrait>,
        import_service: Arc<dyn ImportServiceTrait>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            stock_service,
            import_service,
            user_id: user_id.into(),
            state: RwLock::new(ViewState::default()),
            busy: AtomicBool::new(false),
        }
    }

    // The state lock is never held across an await. Poisoning only means a
    // caller panicked mid-update; the state is plain data and stays
    // structurally sound, so recover the guard instead of propagating.
    fn state_read(&self) -> RwLockReadGuard<'_, ViewState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn state_write(&self) -> RwLockWriteGuard<'_, ViewState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// True while a mutating operation is in flight; the UI disables the
    /// submit and upload controls on it.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// The user whose records this view shows and writes.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn query(&self) -> String {
        self.state_read().query.clone()
    }

    /// The currently visible (filtered) records, in creation order.
    pub fn visible_stocks(&self) -> Vec<Stock> {
        self.state_read().visible.clone()
    }

    /// Item count and summed stock value shown in the list footer.
    pub fn visible_summary(&self) -> (usize, Decimal) {
        let state = self.state_read();
        (state.visible.len(), total_stock_value(&state.visible))
    }

    /// Updates the search query and synchronously recomputes the visible set
    /// from the cache. No store round trip is involved.
    pub fn set_query(&self, query: impl Into<String>) {
        let mut state = self.state_write();
        state.query = query.into();
        state.recompute_visible();
    }

    /// Drops the cached set and refetches it from the store.
    pub async fn refresh(&self) -> Result<()> {
        self.state_write().cache.invalidate();
        self.ensure_loaded().await
    }

    /// Read-through load: hits the store only when the cache is stale.
    pub async fn ensure_loaded(&self) -> Result<()> {
        let stale = self.state_read().cache.is_stale();
        if !stale {
            return Ok(());
        }
        let stocks = self.stock_service.get_stocks().await?;
        let mut state = self.state_write();
        state.cache.fill(stocks);
        state.recompute_visible();
        Ok(())
    }

    /// Submits the manual entry form. `Ok(None)` means the submission was
    /// dropped because another mutating operation was in flight; otherwise
    /// the stored record is echoed back for the "last saved entry" panel,
    /// even when the follow-up refetch fails.
    pub async fn submit_stock(&self, form: StockForm) -> Result<Option<Stock>> {
        if self.busy.swap(true, Ordering::SeqCst) {
            debug!("Dropping form submission: another operation is in flight");
            return Ok(None);
        }
        let result = self.submit_inner(form).await;
        self.busy.store(false, Ordering::SeqCst);
        result.map(Some)
    }

    async fn submit_inner(&self, form: StockForm) -> Result<Stock> {
        let new_stock = form.into_new_stock(&self.user_id)?;
        let stock = self.stock_service.create_stock(new_stock).await?;
        self.refresh_after_write().await;
        Ok(stock)
    }

    /// Ingests an uploaded workbook passed as raw bytes. `Ok(None)` means the
    /// attempt was dropped because the view was busy. The returned summary
    /// reflects the upload itself; a failed refetch afterwards does not mask it.
    pub async fn import_workbook_bytes(&self, bytes: &[u8]) -> Result<Option<ImportSummary>> {
        if self.busy.swap(true, Ordering::SeqCst) {
            debug!("Dropping workbook upload: another operation is in flight");
            return Ok(None);
        }
        let result = self
            .import_service
            .import_workbook_bytes(&self.user_id, bytes)
            .await;
        let result = self.finish_import(result).await;
        self.busy.store(false, Ordering::SeqCst);
        result.map(Some)
    }

    /// File-path variant of [`Self::import_workbook_bytes`].
    pub async fn import_workbook_file(&self, path: &Path) -> Result<Option<ImportSummary>> {
        if self.busy.swap(true, Ordering::SeqCst) {
            debug!("Dropping workbook upload: another operation is in flight");
            return Ok(None);
        }
        let result = self
            .import_service
            .import_workbook_file(&self.user_id, path)
            .await;
        let result = self.finish_import(result).await;
        self.busy.store(false, Ordering::SeqCst);
        result.map(Some)
    }

    async fn finish_import(&self, result: Result<ImportSummary>) -> Result<ImportSummary> {
        let summary = result?;
        debug!(
            "Imported {} of {} uploaded rows",
            summary.inserted, summary.total_rows
        );
        self.refresh_after_write().await;
        Ok(summary)
    }

    /// A completed write is reported to the caller regardless of how the
    /// follow-up refetch goes; on a refetch failure the cache stays stale
    /// and refills on the next read.
    async fn refresh_after_write(&self) {
        self.state_write().cache.invalidate();
        if let Err(error) = self.ensure_loaded().await {
            warn!("Refetch after a successful write failed: {}", error);
        }
    }

    /// Renders the visible set as the printable PDF report.
    pub async fn export_pdf_bytes(&self) -> Result<Vec<u8>> {
        self.ensure_loaded().await?;
        let visible = self.visible_stocks();
        Ok(export::render_pdf(&visible, Utc::now())?)
    }

    /// Renders the visible set as a workbook.
    pub async fn export_workbook_bytes(&self) -> Result<Vec<u8>> {
        self.ensure_loaded().await?;
        let visible = self.visible_stocks();
        Ok(export::render_workbook(&visible)?)
    }

    /// Writes the PDF report into `dir` under its fixed file name.
    pub async fn export_pdf_file(&self, dir: &Path) -> Result<PathBuf> {
        self.ensure_loaded().await?;
        let visible = self.visible_stocks();
        Ok(export::write_pdf(dir, &visible).await?)
    }

    /// Writes the workbook export into `dir` under its fixed file name.
    pub async fn export_workbook_file(&self, dir: &Path) -> Result<PathBuf> {
        self.ensure_loaded().await?;
        let visible = self.visible_stocks();
        Ok(export::write_workbook(dir, &visible).await?)
    }
}
