//! History snapshot store.
//!
//! [`HistoryStore`] owns the latest parsed digest, the active filters,
//! and the visible projection of the two. Refreshes run concurrently
//! against a [`DigestSource`]; a monotonic token decides which response
//! is current, so a slow early refresh can never overwrite the result
//! of a later one. Filter changes are local and never touch the source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::error::SourceError;
use crate::model::{AttemptRecord, GradingResult};
use crate::parser::parse_digest;
use crate::query::{self, FilterState};
use crate::traits::DigestSource;

/// Whether the store holds a usable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No snapshot: never refreshed, cleared, or the last refresh found
    /// nothing usable.
    Empty,
    /// A snapshot is installed. It may still contain zero records.
    Loaded,
}

/// What a completed refresh did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A snapshot with this many records was installed.
    Loaded { records: usize },
    /// The backend sent an empty digest; the store was cleared.
    NoData,
    /// A newer refresh finished first; this one changed nothing.
    Superseded,
}

/// Point-in-time copy of the store contents, safe to hold while the
/// store keeps refreshing.
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub state: StoreState,
    /// Full parsed snapshot, in digest order.
    pub records: Vec<AttemptRecord>,
    /// Snapshot narrowed by the active filters, same order.
    pub visible: Vec<AttemptRecord>,
    pub filters: FilterState,
    /// When the snapshot's digest was fetched. `None` while `Empty`.
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
struct ViewState {
    state: StoreState,
    snapshot: Vec<AttemptRecord>,
    visible: Vec<AttemptRecord>,
    filters: FilterState,
    fetched_at: Option<DateTime<Utc>>,
}

impl ViewState {
    fn new() -> Self {
        Self {
            state: StoreState::Empty,
            snapshot: Vec::new(),
            visible: Vec::new(),
            filters: FilterState::default(),
            fetched_at: None,
        }
    }

    fn clear_snapshot(&mut self) {
        self.state = StoreState::Empty;
        self.snapshot.clear();
        self.visible.clear();
        self.fetched_at = None;
    }

    fn install_snapshot(&mut self, records: Vec<AttemptRecord>, fetched_at: DateTime<Utc>) {
        self.state = StoreState::Loaded;
        self.snapshot = records;
        self.fetched_at = Some(fetched_at);
        self.reapply_filters();
    }

    fn reapply_filters(&mut self) {
        self.visible = query::filter(&self.snapshot, &self.filters);
    }
}

/// Concurrent-refresh-safe holder of the latest exam history.
pub struct HistoryStore {
    source: Arc<dyn DigestSource>,
    /// Token of the most recently started refresh. A response only
    /// applies while its token is still the latest issued.
    issued: AtomicU64,
    view: RwLock<ViewState>,
}

impl HistoryStore {
    pub fn new(source: Arc<dyn DigestSource>) -> Self {
        Self {
            source,
            issued: AtomicU64::new(0),
            view: RwLock::new(ViewState::new()),
        }
    }

    /// Fetch the digest, parse it, and install the result.
    ///
    /// Concurrent calls are safe: each takes a fresh token, and only the
    /// call holding the latest token gets to change the store. A
    /// superseded call returns [`RefreshOutcome::Superseded`] whether its
    /// own fetch succeeded or failed.
    ///
    /// An empty digest clears the store ([`RefreshOutcome::NoData`]); a
    /// fetch error also clears it but is reported as the error it is,
    /// so callers can tell "no history yet" from "backend unreachable".
    pub async fn refresh(&self) -> Result<RefreshOutcome, SourceError> {
        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(source = self.source.name(), token, "refreshing history snapshot");

        let fetched = self.source.fetch_digest().await;
        let fetched_at = Utc::now();

        match fetched {
            Ok(text) if text.trim().is_empty() => {
                let mut view = self.write_view();
                if token != self.issued.load(Ordering::SeqCst) {
                    tracing::debug!(token, "discarding superseded refresh");
                    return Ok(RefreshOutcome::Superseded);
                }
                tracing::info!(source = self.source.name(), "backend digest is empty");
                view.clear_snapshot();
                Ok(RefreshOutcome::NoData)
            }
            Ok(text) => {
                // Parse before taking the lock; only installation needs it.
                let records = parse_digest(&text);
                let count = records.len();
                let mut view = self.write_view();
                if token != self.issued.load(Ordering::SeqCst) {
                    tracing::debug!(token, "discarding superseded refresh");
                    return Ok(RefreshOutcome::Superseded);
                }
                view.install_snapshot(records, fetched_at);
                tracing::info!(
                    source = self.source.name(),
                    records = count,
                    "history snapshot refreshed"
                );
                Ok(RefreshOutcome::Loaded { records: count })
            }
            Err(err) => {
                let mut view = self.write_view();
                if token != self.issued.load(Ordering::SeqCst) {
                    tracing::debug!(token, "discarding superseded refresh failure");
                    return Ok(RefreshOutcome::Superseded);
                }
                tracing::warn!(source = self.source.name(), error = %err, "history refresh failed");
                view.clear_snapshot();
                Err(err)
            }
        }
    }

    /// Refresh prompted by a freshly recorded grading result. The backend
    /// owns the history, so the digest is refetched rather than patched
    /// locally with the new attempt.
    pub async fn refresh_after_grading(
        &self,
        result: &GradingResult,
    ) -> Result<RefreshOutcome, SourceError> {
        tracing::info!(
            "grading recorded for {} ({} / {}), refreshing history",
            result.student_id,
            result.correct_count,
            result.total_count
        );
        self.refresh().await
    }

    /// Set the identifier filter and recompute the visible records.
    /// Cheap and local; the snapshot and store state are untouched.
    pub fn set_identifier_query(&self, query: impl Into<String>) {
        let mut view = self.write_view();
        view.filters.identifier_query = query.into();
        view.reapply_filters();
    }

    /// Set or remove the exact-date filter and recompute the visible
    /// records.
    pub fn set_exact_date(&self, date: Option<String>) {
        let mut view = self.write_view();
        view.filters.exact_date = date;
        view.reapply_filters();
    }

    /// Drop the snapshot and all filters, returning the store to its
    /// initial state.
    pub fn clear(&self) {
        let mut view = self.write_view();
        view.filters = FilterState::default();
        view.clear_snapshot();
    }

    /// Copy out the current contents.
    pub fn view(&self) -> HistoryView {
        let view = self.read_view();
        HistoryView {
            state: view.state,
            records: view.snapshot.clone(),
            visible: view.visible.clone(),
            filters: view.filters.clone(),
            fetched_at: view.fetched_at,
        }
    }

    pub fn state(&self) -> StoreState {
        self.read_view().state
    }

    pub fn visible(&self) -> Vec<AttemptRecord> {
        self.read_view().visible.clone()
    }

    pub fn filters(&self) -> FilterState {
        self.read_view().filters.clone()
    }

    fn read_view(&self) -> RwLockReadGuard<'_, ViewState> {
        self.view.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_view(&self) -> RwLockWriteGuard<'_, ViewState> {
        self.view.write().unwrap_or_else(PoisonError::into_inner)
    }
}
