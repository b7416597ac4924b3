//! Result cache
//!
//! Memoizes search outcomes by exact [`JobQuery`] equality for the lifetime
//! of the process. Both fetched text and fallbacks are stored, and entries
//! are never invalidated: a query that has been looked up once always
//! returns the stored outcome, even if stale.
//!
//! The cache key is only the derived query text. The credential handle is
//! captured by the fetch closure and never takes part in cache identity.
//!
//! Concurrent first access to the same key is serialized through a per-key
//! [`OnceCell`], so the fetch function runs at most once per key.

use super::search_client::FetchOutcome;
use jobscout_domain::JobQuery;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;
use tracing::debug;

/// Outcome of a cache lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLookup {
    pub outcome: FetchOutcome,
    /// `true` when this call ran the fetch function
    pub fresh: bool,
}

/// Process-wide memo of search outcomes keyed by query
#[derive(Default)]
pub struct ResultCache {
    entries: Mutex<HashMap<JobQuery, Arc<OnceCell<FetchOutcome>>>>,
    fetches: AtomicUsize,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached outcome for `query`, or run `fetch` and cache
    /// whatever it returns, fallback included.
    pub async fn get_or_fetch<F, Fut>(&self, query: &JobQuery, fetch: F) -> CacheLookup
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchOutcome>,
    {
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(entries.entry(query.clone()).or_default())
        };

        let mut fresh = false;
        let outcome = cell
            .get_or_init(|| async {
                debug!(query = %query, "Result cache miss");
                fresh = true;
                self.fetches.fetch_add(1, Ordering::SeqCst);
                fetch().await
            })
            .await
            .clone();

        if !fresh {
            debug!(query = %query, fallback = !outcome.is_fetched(), "Result cache hit");
        }
        CacheLookup { outcome, fresh }
    }

    /// Whether `query` has a populated entry
    pub fn contains(&self, query: &JobQuery) -> bool {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(query)
            .is_some_and(|cell| cell.initialized())
    }

    /// Number of populated entries
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.values().filter(|cell| cell.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times a fetch function has been invoked
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}
