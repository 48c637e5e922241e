//! Debounced, cancellable as-you-type search.
//!
//! Each keystroke calls [`DebouncedSearch::run`]. The call waits out the
//! debounce interval, then fetches. Starting a new call supersedes every
//! earlier one: the earlier task is aborted, and if its response still
//! arrives it is discarded by the generation check. A superseded call
//! resolves to [`SearchError::Superseded`] and never yields results.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::task::AbortHandle;
use tracing::{debug, instrument};

use crate::api::types::{Customer, Product};
use crate::api::{ApiClient, ApiError};

/// Queries shorter than this resolve to an empty list without a request.
pub const MIN_QUERY_CHARS: usize = 2;

/// Errors from a debounced search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A newer query replaced this one.
    #[error("search superseded by a newer query")]
    Superseded,

    /// The search request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Search box state: debounce interval, generation counter and the task
/// currently in flight.
#[derive(Debug)]
pub struct DebouncedSearch {
    debounce: Duration,
    generation: AtomicU64,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl DebouncedSearch {
    #[must_use]
    pub const fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    /// Debounce interval.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Run `fetch` for `query` once the debounce interval has passed,
    /// superseding any earlier call.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Superseded` if another call started before this
    /// one finished, or `SearchError::Api` if the fetch failed.
    pub async fn run<T, F, Fut>(&self, query: &str, fetch: F) -> Result<Vec<T>, SearchError>
    where
        T: Send + 'static,
        F: FnOnce(String) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
    {
        let query = query.trim().to_string();
        let debounce = self.debounce;

        // Generation order and handle order must agree, so both change under
        // the same lock.
        let (generation, task) = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let task = tokio::spawn(async move {
                tokio::time::sleep(debounce).await;
                if query.chars().count() < MIN_QUERY_CHARS {
                    return Ok(Vec::new());
                }
                fetch(query).await
            });
            if let Some(previous) = in_flight.replace(task.abort_handle()) {
                previous.abort();
            }
            (generation, task)
        };

        let outcome = task.await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded search");
            return Err(SearchError::Superseded);
        }

        match outcome {
            Ok(result) => Ok(result?),
            Err(e) if e.is_cancelled() => Err(SearchError::Superseded),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }

    /// Debounced product lookup (`/products/search`).
    ///
    /// # Errors
    ///
    /// See [`DebouncedSearch::run`].
    #[instrument(skip(self, api))]
    pub async fn products(&self, api: &ApiClient, query: &str) -> Result<Vec<Product>, SearchError> {
        let api = api.clone();
        self.run(query, move |term| async move { api.search_products(&term).await })
            .await
    }

    /// Debounced customer lookup (`/customers/search`).
    ///
    /// # Errors
    ///
    /// See [`DebouncedSearch::run`].
    #[instrument(skip(self, api))]
    pub async fn customers(
        &self,
        api: &ApiClient,
        query: &str,
    ) -> Result<Vec<Customer>, SearchError> {
        let api = api.clone();
        self.run(query, move |term| async move { api.search_customers(&term).await })
            .await
    }
}
