//! Session-scoped catalog cache.
//!
//! Lifecycle: `Uninitialized -> Loading -> Ready | Failed`. The fetch happens at
//! most once; there is no refresh or invalidation.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

use tracing::{error, warn};

use tag_model::CatalogEntry;

use crate::client::load_catalog;
use crate::source::CatalogSource;

/// Current state of the catalog.
#[derive(Debug, Clone)]
pub enum CatalogStatus {
    /// No fetch has been started.
    Uninitialized,
    /// The fetch is in flight.
    Loading,
    /// The fetch succeeded.
    Ready(Arc<[CatalogEntry]>),
    /// The fetch failed; consumers see an empty catalog.
    Failed(String),
}

impl CatalogStatus {
    /// Entries visible to consumers. Empty unless `Ready`.
    pub fn entries(&self) -> Arc<[CatalogEntry]> {
        match self {
            Self::Ready(entries) => Arc::clone(entries),
            _ => Arc::from(Vec::new()),
        }
    }
}

struct Shared {
    status: Mutex<CatalogStatus>,
    settled: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, CatalogStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(&self, status: CatalogStatus) {
        *self.lock() = status;
        self.settled.notify_all();
    }
}

/// Read-only, load-once holder of the product catalog.
#[derive(Clone)]
pub struct CatalogCache {
    shared: Arc<Shared>,
}

impl CatalogCache {
    fn with_status(status: CatalogStatus) -> Self {
        Self {
            shared: Arc::new(Shared {
                status: Mutex::new(status),
                settled: Condvar::new(),
            }),
        }
    }

    /// A cache that never loads anything.
    pub fn uninitialized() -> Self {
        Self::with_status(CatalogStatus::Uninitialized)
    }

    /// A cache already holding `entries`.
    pub fn ready(entries: Vec<CatalogEntry>) -> Self {
        Self::with_status(CatalogStatus::Ready(entries.into()))
    }

    /// Start the single fetch on a background thread and return immediately.
    pub fn start(source: CatalogSource) -> Self {
        let cache = Self::with_status(CatalogStatus::Loading);
        let shared = Arc::clone(&cache.shared);
        let spawned = thread::Builder::new()
            .name("catalog-fetch".to_string())
            .spawn(move || {
                let status = match load_catalog(&source) {
                    Ok(entries) => CatalogStatus::Ready(entries.into()),
                    Err(err) => {
                        warn!(error = %err, "catalog unavailable, labels will use fallback values");
                        CatalogStatus::Failed(err.to_string())
                    }
                };
                shared.settle(status);
            });
        if let Err(err) = spawned {
            error!(error = %err, "failed to spawn catalog fetch");
            cache
                .shared
                .settle(CatalogStatus::Failed(format!("failed to spawn catalog fetch: {err}")));
        }
        cache
    }

    /// Current state without blocking.
    pub fn snapshot(&self) -> CatalogStatus {
        self.shared.lock().clone()
    }

    /// Block until the fetch settles, then return the visible entries.
    ///
    /// Returns immediately for an uninitialized cache.
    pub fn wait(&self) -> Arc<[CatalogEntry]> {
        self.wait_status().entries()
    }

    /// Block until the fetch settles, then return the final state.
    pub fn wait_status(&self) -> CatalogStatus {
        let mut status = self.shared.lock();
        while matches!(*status, CatalogStatus::Loading) {
            status = self
                .shared
                .settled
                .wait(status)
                .unwrap_or_else(PoisonError::into_inner);
        }
        status.clone()
    }
}

impl std::fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCache")
            .field("status", &self.snapshot())
            .finish()
    }
}
