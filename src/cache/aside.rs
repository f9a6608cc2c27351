//! Cache-Aside Layer
//!
//! Serves the book list from the cache when a snapshot is present and
//! otherwise reads the store and repopulates the cache. Writers invalidate.
//!
//! The read path is two backend round-trips (get, then set on a miss) and is
//! not atomic: an invalidation landing between them is overwritten by the
//! snapshot taken before the write. Backend errors are returned as-is; a read
//! never falls back to the store when the backend fails.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::cache::{CacheBackend, CacheStats, BOOKS_CACHE_KEY, BOOKS_CACHE_TTL_SECS};
use crate::error::{AppError, Result};
use crate::models::Book;
use crate::store::BookStore;

// == Book Cache ==
pub struct BookCache {
    store: Arc<dyn BookStore>,
    backend: Arc<dyn CacheBackend>,
    stats: Mutex<CacheStats>,
}

impl BookCache {
    // == Constructor ==
    pub fn new(store: Arc<dyn BookStore>, backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            store,
            backend,
            stats: Mutex::new(CacheStats::new()),
        }
    }

    // == Get Books ==
    /// Returns the whole catalog, from the cached snapshot when there is one.
    ///
    /// On a miss the store is read, serialized and written back under
    /// [`BOOKS_CACHE_KEY`] with a [`BOOKS_CACHE_TTL_SECS`] expiry.
    pub async fn get_books(&self) -> Result<Vec<Book>> {
        let cached = self
            .backend
            .get(BOOKS_CACHE_KEY)
            .await
            .inspect_err(|e| error!("Cache read failed on {}: {}", self.backend.name(), e))?;

        if let Some(snapshot) = cached {
            let books: Vec<Book> = serde_json::from_str(&snapshot).map_err(|e| {
                error!("Cached snapshot under '{}' is not a book list: {}", BOOKS_CACHE_KEY, e);
                AppError::CacheBackend(format!("corrupt cached value: {}", e))
            })?;
            self.stats.lock().record_hit();
            debug!("Cache hit: {} books", books.len());
            return Ok(books);
        }

        let books = self.store.list_all();
        let snapshot = serde_json::to_string(&books)
            .map_err(|e| AppError::CacheBackend(format!("cannot encode snapshot: {}", e)))?;

        self.backend
            .set_ex(BOOKS_CACHE_KEY, &snapshot, BOOKS_CACHE_TTL_SECS)
            .await
            .inspect_err(|e| error!("Cache write failed on {}: {}", self.backend.name(), e))?;

        self.stats.lock().record_miss();
        debug!("Cache miss: repopulated with {} books", books.len());
        Ok(books)
    }

    // == Invalidate ==
    /// Drops the cached snapshot. Safe to call when nothing is cached.
    pub async fn invalidate(&self) -> Result<()> {
        self.backend
            .delete(BOOKS_CACHE_KEY)
            .await
            .inspect_err(|e| error!("Cache invalidation failed on {}: {}", self.backend.name(), e))?;

        self.stats.lock().record_invalidation();
        debug!("Cache invalidated");
        Ok(())
    }

    // == Stats ==
    /// Returns a copy of the current counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }

    /// Name of the backend behind this cache.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}
