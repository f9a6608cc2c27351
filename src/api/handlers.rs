//! API Handlers
//!
//! HTTP request handlers for each book service endpoint.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::cache::{BookCache, CacheBackend};
use crate::error::{AppError, Result};
use crate::models::{Book, HealthResponse, StatsResponse};
use crate::store::BookStore;

/// Application state shared across all handlers.
///
/// The store is reachable both directly (for writes) and through the
/// cache-aside layer (for reads).
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside read path and invalidation
    pub books: Arc<BookCache>,
    /// Source of record
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    /// Creates a new AppState wiring `store` behind a cache on `backend`.
    pub fn new(store: Arc<dyn BookStore>, backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            books: Arc::new(BookCache::new(store.clone(), backend)),
            store,
        }
    }
}

/// Handler for GET /books
///
/// Returns the whole catalog through the cache-aside layer.
pub async fn list_books_handler(State(state): State<AppState>) -> Result<Json<Vec<Book>>> {
    let books = state.books.get_books().await?;
    Ok(Json(books))
}

/// Handler for POST /books
///
/// Validates the payload, appends it to the store and invalidates the cache.
/// A payload that fails validation never reaches the store or the cache.
pub async fn create_book_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Book>, JsonRejection>,
) -> Result<Json<Book>> {
    let Json(book) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    state.store.append(book.clone());
    info!("Book {} appended: {:?} by {:?}", book.id, book.title, book.author);

    state.books.invalidate().await?;

    Ok(Json(book))
}

/// Handler for GET /stats
///
/// Returns cache-aside hit/miss/invalidation counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        &state.books.stats(),
        state.books.backend_name(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryBackend, BOOKS_CACHE_KEY};
    use crate::store::InMemoryBookStore;

    fn test_state() -> (AppState, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::new(Arc::new(InMemoryBookStore::seeded()), backend.clone());
        (state, backend)
    }

    #[tokio::test]
    async fn test_create_and_list_handler() {
        let (state, _backend) = test_state();

        let book = Book::new(3, "Dune", "Frank Herbert");
        let result = create_book_handler(State(state.clone()), Ok(Json(book.clone()))).await;
        assert_eq!(result.unwrap().0, book);

        let books = list_books_handler(State(state)).await.unwrap();
        assert_eq!(books.len(), 3);
        assert_eq!(books[2], book);
    }

    #[tokio::test]
    async fn test_create_handler_clears_cache() {
        let (state, backend) = test_state();

        let Json(books) = list_books_handler(State(state.clone())).await.unwrap();
        assert_eq!(books.len(), 2);
        assert!(backend.get(BOOKS_CACHE_KEY).await.unwrap().is_some());

        let book = Book::new(3, "Dune", "Frank Herbert");
        let Json(created) = create_book_handler(State(state), Ok(Json(book.clone())))
            .await
            .unwrap();
        assert_eq!(created, book);
        assert!(backend.get(BOOKS_CACHE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let (state, _backend) = test_state();

        let Json(first) = list_books_handler(State(state.clone())).await.unwrap();
        let Json(second) = list_books_handler(State(state.clone())).await.unwrap();
        assert_eq!(first, second);

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.backend, "memory");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
