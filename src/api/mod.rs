//! API Module
//!
//! HTTP handlers and routing for the book service REST API.
//!
//! # Endpoints
//! - `GET /books` - List all books (cache-aside read)
//! - `POST /books` - Add a book and invalidate the cache
//! - `GET /stats` - Cache hit/miss statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
