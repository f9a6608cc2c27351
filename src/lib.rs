//! Livros Cache - A book catalog service with a cache-aside layer
//!
//! Reads are served from a TTL-bound snapshot in the cache backend when one
//! exists and from the in-memory store otherwise; writes invalidate the snapshot.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
