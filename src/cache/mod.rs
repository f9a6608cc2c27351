//! Cache Module
//!
//! Cache-aside layer over the book store, plus the backends it can run on.

mod aside;
mod backend;
mod entry;
mod memory;
mod redis_backend;
mod stats;


// Re-export public types
pub use aside::BookCache;
pub use backend::CacheBackend;
pub use entry::CacheEntry;
pub use memory::MemoryBackend;
pub use redis_backend::RedisBackend;
pub use stats::CacheStats;

// == Public Constants ==
/// The single key holding the serialized book list
pub const BOOKS_CACHE_KEY: &str = "livros";

/// Lifetime of a cached snapshot in seconds
pub const BOOKS_CACHE_TTL_SECS: u64 = 300;
