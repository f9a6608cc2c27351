//! Cache Backend Trait
//!
//! The three primitives the cache-aside layer needs from a key-value store
//! with expiry. Each call is a suspension point for the calling task.

use async_trait::async_trait;

use crate::error::Result;

/// A string key-value store that enforces TTL expiry on its own.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Short backend name for logs and stats, e.g. "redis" or "memory".
    fn name(&self) -> &'static str;

    /// Returns the value at `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` at `key`, expiring after `ttl_secs`, in one atomic step.
    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;

    /// Removes `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
