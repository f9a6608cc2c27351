//! Configuration Module
//!
//! Fixed connection parameters for the cache backend and the HTTP listener.
//! Nothing here is read from the environment; the cache key and TTL live in
//! [`crate::cache`].

// == Connection Constants ==
/// Redis host name
pub const REDIS_HOST: &str = "localhost";

/// Redis port
pub const REDIS_PORT: u16 = 6379;

/// Redis logical database index
pub const REDIS_DB: i64 = 0;

/// HTTP server port
pub const SERVER_PORT: u16 = 8000;

/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Redis host name
    pub redis_host: String,
    /// Redis port
    pub redis_port: u16,
    /// Redis logical database index
    pub redis_db: i64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Connection URL for the Redis backend, e.g. `redis://localhost:6379/0`.
    pub fn redis_url(&self) -> String {
        format!(
            "redis://{}:{}/{}",
            self.redis_host, self.redis_port, self.redis_db
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_host: REDIS_HOST.to_string(),
            redis_port: REDIS_PORT,
            redis_db: REDIS_DB,
            server_port: SERVER_PORT,
        }
    }
}
