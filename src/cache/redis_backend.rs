//! Redis Cache Backend
//!
//! Talks to an external Redis server over one multiplexed connection.
//! The connection is opened on first use and discarded after an I/O failure,
//! so a Redis restart costs the failing request a 500 and nothing more.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Client, FromRedisValue};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::CacheBackend;
use crate::error::Result;

// == Redis Backend ==
pub struct RedisBackend {
    client: Client,
    conn: Mutex<Option<MultiplexedConnection>>,
}

impl RedisBackend {
    // == Constructor ==
    /// Creates a backend for `url` (e.g. `redis://localhost:6379/0`).
    ///
    /// Only the URL is validated here; no connection is made until the first command.
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::open(url)?,
            conn: Mutex::new(None),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        let mut guard = self.conn.lock().await;
        if let Some(conn) = guard.as_ref() {
            return Ok(conn.clone());
        }

        let conn = self.client.get_multiplexed_tokio_connection().await?;
        debug!("Connected to Redis at {:?}", self.client.get_connection_info().addr);
        *guard = Some(conn.clone());
        Ok(conn)
    }

    async fn query<T: FromRedisValue>(&self, cmd: &redis::Cmd) -> Result<T> {
        let mut conn = self.connection().await?;
        match cmd.query_async(&mut conn).await {
            Ok(value) => Ok(value),
            Err(err) => {
                if err.is_io_error() || err.is_connection_dropped() {
                    warn!("Dropping Redis connection after failure: {}", err);
                    *self.conn.lock().await = None;
                }
                Err(err.into())
            }
        }
    }
}

#[async_trait]
impl CacheBackend for RedisBackend {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.query(redis::cmd("GET").arg(key)).await
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        self.query(redis::cmd("SETEX").arg(key).arg(ttl_secs).arg(value))
            .await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        // DEL replies with the number of removed keys; 0 is fine
        let _removed: i64 = self.query(redis::cmd("DEL").arg(key)).await?;
        Ok(())
    }
}
