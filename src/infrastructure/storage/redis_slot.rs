//! Redis-backed slot implementation.

use super::slot::{PersistenceSlot, SlotError, SlotResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Default namespace prepended to the slot name.
pub const DEFAULT_KEY_PREFIX: &str = "link-shortener:";

/// Slot stored as a single Redis string key.
///
/// Uses `ConnectionManager` for automatic reconnection. Errors are returned
/// to the caller.
pub struct RedisSlot {
    client: ConnectionManager,
    key: String,
}

impl RedisSlot {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `slot_name` - Name of the slot; the Redis key is
    ///   [`DEFAULT_KEY_PREFIX`] followed by this name
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, slot_name: &str) -> SlotResult<Self> {
        info!("Connecting to Redis history slot '{}'", slot_name);

        let client = Client::open(redis_url)
            .map_err(|e| SlotError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| SlotError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| SlotError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key: build_key(DEFAULT_KEY_PREFIX, slot_name),
        })
    }
}

/// Constructs the full Redis key with namespace prefix.
fn build_key(prefix: &str, slot_name: &str) -> String {
    format!("{}{}", prefix, slot_name)
}

#[async_trait]
impl PersistenceSlot for RedisSlot {
    async fn get(&self) -> SlotResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&self.key)
            .await
            .map_err(|e| SlotError::Operation(format!("Redis GET {} failed: {}", self.key, e)))?;

        debug!(key = %self.key, present = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set(&self, value: &str) -> SlotResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&self.key, value)
            .await
            .map_err(|e| SlotError::Operation(format!("Redis SET {} failed: {}", self.key, e)))?;

        debug!(key = %self.key, bytes = value.len(), "Redis SET");
        Ok(())
    }

    async fn remove(&self) -> SlotResult<()> {
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&self.key).await {
            Ok(deleted) => {
                debug!(key = %self.key, deleted, "Redis DEL");
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", self.key, e);
                Err(SlotError::Operation(e.to_string()))
            }
        }
    }

    fn describe(&self) -> String {
        format!("redis key {}", self.key)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_key() {
        assert_eq!(
            build_key(DEFAULT_KEY_PREFIX, "shortenedUrls"),
            "link-shortener:shortenedUrls"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisSlot::connect("not-a-redis-url", "shortenedUrls").await;
        assert!(matches!(result, Err(SlotError::Connection(_))));
    }
}
