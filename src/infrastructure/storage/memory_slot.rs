//! Process-local slot for tests and the `memory` backend.

use std::sync::Mutex;

use super::slot::{PersistenceSlot, SlotError, SlotResult};
use async_trait::async_trait;
use tracing::debug;

/// A slot that keeps its value in memory.
///
/// Nothing survives the process. Used when persistence is explicitly
/// disabled, as the fallback when Redis is unreachable, and in tests.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        debug!("Using MemorySlot (history is not persisted)");
        Self::default()
    }

    /// Creates a slot that already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }

    fn lock(&self) -> SlotResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.value
            .lock()
            .map_err(|_| SlotError::Operation("memory slot lock poisoned".to_string()))
    }
}

#[async_trait]
impl PersistenceSlot for MemorySlot {
    async fn get(&self) -> SlotResult<Option<String>> {
        Ok(self.lock()?.clone())
    }

    async fn set(&self, value: &str) -> SlotResult<()> {
        *self.lock()? = Some(value.to_string());
        Ok(())
    }

    async fn remove(&self) -> SlotResult<()> {
        *self.lock()? = None;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_by_default() {
        let slot = MemorySlot::new();
        assert_eq!(slot.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let slot = MemorySlot::new();

        slot.set("[]").await.unwrap();
        assert_eq!(slot.get().await.unwrap().as_deref(), Some("[]"));

        slot.remove().await.unwrap();
        assert_eq!(slot.get().await.unwrap(), None);

        // Removing twice is fine.
        slot.remove().await.unwrap();
    }

    #[tokio::test]
    async fn test_with_value() {
        let slot = MemorySlot::with_value("garbage");
        assert_eq!(slot.get().await.unwrap().as_deref(), Some("garbage"));
        assert!(slot.health_check().await);
    }
}
