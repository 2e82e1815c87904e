//! Persistence slot trait and error types.

use async_trait::async_trait;

/// Errors that can occur while reading or writing a slot.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("Slot connection error: {0}")]
    Connection(String),

    #[error("Slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slot operation error: {0}")]
    Operation(String),
}

/// Result type for slot operations.
pub type SlotResult<T> = Result<T, SlotError>;

/// A single named key-value location holding one string value.
///
/// The history is stored as one JSON document in one slot, so the trait has
/// no notion of keys: each implementation is bound to its slot name at
/// construction.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileSlot`] - JSON file on local disk
/// - [`crate::infrastructure::storage::MemorySlot`] - Process-local value
/// - [`crate::infrastructure::storage::RedisSlot`] - Redis string key
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceSlot: Send + Sync {
    /// Reads the stored value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the slot holds a value
    /// - `Ok(None)` if the slot is empty
    async fn get(&self) -> SlotResult<Option<String>>;

    /// Replaces the stored value.
    async fn set(&self, value: &str) -> SlotResult<()>;

    /// Empties the slot. Removing an empty slot is not an error.
    async fn remove(&self) -> SlotResult<()>;

    /// Short description used in logs and the configuration summary.
    fn describe(&self) -> String;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
