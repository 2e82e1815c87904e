//! Persistence slot backends for the history list.
//!
//! Provides a [`PersistenceSlot`] trait with three implementations:
//! - [`FileSlot`] - JSON document on local disk (default)
//! - [`MemorySlot`] - Process-local, nothing persisted
//! - [`RedisSlot`] - Single Redis string key

mod file_slot;
mod memory_slot;
mod redis_slot;
mod slot;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;
pub use redis_slot::{DEFAULT_KEY_PREFIX, RedisSlot};
pub use slot::{PersistenceSlot, SlotError, SlotResult};

#[cfg(test)]
pub use slot::MockPersistenceSlot;
