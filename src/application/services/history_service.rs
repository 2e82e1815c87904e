//! History rehydration and persistence.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::History;
use crate::infrastructure::storage::{PersistenceSlot, SlotError, SlotResult};

/// Loads and stores the [`History`] list in a persistence slot.
///
/// The slot holds the whole list as one JSON array; every save rewrites it
/// in full.
pub struct HistoryService<S: PersistenceSlot + ?Sized> {
    slot: Arc<S>,
}

impl<S: PersistenceSlot + ?Sized> HistoryService<S> {
    /// Creates a new history service.
    pub fn new(slot: Arc<S>) -> Self {
        Self { slot }
    }

    /// Returns the persisted history.
    ///
    /// Never fails:
    /// - an empty slot yields an empty history
    /// - an unreadable slot is logged and yields an empty history
    /// - malformed content is logged, removed from the slot, and yields an
    ///   empty history
    pub async fn load(&self) -> History {
        let raw = match self.slot.get().await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored history in {}", self.slot.describe());
                return History::new();
            }
            Err(e) => {
                warn!("Failed to read history from {}: {}", self.slot.describe(), e);
                return History::new();
            }
        };

        match History::from_json(&raw) {
            Ok(history) => {
                debug!(entries = history.len(), "History loaded");
                history
            }
            Err(e) => {
                warn!("Failed to parse stored history, discarding it: {}", e);
                if let Err(e) = self.slot.remove().await {
                    warn!("Failed to remove malformed history: {}", e);
                }
                History::new()
            }
        }
    }

    /// Persists `history`, replacing whatever the slot held.
    ///
    /// # Errors
    ///
    /// Returns the slot error if the write fails.
    pub async fn save(&self, history: &History) -> SlotResult<()> {
        let json = history
            .to_json()
            .map_err(|e| SlotError::Operation(e.to_string()))?;
        self.slot.set(&json).await?;
        debug!(entries = history.len(), "History saved");
        Ok(())
    }

    /// Removes the persisted history and returns the empty list.
    ///
    /// Callers must obtain user confirmation first.
    ///
    /// # Errors
    ///
    /// Returns the slot error if the removal fails.
    pub async fn clear(&self) -> SlotResult<History> {
        self.slot.remove().await?;
        info!("History cleared");
        Ok(History::new())
    }
}
