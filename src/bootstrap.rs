//! Component wiring from configuration.
//!
//! Handles persistence backend selection (with fallback), service
//! construction, and session startup.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{HistoryService, ShortenerService};
use crate::application::session::{Renderer, Session};
use crate::config::{Config, HistoryBackend};
use crate::infrastructure::clipboard::Clipboard;
use crate::infrastructure::storage::{FileSlot, MemorySlot, PersistenceSlot, RedisSlot};

/// Opens the persistence slot selected by `config`.
///
/// A Redis backend that cannot be reached degrades to [`MemorySlot`] with a
/// warning instead of failing startup.
pub async fn build_slot(config: &Config) -> Arc<dyn PersistenceSlot> {
    match config.history_backend {
        HistoryBackend::File => {
            tracing::debug!("History stored in {}", config.history_file.display());
            Arc::new(FileSlot::new(config.history_file.clone()))
        }
        HistoryBackend::Memory => {
            tracing::info!("History persistence disabled (MemorySlot)");
            Arc::new(MemorySlot::new())
        }
        HistoryBackend::Redis => {
            let Some(redis_url) = config.redis_url.as_deref() else {
                tracing::warn!("Redis backend selected without a URL. Using MemorySlot.");
                return Arc::new(MemorySlot::new());
            };

            match RedisSlot::connect(redis_url, &config.history_slot).await {
                Ok(redis) => {
                    tracing::info!("History enabled (Redis)");
                    Arc::new(redis)
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to connect to Redis: {}. History will not be persisted.",
                        e
                    );
                    Arc::new(MemorySlot::new())
                }
            }
        }
    }
}

/// Opens the configured slot and reports what it is and whether it is usable.
///
/// A Redis backend that fell back to memory is reported as `memory`.
pub async fn check_storage(config: &Config) -> (String, bool) {
    let slot = build_slot(config).await;
    let healthy = slot.health_check().await;
    (slot.describe(), healthy)
}

/// Builds and starts a session: opens the slot, creates services, and
/// rehydrates the history.
pub async fn start_session(
    config: &Config,
    clipboard: Arc<dyn Clipboard>,
    renderer: Arc<dyn Renderer>,
) -> Session {
    let slot = build_slot(config).await;
    let history = Arc::new(HistoryService::new(slot));
    let shortener = Arc::new(ShortenerService::from_config(config));

    Session::new(shortener, history, clipboard, renderer)
        .with_copy_feedback(Duration::from_millis(config.copy_feedback_ms))
        .start()
        .await
}
