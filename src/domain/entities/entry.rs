//! History entry representing one successful shortening.

use serde::{Deserialize, Serialize};

/// One past shortening result.
///
/// Serialized as `{"id": .., "original": .., "short": ..}`, which is the
/// persisted history format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedEntry {
    /// Opaque identifier, unique within a history list.
    pub id: String,
    /// The long URL exactly as submitted.
    pub original: String,
    /// The short URL returned for it.
    pub short: String,
}

impl ShortenedEntry {
    /// Creates a new entry.
    pub fn new(id: impl Into<String>, original: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            original: original.into(),
            short: short.into(),
        }
    }
}
