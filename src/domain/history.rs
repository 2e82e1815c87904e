//! Ordered list of past shortening results.
//!
//! [`History`] is a value: every operation that changes the list returns a
//! new `History` and leaves the receiver untouched. Entries are kept
//! most-recent-first and ids are unique within one list.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::entities::ShortenedEntry;

/// Most-recent-first list of [`ShortenedEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<ShortenedEntry>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from entries already ordered most-recent-first.
    ///
    /// If an id appears more than once, only its first occurrence is kept.
    pub fn from_entries(entries: Vec<ShortenedEntry>) -> Self {
        let mut seen = HashSet::with_capacity(entries.len());
        let entries = entries
            .into_iter()
            .filter(|e| seen.insert(e.id.clone()))
            .collect();
        Self { entries }
    }

    /// Parses the persisted JSON form (an array of entries).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for anything that is not an array of
    /// well-formed entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<ShortenedEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Encodes the list in its persisted JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Returns a new history with `entry` placed before all existing entries.
    ///
    /// The caller is responsible for giving `entry` an id not already in the
    /// list; see [`History::next_id`].
    pub fn append(&self, entry: ShortenedEntry) -> Self {
        debug_assert!(!self.contains_id(&entry.id), "duplicate history id");

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// Returns an empty history.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Produces an id for a new entry created at `now`.
    ///
    /// The id is the RFC 3339 timestamp with millisecond precision. When an
    /// entry with that id already exists, `-1`, `-2`, ... is appended until
    /// the id is free.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let base = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        if !self.contains_id(&base) {
            return base;
        }

        (1..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| !self.contains_id(candidate))
            .unwrap_or(base)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the entry at `index` (0 is the most recent).
    pub fn get(&self, index: usize) -> Option<&ShortenedEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ShortenedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShortenedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a ShortenedEntry;
    type IntoIter = std::slice::Iter<'a, ShortenedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
