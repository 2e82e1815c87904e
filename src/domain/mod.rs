//! Domain layer containing the history model and entities.
//!
//! - [`entities`] - Core data structures
//! - [`history`] - Immutable most-recent-first history list
//!
//! The domain layer has no dependencies on storage, terminal or runtime
//! concerns. Orchestration lives in [`crate::application`].

pub mod entities;
pub mod history;

pub use history::History;
