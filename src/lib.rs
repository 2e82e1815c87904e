//! # Link Shortener
//!
//! A terminal URL shortener: validates a long URL and an optional custom
//! alias, produces a short link after a simulated service delay, and keeps a
//! persisted history of everything shortened.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - History entries and the immutable history list
//! - **Application Layer** ([`application`]) - Shortening and history services, session flow
//! - **Infrastructure Layer** ([`infrastructure`]) - Persistence slots, clipboard, confirmation prompts
//! - **CLI Layer** ([`cli`]) - Commands, interactive form and rendering
//!
//! State transitions live in [`state`] as a pure reducer; [`bootstrap`]
//! wires everything together from [`config::Config`].
//!
//! ## Features
//!
//! - URL validation with a fixed pattern (scheme optional)
//! - Custom aliases with a reserved-word list
//! - Custom domains (scheme prefix stripped)
//! - History persisted in a file, in Redis, or kept in memory
//! - Clipboard copy with a short-lived "copied" indicator
//!
//! ## Quick Start
//!
//! ```bash
//! link-shortener shorten https://example.com/some/long/path --alias my-link
//! link-shortener history
//! link-shortener copy 1
//! link-shortener clear
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod application;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use error::ShortenError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{HistoryService, ShortenerService};
    pub use crate::application::session::{Renderer, Session, SubmitOutcome};
    pub use crate::domain::History;
    pub use crate::domain::entities::{ShortenRequest, ShortenedEntry};
    pub use crate::error::ShortenError;
    pub use crate::infrastructure::clipboard::Clipboard;
    pub use crate::infrastructure::storage::{FileSlot, MemorySlot, PersistenceSlot};
    pub use crate::state::{Action, AppState};
    pub use crate::utils::code_generator::ReservedAliases;
}
