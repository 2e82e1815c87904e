//! Application layer orchestrating validation, history and front-end state.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Validation and mock short URL generation
//! - [`services::history_service::HistoryService`] - History rehydration and persistence
//!
//! [`session::Session`] ties both to the front end: it owns the
//! [`crate::state::AppState`], applies actions through [`crate::state::reduce`],
//! and notifies a [`session::Renderer`] after every change.

pub mod services;
pub mod session;
