//! Core domain entities.
//!
//! - [`ShortenedEntry`] - One successful shortening kept in history
//! - [`ShortenRequest`] - Input to the shortener

pub mod entry;
pub mod shorten_request;

pub use entry::ShortenedEntry;
pub use shorten_request::ShortenRequest;
