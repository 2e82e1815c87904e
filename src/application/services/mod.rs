//! Business logic services for the application layer.

pub mod history_service;
pub mod shortener_service;

pub use history_service::HistoryService;
pub use shortener_service::ShortenerService;
