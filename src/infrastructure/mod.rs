//! Infrastructure layer for external collaborators.
//!
//! # Modules
//!
//! - [`storage`] - Persistence slot backends (file, memory, Redis)
//! - [`clipboard`] - Write-only clipboard access
//! - [`confirm`] - Yes/no confirmation prompts

pub mod clipboard;
pub mod confirm;
pub mod storage;
