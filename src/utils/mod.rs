//! Utility functions for code generation, URL validation, and short URL assembly.
//!
//! - [`code_generator`] - Random short codes and alias validation
//! - [`url_validator`] - Shape check for long URLs
//! - [`short_url`] - Custom domain cleanup and short URL formatting

pub mod code_generator;
pub mod short_url;
pub mod url_validator;
