//! Error taxonomy for shortening attempts.

/// Reasons a shortening attempt can fail.
///
/// Every variant is terminal for the current submission: the front end shows
/// the [`Display`](std::fmt::Display) message and never retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    #[error("URL cannot be empty.")]
    EmptyInput,

    #[error("Please enter a valid URL (e.g., https://example.com).")]
    InvalidUrlFormat,

    #[error("Alias can only contain letters, numbers, hyphens, and underscores.")]
    InvalidAliasFormat,

    #[error("Alias '{alias}' is already taken. Please try another one.")]
    AliasTaken { alias: String },

    /// Catch-all for failures that are not caused by the input.
    ///
    /// The detail is meant for logs; the displayed message stays generic.
    #[error("An unknown error occurred.")]
    Unknown(String),
}

impl ShortenError {
    /// Builds an [`ShortenError::Unknown`] from any displayable cause.
    pub fn unknown(detail: impl std::fmt::Display) -> Self {
        Self::Unknown(detail.to_string())
    }

    /// Stable machine-readable code, recorded as the `code` field of log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidUrlFormat => "invalid_url_format",
            Self::InvalidAliasFormat => "invalid_alias_format",
            Self::AliasTaken { .. } => "alias_taken",
            Self::Unknown(_) => "unknown",
        }
    }
}
