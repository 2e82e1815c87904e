//! Input for a single shortening attempt.

/// What the front end submits to the shortener.
///
/// `alias` and `custom_domain` are optional; blank strings are treated the
/// same as `None` by the shortener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenRequest {
    pub long_url: String,
    pub alias: Option<String>,
    pub custom_domain: Option<String>,
}

impl ShortenRequest {
    /// Creates a request for `long_url` with no alias or custom domain.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            ..Self::default()
        }
    }

    /// Sets the caller-chosen alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the custom domain used instead of the default host.
    pub fn with_custom_domain(mut self, domain: impl Into<String>) -> Self {
        self.custom_domain = Some(domain.into());
        self
    }

    /// Returns the trimmed alias, or `None` if absent or blank.
    pub fn trimmed_alias(&self) -> Option<&str> {
        self.alias
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}
