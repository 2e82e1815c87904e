//! Short URL assembly from a host and a code.

/// Cleans a user-supplied custom domain.
///
/// Trims whitespace and strips a single leading `http://` or `https://`.
/// Returns `None` only for a blank input; anything else is used as given
/// once the scheme is removed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_custom_domain(" https://go.to "), Some("go.to".to_string()));
/// assert_eq!(clean_custom_domain("   "), None);
/// ```
pub fn clean_custom_domain(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);

    Some(stripped.to_string())
}

/// Constructs the full short URL from a host and code.
///
/// Always uses HTTPS protocol. The host is not normalized.
pub fn build_short_url(host: &str, code: &str) -> String {
    format!("https://{}/{}", host, code)
}
