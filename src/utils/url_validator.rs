//! Shape check for long URLs submitted for shortening.
//!
//! This is a syntactic filter, not a parser: it accepts the common
//! `scheme://host[:port][/path][?query][#fragment]` forms with the scheme
//! optional, and rejects anything containing whitespace or exotic characters.

use regex::Regex;
use std::sync::LazyLock;

/// Case-insensitive URL shape.
///
/// - optional `http://` or `https://`
/// - dotted domain name with an alphabetic TLD of 2+ letters, or an IPv4 quad
/// - optional `:port`, path segments, query string and fragment
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:[hH][tT][tT][pP][sS]?://)?",
        r"(?:(?:(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])*)\.)+[a-zA-Z]{2,}",
        r"|(?:[0-9]{1,3}\.){3}[0-9]{1,3})",
        r"(?::[0-9]+)?",
        r"(?:/[-a-zA-Z0-9%_.~+]*)*",
        r"(?:\?[;&a-zA-Z0-9%_.~+=-]*)?",
        r"(?:#[-a-zA-Z0-9_]*)?$",
    ))
    .unwrap()
});

/// Returns `true` when `input` looks like a URL worth shortening.
///
/// The input is matched as given; callers decide whether to trim first.
pub fn is_valid_url(input: &str) -> bool {
    URL_REGEX.is_match(input)
}
