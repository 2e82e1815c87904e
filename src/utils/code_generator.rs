//! Short code generation and alias validation utilities.
//!
//! Random codes come from a caller-supplied [`Rng`] so that production code can
//! use a fast non-cryptographic generator while tests pin a seed.

use crate::error::ShortenError;
use rand::Rng;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 7;

/// Alphabet for generated codes: mixed-case ASCII letters and digits.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Aliases treated as already taken when nothing else is configured.
pub const DEFAULT_RESERVED_ALIASES: &[&str] = &["promo", "launch", "test", "free", "offer"];

/// Allowed alias characters: letters, digits, underscores and hyphens.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// Each character is drawn uniformly from the 62-character alphanumeric
/// alphabet. Uniqueness is not checked.
///
/// # Examples
///
/// ```ignore
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let code = generate_code(&mut rng);
/// assert_eq!(code.len(), 7);
/// ```
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns `true` if `alias` is made only of allowed alias characters.
pub fn is_valid_alias_syntax(alias: &str) -> bool {
    ALIAS_REGEX.is_match(alias)
}

/// Set of aliases that can never be handed out.
///
/// Membership is case-insensitive: entries are stored lowercased and lookups
/// lowercase the candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedAliases {
    aliases: HashSet<String>,
}

impl ReservedAliases {
    /// Builds a reserved set from any list of aliases.
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// Returns `true` if `alias` is reserved, ignoring case.
    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains(&alias.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for ReservedAliases {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_ALIASES)
    }
}

/// Validates a caller-chosen alias that has already been trimmed.
///
/// # Rules
///
/// - Allowed characters: letters, digits, underscores, hyphens
/// - Cannot be one of the reserved aliases (case-insensitive)
///
/// # Errors
///
/// Returns [`ShortenError::InvalidAliasFormat`] for disallowed characters and
/// [`ShortenError::AliasTaken`] for reserved aliases. The format check runs
/// first.
pub fn validate_alias(alias: &str, reserved: &ReservedAliases) -> Result<(), ShortenError> {
    if !is_valid_alias_syntax(alias) {
        return Err(ShortenError::InvalidAliasFormat);
    }

    if reserved.contains(alias) {
        return Err(ShortenError::AliasTaken {
            alias: alias.to_string(),
        });
    }

    Ok(())
}
