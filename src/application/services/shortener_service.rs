//! Mock URL shortening service.

use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::ShortenRequest;
use crate::error::ShortenError;
use crate::utils::code_generator::{ReservedAliases, generate_code, validate_alias};
use crate::utils::short_url::{build_short_url, clean_custom_domain};
use crate::utils::url_validator::is_valid_url;

/// Host used when neither the caller nor the configuration names one.
pub const DEFAULT_HOST: &str = "shrtco.de";

/// Simulated network latency of a successful call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1200);

/// Validates shortening requests and fabricates short URLs.
///
/// Nothing is registered anywhere: the only "taken" aliases are the
/// configured reserved set, and random codes are not checked for
/// collisions.
pub struct ShortenerService {
    reserved: ReservedAliases,
    default_host: String,
    latency: Duration,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl ShortenerService {
    /// Creates a service with an OS-seeded non-cryptographic random source.
    pub fn new(reserved: ReservedAliases, default_host: impl Into<String>, latency: Duration) -> Self {
        Self {
            reserved,
            default_host: default_host.into(),
            latency,
            rng: Mutex::new(Box::new(SmallRng::from_os_rng())),
        }
    }

    /// Creates a service from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ReservedAliases::new(&config.reserved_aliases),
            config.default_host.clone(),
            Duration::from_millis(config.latency_ms),
        )
    }

    /// Replaces the random source, e.g. with a seeded generator in tests.
    pub fn with_rng(self, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
            ..self
        }
    }

    /// Runs the validation sequence without generating anything.
    ///
    /// Checks, in order, stopping at the first failure:
    ///
    /// 1. URL is not blank → [`ShortenError::EmptyInput`]
    /// 2. URL matches the accepted shape → [`ShortenError::InvalidUrlFormat`]
    /// 3. Alias (if any, trimmed) uses allowed characters →
    ///    [`ShortenError::InvalidAliasFormat`]
    /// 4. Alias is not reserved → [`ShortenError::AliasTaken`]
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self, request: &ShortenRequest) -> Result<(), ShortenError> {
        if request.long_url.trim().is_empty() {
            return Err(ShortenError::EmptyInput);
        }

        if !is_valid_url(&request.long_url) {
            return Err(ShortenError::InvalidUrlFormat);
        }

        if let Some(alias) = request.trimmed_alias() {
            validate_alias(alias, &self.reserved)?;
        }

        Ok(())
    }

    /// Shortens a URL.
    ///
    /// Validation failures are returned immediately. A valid request waits
    /// for the simulated latency and then resolves to `{base}/{code}`, where
    /// `code` is the trimmed alias or a random 7-character code, and `base`
    /// is `https://` plus the cleaned custom domain or the default host.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`]. Returns [`ShortenError::Unknown`] if the
    /// random source is unavailable.
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<String, ShortenError> {
        self.validate(request)?;

        tokio::time::sleep(self.latency).await;

        let code = match request.trimmed_alias() {
            Some(alias) => alias.to_string(),
            None => self.random_code()?,
        };

        let host = request
            .custom_domain
            .as_deref()
            .and_then(clean_custom_domain)
            .unwrap_or_else(|| self.default_host.clone());

        let short_url = build_short_url(&host, &code);
        info!(long_url = %request.long_url, short_url = %short_url, "URL shortened");

        Ok(short_url)
    }

    fn random_code(&self) -> Result<String, ShortenError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ShortenError::unknown("random source lock poisoned"))?;
        let code = generate_code(&mut *rng);
        debug!(code = %code, "Generated random short code");
        Ok(code)
    }
}

impl Default for ShortenerService {
    fn default() -> Self {
        Self::new(ReservedAliases::default(), DEFAULT_HOST, DEFAULT_LATENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use tokio::time::Instant;

    fn service() -> ShortenerService {
        ShortenerService::default().with_rng(StdRng::seed_from_u64(7))
    }

    fn assert_random_default(short: &str) {
        let code = short
            .strip_prefix("https://shrtco.de/")
            .unwrap_or_else(|| panic!("unexpected base in {short}"));
        assert_eq!(code.len(), 7);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorten_default_host_random_code() {
        let result = service()
            .shorten(&ShortenRequest::new("https://example.com"))
            .await
            .unwrap();

        assert_random_default(&result);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorten_many_wellformed_urls() {
        let service = service();
        for url in [
            "https://example.com",
            "http://sub.example.org/path/to/page",
            "example.net?x=1",
            "https://10.0.0.1:8443/status#ok",
        ] {
            let result = service.shorten(&ShortenRequest::new(url)).await.unwrap();
            assert_random_default(&result);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorten_alias_and_custom_domain() {
        let result = service()
            .shorten(
                &ShortenRequest::new("https://example.com")
                    .with_alias("my-link")
                    .with_custom_domain("go.to"),
            )
            .await;

        assert_eq!(result.unwrap(), "https://go.to/my-link");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorten_trims_alias_and_strips_domain_scheme() {
        let result = service()
            .shorten(
                &ShortenRequest::new("https://example.com")
                    .with_alias("  launch2026 ")
                    .with_custom_domain(" https://links.acme.io "),
            )
            .await;

        assert_eq!(result.unwrap(), "https://links.acme.io/launch2026");
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_domain_used_verbatim_after_scheme() {
        let service = service();
        let request = ShortenRequest::new("https://example.com").with_alias("x");

        let scheme_only = request.clone().with_custom_domain("https://");
        assert_eq!(service.shorten(&scheme_only).await.unwrap(), "https:///x");

        let trailing_slash = request.with_custom_domain("go.to/");
        assert_eq!(
            service.shorten(&trailing_slash).await.unwrap(),
            "https://go.to//x"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_alias_and_domain_fall_back() {
        let result = service()
            .shorten(
                &ShortenRequest::new("https://example.com")
                    .with_alias("   ")
                    .with_custom_domain(""),
            )
            .await
            .unwrap();

        assert_random_default(&result);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_waits_for_latency() {
        let start = Instant::now();
        service()
            .shorten(&ShortenRequest::new("https://example.com"))
            .await
            .unwrap();

        assert!(start.elapsed() >= DEFAULT_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_is_immediate() {
        let start = Instant::now();
        let result = service().shorten(&ShortenRequest::new("not a url")).await;

        assert_eq!(result, Err(ShortenError::InvalidUrlFormat));
        assert!(start.elapsed() < DEFAULT_LATENCY);
    }

    #[tokio::test]
    async fn test_empty_input() {
        for url in ["", "   ", "\t\n"] {
            let result = service().shorten(&ShortenRequest::new(url)).await;
            assert_eq!(result, Err(ShortenError::EmptyInput));
        }
    }

    #[tokio::test]
    async fn test_invalid_alias_format() {
        let result = service()
            .shorten(&ShortenRequest::new("https://example.com").with_alias("my alias!"))
            .await;

        assert_eq!(result, Err(ShortenError::InvalidAliasFormat));
    }

    #[tokio::test]
    async fn test_alias_taken_any_case() {
        for alias in ["promo", "PROMO", "Promo", " pRoMo "] {
            let result = service()
                .shorten(&ShortenRequest::new("https://example.com").with_alias(alias))
                .await;

            assert!(
                matches!(result, Err(ShortenError::AliasTaken { .. })),
                "alias {alias:?} should be taken"
            );
        }
    }

    #[tokio::test]
    async fn test_url_checked_before_alias() {
        let result = service()
            .shorten(&ShortenRequest::new("not a url").with_alias("promo"))
            .await;

        assert_eq!(result, Err(ShortenError::InvalidUrlFormat));
    }

    #[test]
    fn test_custom_reserved_set() {
        let service = ShortenerService::new(
            ReservedAliases::new(["sale"]),
            DEFAULT_HOST,
            Duration::ZERO,
        );

        let promo = ShortenRequest::new("https://example.com").with_alias("promo");
        let sale = ShortenRequest::new("https://example.com").with_alias("SALE");

        assert!(service.validate(&promo).is_ok());
        assert!(matches!(
            service.validate(&sale),
            Err(ShortenError::AliasTaken { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_rng_is_reproducible() {
        let request = ShortenRequest::new("https://example.com");

        let a = service().shorten(&request).await.unwrap();
        let b = service().shorten(&request).await.unwrap();

        assert_eq!(a, b);
    }
}
