mod common;

use std::time::Duration;

use link_shortener::domain::entities::ShortenRequest;
use link_shortener::error::ShortenError;

#[tokio::test]
async fn test_shorten_with_alias_and_default_host() {
    let service = common::shortener(Duration::ZERO);
    let request = ShortenRequest::new("https://example.com/some/long/path").with_alias("my-link");

    let short = service.shorten(&request).await.unwrap();
    assert_eq!(short, "https://shrtco.de/my-link");
}

#[tokio::test]
async fn test_shorten_with_custom_domain_strips_scheme() {
    let service = common::shortener(Duration::ZERO);
    let request = ShortenRequest::new("example.com/page")
        .with_alias("docs")
        .with_custom_domain("  https://go.to ");

    let short = service.shorten(&request).await.unwrap();
    assert_eq!(short, "https://go.to/docs");
}

#[tokio::test]
async fn test_random_code_shape() {
    let service = common::shortener(Duration::ZERO);
    let request = ShortenRequest::new("http://192.168.0.1:8080/admin?x=1#top");

    let short = service.shorten(&request).await.unwrap();
    let code = short.strip_prefix("https://shrtco.de/").unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_validation_order() {
    let service = common::shortener(Duration::ZERO);

    let cases = [
        (ShortenRequest::new("   ").with_alias("bad alias!"), ShortenError::EmptyInput),
        (
            ShortenRequest::new("not a url").with_alias("bad alias!"),
            ShortenError::InvalidUrlFormat,
        ),
        (
            ShortenRequest::new("https://example.com").with_alias("bad alias!"),
            ShortenError::InvalidAliasFormat,
        ),
        (
            ShortenRequest::new("https://example.com").with_alias("PROMO"),
            ShortenError::AliasTaken {
                alias: "PROMO".to_string(),
            },
        ),
    ];

    for (request, expected) in cases {
        assert_eq!(service.shorten(&request).await.unwrap_err(), expected);
    }
}

#[tokio::test]
async fn test_blank_alias_means_random_code() {
    let service = common::shortener(Duration::ZERO);
    let request = ShortenRequest::new("https://example.com").with_alias("   ");

    let short = service.shorten(&request).await.unwrap();
    assert_eq!(short.len(), "https://shrtco.de/".len() + 7);
}

#[tokio::test(start_paused = true)]
async fn test_success_waits_for_latency() {
    let service = common::shortener(Duration::from_millis(1200));
    let request = ShortenRequest::new("https://example.com").with_alias("later");

    let started = tokio::time::Instant::now();
    service.shorten(&request).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1200));
}

#[tokio::test(start_paused = true)]
async fn test_rejection_is_immediate() {
    let service = common::shortener(Duration::from_millis(1200));
    let request = ShortenRequest::new("");

    let started = tokio::time::Instant::now();
    assert_eq!(
        service.shorten(&request).await.unwrap_err(),
        ShortenError::EmptyInput
    );
    assert_eq!(started.elapsed(), Duration::ZERO);
}
