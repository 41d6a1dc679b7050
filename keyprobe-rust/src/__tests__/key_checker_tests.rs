use std::sync::Arc;

use async_trait::async_trait;

use crate::key_checker::{CheckOutcome, KeyChecker};
use crate::networking::{NetworkProvider, RequestArgs, Response};

struct MockNetworkProvider {
    status_code: u16,
    body: Option<&'static str>,
    error: Option<&'static str>,
    timed_out: bool,
}

impl MockNetworkProvider {
    fn with_status(status_code: u16, body: &'static str) -> Self {
        MockNetworkProvider {
            status_code,
            body: Some(body),
            error: None,
            timed_out: false,
        }
    }
}

#[async_trait]
impl NetworkProvider for MockNetworkProvider {
    async fn send(&self, _args: &RequestArgs) -> Response {
        Response {
            status_code: self.status_code,
            data: self.body.map(|body| body.as_bytes().to_vec()),
            error: self.error.map(String::from),
            timed_out: self.timed_out,
        }
    }
}

async fn check_with(provider: MockNetworkProvider) -> CheckOutcome {
    let checker = KeyChecker::new(None, Some(Arc::new(provider)));
    checker.check_key("abcd1234efgh", 1000).await
}

#[tokio::test]
async fn test_200_with_result_is_success() {
    let outcome = check_with(MockNetworkProvider::with_status(
        200,
        r#"{"result": [{"country_key": 1}]}"#,
    ))
    .await;

    assert!(outcome.ok);
    assert_eq!(outcome.status_code, Some(200));
    assert_eq!(outcome.detail, "OK (200 with 'result' in the response)");
}

#[tokio::test]
async fn test_200_without_result_is_failure() {
    let outcome = check_with(MockNetworkProvider::with_status(200, "{}")).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, Some(200));
    assert_eq!(outcome.detail, "200 but no 'result' field in the response");
}

#[tokio::test]
async fn test_200_with_unparseable_body_matches_missing_field() {
    let garbage = check_with(MockNetworkProvider::with_status(200, "<html>oops</html>")).await;
    let missing = check_with(MockNetworkProvider::with_status(200, "{}")).await;

    assert!(!garbage.ok);
    assert_eq!(garbage.status_code, Some(200));
    assert_eq!(garbage.detail, missing.detail);
}

#[tokio::test]
async fn test_200_with_non_object_body_is_failure() {
    let outcome = check_with(MockNetworkProvider::with_status(200, r#"["result"]"#)).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, Some(200));
}

#[tokio::test]
async fn test_401_is_unauthorized() {
    let outcome = check_with(MockNetworkProvider::with_status(401, "")).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, Some(401));
    assert!(outcome.detail.contains("Unauthorized"));
}

#[tokio::test]
async fn test_403_is_forbidden() {
    let outcome = check_with(MockNetworkProvider::with_status(403, "")).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, Some(403));
    assert!(outcome.detail.contains("Forbidden"));
}

#[tokio::test]
async fn test_429_is_rate_limited() {
    let outcome = check_with(MockNetworkProvider::with_status(429, "")).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, Some(429));
    assert!(outcome.detail.contains("Too Many Requests"));
}

#[tokio::test]
async fn test_other_status_is_generic_http_error() {
    let outcome = check_with(MockNetworkProvider::with_status(503, "")).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, Some(503));
    assert_eq!(outcome.detail, "HTTP error 503");
}

#[tokio::test]
async fn test_timeout_has_no_status() {
    let outcome = check_with(MockNetworkProvider {
        status_code: 0,
        body: None,
        error: Some("operation timed out"),
        timed_out: true,
    })
    .await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, None);
    assert!(outcome.detail.contains("Timeout"));
}

#[tokio::test]
async fn test_transport_error_embeds_description() {
    let outcome = check_with(MockNetworkProvider {
        status_code: 0,
        body: None,
        error: Some("dns error: failed to lookup address"),
        timed_out: false,
    })
    .await;

    assert!(!outcome.ok);
    assert_eq!(outcome.status_code, None);
    assert!(outcome.detail.contains("dns error: failed to lookup address"));
}

#[tokio::test]
async fn test_classification_is_idempotent() {
    let first = check_with(MockNetworkProvider::with_status(401, "")).await;
    let second = check_with(MockNetworkProvider::with_status(401, "")).await;

    assert_eq!(first.ok, second.ok);
    assert_eq!(first.status_code, second.status_code);
    assert_eq!(first.detail, second.detail);
}
