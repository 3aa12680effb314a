use dream_lotto::domain::ports::FortuneSource;
use dream_lotto::{FortuneError, GeminiClient, RetryPolicy};
use httpmock::prelude::*;
use std::time::{Duration, Instant};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(server.base_url(), "gemini-1.5-flash").with_api_key("test-key")
}

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::from_millis(1))
}

async fn divine_with_retry(
    policy: &RetryPolicy,
    source: &GeminiClient,
) -> dream_lotto::Result<serde_json::Value> {
    policy
        .run(FortuneError::is_retryable, || source.divine("돼지가 나오는 꿈"))
        .await
}

#[tokio::test]
async fn test_success_needs_a_single_attempt() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(GEMINI_PATH)
            .query_param("key", "test-key");
        then.status(200).json_body(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"interpretation\":\"길몽\"}" }] } }
            ]
        }));
    });

    let payload = divine_with_retry(&fast_policy(5), &client(&server))
        .await
        .unwrap();

    assert_eq!(payload["interpretation"], "길몽");
    mock.assert_hits(1);
}

#[tokio::test]
async fn test_rate_limited_upstream_is_retried_to_exhaustion() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GEMINI_PATH);
        then.status(429);
    });

    let result = divine_with_retry(&fast_policy(5), &client(&server)).await;

    mock.assert_hits(5);
    match result {
        Err(FortuneError::UpstreamStatus { status, .. }) => assert_eq!(status, 429),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_request_is_not_retried() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GEMINI_PATH);
        then.status(400)
            .json_body(serde_json::json!({ "error": { "message": "API key not valid" } }));
    });

    let result = divine_with_retry(&fast_policy(5), &client(&server)).await;

    mock.assert_hits(1);
    match result {
        Err(FortuneError::UpstreamStatus { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_backoff_delay_doubles_between_attempts() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GEMINI_PATH);
        then.status(503);
    });

    let policy = RetryPolicy::new(3, Duration::from_millis(20));
    let started = Instant::now();
    let result = divine_with_retry(&policy, &client(&server)).await;
    let elapsed = started.elapsed();

    mock.assert_hits(3);
    assert!(result.is_err());
    // Two waits: 20ms then 40ms.
    assert!(
        elapsed >= Duration::from_millis(60),
        "elapsed {:?} shorter than the backoff schedule",
        elapsed
    );
}

#[tokio::test]
async fn test_missing_api_key_fails_before_any_call() {
    std::env::remove_var("GEMINI_API_KEY");

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GEMINI_PATH);
        then.status(200);
    });

    let source = GeminiClient::new(server.base_url(), "gemini-1.5-flash");
    let result = divine_with_retry(&fast_policy(5), &source).await;

    mock.assert_hits(0);
    match result {
        Err(FortuneError::MissingConfigError { field }) => assert_eq!(field, "GEMINI_API_KEY"),
        other => panic!("unexpected result: {:?}", other),
    }
}
