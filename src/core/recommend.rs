use crate::domain::ports::FortuneSource;
use crate::utils::error::{FortuneError, Result};
use crate::utils::retry::RetryPolicy;

/// Message returned with a 400 when the submission carries no dream text.
pub const DREAM_REQUIRED_MESSAGE: &str = "Dream description is required.";

/// Request-forwarding service behind the recommendation endpoint: one
/// retried upstream call sequence per invocation, no state kept between
/// invocations.
pub struct RecommendService<F: FortuneSource> {
    source: F,
    retry: RetryPolicy,
}

impl<F: FortuneSource> RecommendService<F> {
    pub fn new(source: F, retry: RetryPolicy) -> Self {
        Self { source, retry }
    }

    /// Forward a dream to the upstream service and return its structured
    /// payload untouched. An empty dream short-circuits before any network
    /// call is made.
    pub async fn recommend(&self, dream: &str) -> Result<serde_json::Value> {
        let dream = dream.trim();
        if dream.is_empty() {
            return Err(FortuneError::ValidationError {
                message: DREAM_REQUIRED_MESSAGE.to_string(),
            });
        }

        tracing::debug!("Forwarding dream ({} chars) to upstream", dream.chars().count());
        self.retry
            .run(FortuneError::is_retryable, || self.source.divine(dream))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    struct CountingSource {
        calls: AtomicU32,
        fail_with_status: Option<u16>,
    }

    impl CountingSource {
        fn succeeding() -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail_with_status: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail_with_status: Some(status),
            }
        }
    }

    #[async_trait]
    impl FortuneSource for CountingSource {
        async fn divine(&self, _dream: &str) -> Result<serde_json::Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with_status {
                Some(status) => Err(FortuneError::UpstreamStatus {
                    status,
                    message: "upstream failure".to_string(),
                }),
                None => Ok(serde_json::json!({ "interpretation": "길몽입니다." })),
            }
        }
    }

    fn fast_retry() -> RetryPolicy {
        RetryPolicy::new(5, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_empty_dream_skips_network_call() {
        let source = CountingSource::succeeding();
        let service = RecommendService::new(source, fast_retry());

        let result = service.recommend("   ").await;
        match result {
            Err(FortuneError::ValidationError { message }) => {
                assert_eq!(message, DREAM_REQUIRED_MESSAGE);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_passes_payload_through() {
        let service = RecommendService::new(CountingSource::succeeding(), fast_retry());
        let payload = service.recommend("어제 돼지가 나오는 꿈").await.unwrap();
        assert_eq!(payload["interpretation"], "길몽입니다.");
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_to_the_bound() {
        let service = RecommendService::new(CountingSource::failing(503), fast_retry());
        let result = service.recommend("어제 돼지가 나오는 꿈").await;
        assert!(result.is_err());
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_client_errors_fail_after_one_attempt() {
        let service = RecommendService::new(CountingSource::failing(400), fast_retry());
        let result = service.recommend("어제 돼지가 나오는 꿈").await;
        assert!(result.is_err());
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 1);
    }
}
