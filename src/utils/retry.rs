use crate::utils::error::{FortuneError, Result};
use std::future::Future;
use std::time::Duration;

/// Bounded exponential backoff around a fallible async operation.
///
/// The delay before attempt `n + 1` is `base_delay * 2^(n - 1)`, so the
/// default policy sleeps 1s, 2s, 4s, 8s between its five attempts.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    fn delay_for(&self, completed_attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(completed_attempt.saturating_sub(1))
    }

    /// Run `op` until it succeeds, `retryable` rejects the error, or the
    /// attempts run out. The last error is surfaced unchanged.
    pub async fn run<T, F, Fut, P>(&self, retryable: P, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
        P: Fn(&FortuneError) -> bool,
    {
        let mut attempt: u32 = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_attempts && retryable(&e) => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        "Attempt {}/{} failed ({}), retrying in {:?}",
                        attempt,
                        self.max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
