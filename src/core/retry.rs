//! Bounded retry with exponential backoff, jitter and an optional fallback value
use crate::utils::error::{DirectoryError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry, doubled for each later one
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Upper bound on any single delay, jitter included
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Random extra delay drawn from `0..jitter_ms`
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    10_000
}

fn default_jitter_ms() -> u64 {
    1000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            jitter_ms: default_jitter_ms(),
        }
    }
}

impl RetryPolicy {
    /// Delay after the failed attempt with 0-based index `attempt`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self
            .initial_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt));
        let jitter = if self.jitter_ms > 0 {
            rand::thread_rng().gen_range(0..self.jitter_ms)
        } else {
            0
        };

        Duration::from_millis(base.saturating_add(jitter).min(self.max_delay_ms))
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or the
/// attempts run out. With a `fallback`, any final failure yields the fallback
/// instead of an error.
pub async fn fetch_with_retry<F, Fut, T>(
    policy: &RetryPolicy,
    fallback: Option<T>,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    let error = loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                attempt += 1;

                if !e.is_retryable() {
                    break e;
                }

                if attempt >= max_attempts {
                    break DirectoryError::RetryExhausted {
                        attempts: attempt,
                        last_error: Box::new(e),
                    };
                }

                let delay = policy.delay_for_attempt(attempt - 1);
                tracing::warn!(
                    "Request failed (attempt {}/{}). Retrying in {}ms: {}",
                    attempt,
                    max_attempts,
                    delay.as_millis(),
                    e
                );
                tokio::time::sleep(delay).await;
            }
        }
    };

    match fallback {
        Some(value) => {
            tracing::error!("All fetch attempts failed, using fallback: {}", error);
            Ok(value)
        }
        None => {
            tracing::error!("All fetch attempts failed: {}", error);
            Err(error)
        }
    }
}
