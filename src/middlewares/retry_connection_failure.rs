use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use reqwest::{Method, Request, Response};
use reqwest_middleware::{Middleware, Next};
use retry_policies::{RetryDecision, RetryPolicy};
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};
use task_local_extensions::Extensions;

static INITIAL_RETRY_DELAY_MS: f64 = 100.0;
static RETRY_DELAY_MULTIPLIER: f64 = 3.0;

/// Middleware that retries `GET` requests which failed without receiving any response
/// (connection refused, reset, timed out...).
///
/// Requests that got a response, whatever its status, are never retried. Neither are
/// requests with any other method, since they may have reached the server.
pub struct RetryConnectionFailureMiddleware {
    retry_policy: DynRetryPolicy,
}

impl RetryConnectionFailureMiddleware {
    pub fn new(retry_policy: DynRetryPolicy) -> Self {
        Self { retry_policy }
    }
}

#[async_trait]
impl Middleware for RetryConnectionFailureMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if req.method() != Method::GET {
            return next.run(req, extensions).await;
        }

        let mut n_past_retries = 0;
        loop {
            let duplicate_request = req.try_clone().ok_or_else(|| {
                reqwest_middleware::Error::Middleware(anyhow!(
                    "Request object is not clonable. Are you passing a streaming body?"
                ))
            })?;

            let result = next.clone().run(duplicate_request, extensions).await;

            // Only transport failures are retried
            let reason = match result {
                Err(reqwest_middleware::Error::Reqwest(ref e)) => e.to_string(),
                _ => return result,
            };

            match self.retry_policy.should_retry(n_past_retries) {
                RetryDecision::Retry { execute_after } => {
                    let delay = (execute_after - Utc::now())
                        .to_std()
                        .unwrap_or_default();

                    tracing::warn!(
                        "Connection to {} failed: {}. Retry attempt #{} in {}ms",
                        req.url(),
                        reason,
                        n_past_retries + 1,
                        delay.as_millis()
                    );

                    tokio::time::sleep(delay).await;
                    n_past_retries += 1;
                }
                RetryDecision::DoNotRetry => return result,
            }
        }
    }
}

/// Retry policy for requests that failed to connect.
///
/// The delay before retry `n` (1-based) is `100ms * 3^(n-1)`, scaled by a random
/// jitter factor in `[0.75, 1.0)`.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionRetryPolicy {
    pub max_n_retries: u32,
}

impl ConnectionRetryPolicy {
    pub fn new(max_n_retries: u32) -> Self {
        Self { max_n_retries }
    }
}

impl RetryPolicy for ConnectionRetryPolicy {
    fn should_retry(&self, n_past_retries: u32) -> RetryDecision {
        if n_past_retries >= self.max_n_retries {
            return RetryDecision::DoNotRetry;
        }

        let jitter = rand::thread_rng().gen_range(0.75..1.0);
        let delay_ms =
            INITIAL_RETRY_DELAY_MS * RETRY_DELAY_MULTIPLIER.powi(n_past_retries as i32) * jitter;

        RetryDecision::Retry {
            execute_after: Utc::now() + chrono::Duration::milliseconds(delay_ms as i64),
        }
    }
}

/// Wrapper type around a retry policy because `dyn RetryPolicy` does not implement `RetryPolicy`.
#[derive(Clone)]
pub struct DynRetryPolicy(pub Arc<dyn RetryPolicy + Send + Sync + 'static>);

impl RetryPolicy for DynRetryPolicy {
    fn should_retry(&self, n_past_retries: u32) -> RetryDecision {
        self.0.should_retry(n_past_retries)
    }
}

impl Debug for DynRetryPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynRetryPolicy").finish_non_exhaustive()
    }
}
