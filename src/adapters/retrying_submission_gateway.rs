//! Retry wrapper for submission gateways.
//!
//! Only connection failures are retried: in that case the request never reached the
//! collector, so another attempt cannot record the response twice.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::GatewayConfig;
use crate::domain::response::Payload;
use crate::ports::{SubmissionError, SubmissionErrorKind, SubmissionGateway};

const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.retry_delay_ms.max(1),
            max_delay_ms: DEFAULT_MAX_DELAY_MS.max(config.retry_delay_ms),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_retry(&self, failed_attempt: u32) -> Duration {
        // attempt=1 -> base, attempt=2 -> base*2, attempt=3 -> base*4, capped.
        let exponent = failed_attempt.saturating_sub(1).min(6);
        let multiplier = 1_u64 << exponent;
        let backoff_ms = self.base_delay_ms.saturating_mul(multiplier).min(self.max_delay_ms);
        let jitter_ms = compute_jitter_ms(backoff_ms);
        Duration::from_millis(backoff_ms.saturating_add(jitter_ms).min(self.max_delay_ms))
    }
}

pub struct RetryingSubmissionGateway<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G: SubmissionGateway> RetryingSubmissionGateway<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<G: SubmissionGateway> SubmissionGateway for RetryingSubmissionGateway<G> {
    fn submit(&self, payload: &Payload) -> Result<(), SubmissionError> {
        let mut attempt = 1;
        loop {
            let error = match self.inner.submit(payload) {
                Ok(()) => return Ok(()),
                Err(error) => error,
            };

            if !is_retryable(&error) || attempt >= self.policy.max_attempts {
                return Err(error);
            }

            let delay = self.policy.delay_for_retry(attempt);
            tracing::warn!(
                attempt,
                max_attempts = self.policy.max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "submission failed before reaching the collector, retrying"
            );
            thread::sleep(delay);
            attempt += 1;
        }
    }
}

fn is_retryable(error: &SubmissionError) -> bool {
    error.kind == SubmissionErrorKind::Connect
}

fn compute_jitter_ms(backoff_ms: u64) -> u64 {
    let jitter_cap = backoff_ms / 4; // 25% jitter upper bound
    if jitter_cap == 0 {
        return 0;
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.subsec_nanos() as u64)
        .unwrap_or(0);

    nanos % jitter_cap
}
