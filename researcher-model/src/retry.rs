//! Re-sending failed Groq requests.
//!
//! A request attempt fails with an [`AttemptError`] that keeps the HTTP status
//! (or the kind of transport failure) it came from, so the retry decision never
//! depends on the text of an error message.

use reqwest::StatusCode;
use researcher_core::ResearcherError;
use std::{fmt, future::Future, time::Duration};

/// How many times a request is sent and how long to wait in between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included. `0` and `1` both mean "no retry".
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Send every request exactly once.
    #[must_use]
    pub fn none() -> Self {
        Self { max_attempts: 1, ..Self::default() }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_delays(mut self, base_delay: Duration, max_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self.max_delay = max_delay;
        self
    }

    /// Delay before retry number `retry` (0-based): `base_delay * 2^retry`,
    /// capped at `max_delay`.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    fn delay_for(&self, retry: u32, error: &AttemptError) -> Duration {
        let backoff = self.backoff(retry);
        match error.retry_after() {
            Some(hint) => hint.max(backoff).min(self.max_delay),
            None => backoff,
        }
    }
}

/// Statuses Groq uses for overload and transient upstream failures.
#[must_use]
pub fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 408 | 429 | 500 | 502 | 503 | 504)
}

/// One failed attempt at a Groq request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// Groq answered with a non-success status.
    Status { status: StatusCode, body: String, retry_after: Option<Duration> },
    /// The request never produced a response.
    Transport { message: String, timeout: bool, connect: bool },
}

impl AttemptError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => is_retryable_status(*status),
            Self::Transport { timeout, connect, .. } => *timeout || *connect,
        }
    }

    /// Server-provided wait, from the `retry-after` header.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Status { retry_after, .. } => *retry_after,
            Self::Transport { .. } => None,
        }
    }
}

impl From<reqwest::Error> for AttemptError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: error.to_string(),
            timeout: error.is_timeout(),
            connect: error.is_connect(),
        }
    }
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let retryability = if self.is_retryable() { "retryable" } else { "non-retryable" };
        match self {
            Self::Status { status, body, .. } => {
                write!(f, "Groq API error ({status}, {retryability}): {body}")
            }
            Self::Transport { message, .. } => {
                write!(f, "Groq API request failed ({retryability}): {message}")
            }
        }
    }
}

impl From<AttemptError> for ResearcherError {
    fn from(error: AttemptError) -> Self {
        ResearcherError::Model(error.to_string())
    }
}

/// Run `attempt` until it succeeds, fails for good, or the policy runs out.
pub async fn send_with_retry<T, Op, Fut>(
    policy: &RetryPolicy,
    mut attempt: Op,
) -> Result<T, AttemptError>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AttemptError>>,
{
    let mut retry: u32 = 0;

    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(error) if retry + 1 < policy.max_attempts && error.is_retryable() => {
                let delay = policy.delay_for(retry, &error);
                retry += 1;
                researcher_telemetry::warn!(
                    attempt = retry,
                    max_attempts = policy.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %error,
                    "Groq request failed; retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(error) => return Err(error),
        }
    }
}
