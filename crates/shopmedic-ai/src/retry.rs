//! Configurable retry policy for generative API calls.

use std::time::Duration;

/// Retry budget and backoff for the generative client.
///
/// Injected at construction so tests can run with a zero base delay and a
/// scripted transport instead of a live endpoint.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Backoff for attempt `n` (0-based) is `base_delay × 2^n`.
    pub base_delay: Duration,
    /// HTTP statuses that are worth retrying.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            retryable_statuses: vec![429],
        }
    }
}

impl RetryPolicy {
    /// Policy with no delay between attempts, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Exponential backoff before re-issuing attempt `attempt + 1`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }

    pub fn is_retryable(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }
}
