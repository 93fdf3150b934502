//! Configuration for retry behavior.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one retry session.
///
/// A policy is read-only during a session and safe to share across any
/// number of concurrent sessions. `backoff_multiplier` must be >= 1; the
/// delay sequence is `initial_delay`, then
/// `min(previous * backoff_multiplier, max_delay)` while
/// `use_exponential_backoff` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up (default: 5).
    pub max_attempts: usize,
    /// Delay before the second attempt (default: 1s).
    pub initial_delay: Duration,
    /// Whether the delay grows between attempts (default: true).
    pub use_exponential_backoff: bool,
    /// Growth factor applied after each wait (default: 2.0).
    pub backoff_multiplier: f64,
    /// Upper bound on any single wait (default: 30s).
    pub max_delay: Duration,
    /// Whether to emit per-attempt log lines (default: true).
    pub log_attempts: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            use_exponential_backoff: true,
            backoff_multiplier: 2.0,
            max_delay: Duration::from_secs(30),
            log_attempts: true,
        }
    }
}

impl RetryPolicy {
    /// Set the maximum number of attempts.
    #[must_use]
    pub const fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the delay before the second attempt.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Enable or disable exponential backoff.
    #[must_use]
    pub const fn with_exponential_backoff(mut self, enabled: bool) -> Self {
        self.use_exponential_backoff = enabled;
        self
    }

    /// Set the backoff growth factor (must be >= 1).
    #[must_use]
    pub const fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Set the upper bound on any single wait.
    #[must_use]
    pub const fn with_max_delay(mut self, max: Duration) -> Self {
        self.max_delay = max;
        self
    }

    /// Enable or disable per-attempt logging.
    #[must_use]
    pub const fn with_log_attempts(mut self, enabled: bool) -> Self {
        self.log_attempts = enabled;
        self
    }

    /// Computes the wait that follows a wait of `current`.
    ///
    /// Pure backoff math: the current wait always uses the pre-update
    /// delay, and the updated value is clamped to `max_delay`.
    #[must_use]
    pub fn next_delay(&self, current: Duration) -> Duration {
        if self.use_exponential_backoff {
            current.mul_f64(self.backoff_multiplier).min(self.max_delay)
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.initial_delay, Duration::from_secs(1));
        assert!(policy.use_exponential_backoff);
        assert!((policy.backoff_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(policy.max_delay, Duration::from_secs(30));
        assert!(policy.log_attempts);
    }

    #[test]
    fn test_next_delay_doubles_until_cap() {
        let policy = RetryPolicy::default()
            .with_initial_delay(Duration::from_secs(8))
            .with_max_delay(Duration::from_secs(20));

        let second = policy.next_delay(Duration::from_secs(8));
        assert_eq!(second, Duration::from_secs(16));
        let third = policy.next_delay(second);
        assert_eq!(third, Duration::from_secs(20));
        let fourth = policy.next_delay(third);
        assert_eq!(fourth, Duration::from_secs(20));
    }

    #[test]
    fn test_next_delay_constant_without_backoff() {
        let policy = RetryPolicy::default().with_exponential_backoff(false);
        let delay = Duration::from_millis(250);
        assert_eq!(policy.next_delay(delay), delay);
    }

    #[test]
    fn test_deserialize_partial_policy() {
        let policy: RetryPolicy =
            serde_json::from_str(r#"{"max_attempts": 2, "log_attempts": false}"#)
                .unwrap_or_default();
        assert_eq!(policy.max_attempts, 2);
        assert!(!policy.log_attempts);
        assert_eq!(policy.initial_delay, Duration::from_secs(1));
    }
}
