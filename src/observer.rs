//! Attempt observation for the retry loop.
//!
//! The engine reports attempt lifecycle events through an explicitly
//! injected [`AttemptObserver`] rather than logging directly, so it stays
//! testable in isolation. [`TracingObserver`] is the production sink.

use std::fmt::Display;
use std::time::Duration;

/// Receives retry lifecycle events for one or more sessions.
///
/// All methods default to no-ops, so implementors override only what they
/// observe. Informational callbacks (`on_attempt_failed`, `on_backoff`)
/// are gated by the policy's `log_attempts` flag; `on_fatal` is always
/// delivered.
pub trait AttemptObserver: Send + Sync {
    /// An attempt's candidate failed validation (or parsing).
    fn on_attempt_failed(
        &self,
        context: &str,
        attempt: usize,
        max_attempts: usize,
        errors: &[String],
    ) {
        let _ = (context, attempt, max_attempts, errors);
    }

    /// The engine is about to sleep before the next attempt.
    fn on_backoff(&self, context: &str, attempt: usize, delay: Duration) {
        let _ = (context, attempt, delay);
    }

    /// An attempt's candidate passed validation.
    fn on_success(&self, context: &str, attempt: usize) {
        let _ = (context, attempt);
    }

    /// The retry budget is spent without a valid candidate.
    fn on_exhausted(&self, context: &str, attempts: usize) {
        let _ = (context, attempts);
    }

    /// The producer raised a non-recoverable error.
    fn on_fatal(&self, context: &str, attempt: usize, error: &dyn Display) {
        let _ = (context, attempt, error);
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl AttemptObserver for NoOpObserver {}

/// Observer that emits `tracing` events.
///
/// Failed attempts log at warn with the error list truncated to the first
/// three entries; fatal producer errors log at error severity so they are
/// distinguishable from retry noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

const LOGGED_ERROR_CAP: usize = 3;

impl AttemptObserver for TracingObserver {
    fn on_attempt_failed(
        &self,
        context: &str,
        attempt: usize,
        max_attempts: usize,
        errors: &[String],
    ) {
        let shown: Vec<&str> = errors
            .iter()
            .take(LOGGED_ERROR_CAP)
            .map(String::as_str)
            .collect();
        tracing::warn!(
            event = "attempt_failed",
            context,
            attempt,
            max_attempts,
            errors = ?shown,
            omitted = errors.len().saturating_sub(LOGGED_ERROR_CAP),
            "attempt_failed: {context} attempt {attempt}/{max_attempts} rejected"
        );
    }

    fn on_backoff(&self, context: &str, attempt: usize, delay: Duration) {
        tracing::info!(
            event = "backoff",
            context,
            attempt,
            delay = ?delay,
            "backoff: waiting before retrying {context}"
        );
    }

    fn on_success(&self, context: &str, attempt: usize) {
        tracing::debug!(
            event = "attempt_succeeded",
            context,
            attempt,
            "attempt_succeeded: {context} validated on attempt {attempt}"
        );
    }

    fn on_exhausted(&self, context: &str, attempts: usize) {
        tracing::warn!(
            event = "retries_exhausted",
            context,
            attempts,
            "retries_exhausted: {context} failed after {attempts} attempts"
        );
    }

    fn on_fatal(&self, context: &str, attempt: usize, error: &dyn Display) {
        tracing::error!(
            event = "producer_fatal",
            context,
            attempt,
            error = %error,
            "producer_fatal: {context} aborted by non-recoverable error"
        );
    }
}
