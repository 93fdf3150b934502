//! The retry loop: repeated production, validation, and bounded backoff.

use std::future::Future;
use std::sync::Arc;

use tokio::time::Instant;

use crate::error::{ProducerError, RetryError};
use crate::observer::{AttemptObserver, TracingObserver};
use crate::outcome::ValidationOutcome;
use crate::policy::RetryPolicy;

/// Drives a producer/validator pair until the validator accepts a
/// candidate or the retry budget is spent.
///
/// One `run` call is one session: attempts execute strictly sequentially,
/// and the only mutable state (attempt counter, current delay, last error
/// list) is local to the call, so a single engine can serve any number of
/// concurrent sessions. The engine suspends only while awaiting the
/// producer and during the backoff sleep; dropping the returned future
/// (for example via `tokio::time::timeout`) cancels the session without
/// yielding a candidate.
pub struct RetryEngine {
    policy: RetryPolicy,
    observer: Arc<dyn AttemptObserver>,
}

impl Default for RetryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryEngine {
    /// Creates an engine with the default policy and a [`TracingObserver`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(RetryPolicy::default())
    }

    /// Creates an engine with the given policy and a [`TracingObserver`].
    #[must_use]
    pub fn with_policy(policy: RetryPolicy) -> Self {
        Self {
            policy,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Sets the maximum number of attempts (fluent builder pattern).
    #[must_use]
    pub fn max_attempts(mut self, max: usize) -> Self {
        self.policy.max_attempts = max;
        self
    }

    /// Replaces the attempt observer (fluent builder pattern).
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn AttemptObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The policy governing sessions run on this engine.
    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Runs one retry session.
    ///
    /// Calls `producer` up to `max_attempts` times, validating each
    /// candidate. The first accepted candidate is returned unchanged; no
    /// fallback or synthesized content is ever substituted. Between failed
    /// attempts the engine sleeps the current delay, then grows it by the
    /// policy's multiplier (capped at `max_delay`) for the next wait.
    ///
    /// Recoverable failures (validation, malformed payloads) overwrite the
    /// session's error list, so the terminal report reflects the final
    /// attempt only. A [`ProducerError::Fatal`] aborts immediately with
    /// zero additional attempts and zero sleeps.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError::Exhausted`] when every attempt fails, or
    /// [`RetryError::Producer`] when the producer raises a
    /// non-recoverable error.
    pub async fn run<T, F, Fut, V>(
        &self,
        producer: F,
        validator: V,
        context: &str,
    ) -> Result<T, RetryError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ProducerError>>,
        V: Fn(&T) -> ValidationOutcome,
    {
        let start = Instant::now();
        let mut current_delay = self.policy.initial_delay;
        let mut last_errors: Vec<String> = Vec::new();

        for attempt in 1..=self.policy.max_attempts {
            match producer().await {
                Ok(candidate) => {
                    let outcome = validator(&candidate);
                    if outcome.passed {
                        self.observer.on_success(context, attempt);
                        return Ok(candidate);
                    }
                    // Overwrite, not append: only the latest attempt's
                    // errors survive into the terminal report.
                    last_errors = outcome.errors;
                }
                Err(ProducerError::Parse(message)) => {
                    last_errors = vec![format!("malformed structured payload: {message}")];
                }
                Err(ProducerError::Fatal(source)) => {
                    self.observer.on_fatal(context, attempt, &source);
                    return Err(RetryError::Producer(source));
                }
            }

            if self.policy.log_attempts {
                self.observer.on_attempt_failed(
                    context,
                    attempt,
                    self.policy.max_attempts,
                    &last_errors,
                );
            }

            if attempt < self.policy.max_attempts {
                if self.policy.log_attempts {
                    self.observer.on_backoff(context, attempt, current_delay);
                }
                tokio::time::sleep(current_delay).await;
                current_delay = self.policy.next_delay(current_delay);
            }
        }

        self.observer.on_exhausted(context, self.policy.max_attempts);
        Err(RetryError::Exhausted {
            context: context.to_string(),
            attempts: self.policy.max_attempts,
            errors: last_errors,
            elapsed: start.elapsed(),
        })
    }
}

/// Runs one retry session with the given policy.
///
/// Free-function form of [`RetryEngine::run`] for callers that do not need
/// a long-lived engine.
///
/// # Errors
///
/// See [`RetryEngine::run`].
pub async fn retry_with_validation<T, F, Fut, V>(
    producer: F,
    validator: V,
    policy: &RetryPolicy,
    context: &str,
) -> Result<T, RetryError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ProducerError>>,
    V: Fn(&T) -> ValidationOutcome,
{
    RetryEngine::with_policy(policy.clone())
        .run(producer, validator, context)
        .await
}

/// Adapts an already-curried asynchronous operation into a retry session,
/// deriving the context name from the producer's type identifier.
///
/// Arguments are embedded by closure capture. The producer itself must not
/// retry; retry ownership belongs exclusively to the engine.
///
/// # Errors
///
/// See [`RetryEngine::run`].
pub async fn with_retry_validation<T, F, Fut, V>(
    producer: F,
    validator: V,
    policy: &RetryPolicy,
) -> Result<T, RetryError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ProducerError>>,
    V: Fn(&T) -> ValidationOutcome,
{
    let context = std::any::type_name::<F>();
    retry_with_validation(producer, validator, policy, context).await
}
