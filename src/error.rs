//! Error taxonomy for the retry engine.
//!
//! Two recoverable failure shapes drive retries (validation failure and
//! malformed-payload parse failure); everything else the producer raises is
//! non-recoverable and propagates immediately with its original identity
//! intact. The terminal exhaustion error composes the sole user-facing
//! diagnostic; no path ever substitutes fallback content for a failure.

use std::time::Duration;

use thiserror::Error;

/// Fixed remediation hints attached to every exhaustion report.
pub static REMEDIATION_HINTS: &[&str] = &[
    "Make the prompt more specific about the required structure and detail",
    "The model may be ignoring format instructions; tighten or repeat them",
    "The source material may be too thin to support substantive generation",
];

/// Number of distinct error messages shown in an exhaustion report.
pub const REPORTED_ERROR_CAP: usize = 10;

/// Failure raised by a producer invocation.
///
/// Only [`ProducerError::Parse`] is retryable: the raw output existed but
/// could not be interpreted as structured content. Everything else
/// (transport, auth, programming defects) is [`ProducerError::Fatal`] and
/// ends the session without consuming further attempts.
#[derive(Debug, Error)]
pub enum ProducerError {
    /// Raw output could not be interpreted as structured content.
    /// Recoverable; treated like a validation failure.
    #[error("malformed structured payload: {0}")]
    Parse(String),

    /// Any other producer failure. Non-recoverable; propagates unchanged.
    #[error("{0}")]
    Fatal(#[from] anyhow::Error),
}

impl ProducerError {
    /// Builds a recoverable parse failure.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Wraps a non-recoverable error, preserving it for downcasting.
    pub fn fatal(source: impl Into<anyhow::Error>) -> Self {
        Self::Fatal(source.into())
    }
}

impl From<serde_json::Error> for ProducerError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse(source.to_string())
    }
}

/// Terminal outcome of a retry session that did not produce valid content.
#[derive(Debug, Error)]
pub enum RetryError {
    /// Every attempt failed validation (or recoverable parsing). The
    /// Display form is the composed multi-line report: context, attempt
    /// count, the last attempt's errors, and remediation hints.
    #[error("{}", exhausted_report(.context, .attempts, .errors))]
    Exhausted {
        /// Name of the operation being retried, for diagnostics.
        context: String,
        /// Total attempts made.
        attempts: usize,
        /// The last attempt's error list (earlier attempts are overwritten).
        errors: Vec<String>,
        /// Wall-clock time spent across all attempts.
        elapsed: Duration,
    },

    /// A non-recoverable producer error, propagated with zero additional
    /// attempts. The original error is preserved for upstream downcasting.
    #[error("{0}")]
    Producer(anyhow::Error),
}

fn exhausted_report(context: &str, attempts: &usize, errors: &[String]) -> String {
    let mut report =
        format!("{context}: content generation failed validation after {attempts} attempts.\n");

    let mut distinct: Vec<&String> = Vec::new();
    for error in errors {
        if !distinct.contains(&error) {
            distinct.push(error);
        }
    }

    if distinct.is_empty() {
        report.push_str("No diagnostics were recorded for the final attempt.\n");
    } else {
        report.push_str("Last attempt errors:\n");
        for error in distinct.iter().take(REPORTED_ERROR_CAP) {
            report.push_str("  - ");
            report.push_str(error);
            report.push('\n');
        }
        if distinct.len() > REPORTED_ERROR_CAP {
            let omitted = distinct.len() - REPORTED_ERROR_CAP;
            report.push_str(&format!("  ... and {omitted} more\n"));
        }
    }

    report.push_str("Possible causes:\n");
    for hint in REMEDIATION_HINTS {
        report.push_str("  - ");
        report.push_str(hint);
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exhausted(errors: Vec<String>) -> RetryError {
        RetryError::Exhausted {
            context: "episode_premise".to_string(),
            attempts: 3,
            errors,
            elapsed: Duration::from_millis(120),
        }
    }

    #[test]
    fn test_report_names_context_and_attempts() {
        let message = exhausted(vec!["premise: content is empty".to_string()]).to_string();
        assert!(message.contains("episode_premise"));
        assert!(message.contains("3 attempts"));
        assert!(message.contains("premise: content is empty"));
        for hint in REMEDIATION_HINTS {
            assert!(message.contains(hint));
        }
    }

    #[test]
    fn test_report_caps_distinct_errors() {
        let errors: Vec<String> = (0..15).map(|i| format!("field{i}: too short")).collect();
        let message = exhausted(errors).to_string();
        assert!(message.contains("field9"));
        assert!(!message.contains("field10:"));
        assert!(message.contains("and 5 more"));
    }

    #[test]
    fn test_report_deduplicates_repeated_errors() {
        let errors = vec!["premise: content is empty".to_string(); 12];
        let message = exhausted(errors).to_string();
        assert_eq!(message.matches("premise: content is empty").count(), 1);
        assert!(!message.contains("more"));
    }

    #[test]
    fn test_parse_error_message_is_format_specific() {
        let error = ProducerError::parse("expected value at line 1 column 1");
        assert!(error.to_string().contains("malformed structured payload"));
    }

    #[test]
    fn test_fatal_preserves_identity() {
        let source = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "transport down");
        let error = ProducerError::fatal(source);
        let ProducerError::Fatal(inner) = error else {
            unreachable!("fatal constructor produced a parse error");
        };
        assert!(inner.downcast_ref::<std::io::Error>().is_some());
    }
}
