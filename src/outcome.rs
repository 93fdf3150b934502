//! Validation verdict type shared by all validators.

use serde::Serialize;

/// Result of one validation pass over a piece of content.
///
/// An outcome is a plain value with no identity: validators build one fresh
/// per call and callers discard it after reading the verdict. The invariant
/// `passed == errors.is_empty()` is maintained by every constructor and
/// mutator on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// True iff no errors were recorded.
    pub passed: bool,
    /// Human-readable violation descriptions, in discovery order.
    ///
    /// Each entry cites the offending field path when the content is
    /// structured (e.g. `episode.premise: placeholder text detected`).
    pub errors: Vec<String>,
    /// Non-fatal observations. Never affect `passed`.
    pub warnings: Vec<String>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::pass()
    }
}

impl ValidationOutcome {
    /// A passing outcome with no errors or warnings.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Builds an outcome from a list of errors.
    ///
    /// An empty list produces a passing outcome, so this composes directly
    /// with error-collecting helpers.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            passed: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// A failing outcome carrying exactly one error.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::from_errors(vec![message.into()])
    }

    /// Records a violation and marks the outcome as failed.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Records a non-fatal observation.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Absorbs another outcome, appending its errors and warnings.
    ///
    /// Used by recursive validators to aggregate child verdicts upward
    /// without losing any diagnostics.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.passed = self.errors.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_has_no_errors() {
        let outcome = ValidationOutcome::pass();
        assert!(outcome.passed);
        assert!(outcome.errors.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_error_flips_passed() {
        let mut outcome = ValidationOutcome::pass();
        outcome.error("field: too short");
        assert!(!outcome.passed);
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn test_warning_does_not_affect_passed() {
        let mut outcome = ValidationOutcome::pass();
        outcome.warning("field: terse but acceptable");
        assert!(outcome.passed);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_merge_preserves_invariant() {
        let mut left = ValidationOutcome::pass();
        let mut right = ValidationOutcome::pass();
        right.error("b: bad");
        right.warning("b: note");

        left.merge(right);
        assert!(!left.passed);
        assert_eq!(left.errors, vec!["b: bad".to_string()]);
        assert_eq!(left.warnings, vec!["b: note".to_string()]);
    }

    #[test]
    fn test_from_errors_empty_passes() {
        assert!(ValidationOutcome::from_errors(Vec::new()).passed);
        assert!(!ValidationOutcome::from_errors(vec!["x".into()]).passed);
    }
}
