//! Content validation against placeholder patterns and length floors.
//!
//! Content is represented as [`serde_json::Value`], which gives a closed
//! set of content kinds (null, bool, number, string, array, object) and an
//! exhaustive match in [`validate_content`]. All validators are pure
//! functions: they never panic on well-formed input, and malformed content
//! (such as `null` where prose is required) is reported as a validation
//! failure, not an error.

use serde_json::Value;

use crate::outcome::ValidationOutcome;
use crate::patterns::{
    forbidden_matches, is_generic_name, is_identifier_field, min_length_for,
    GENERIC_CHARACTER_NAMES, GENERIC_LOCATION_NAMES, IDENTIFIER_MIN_LENGTH, LIST_ITEM_MIN_LENGTH,
    PROSE_MIN_LENGTH,
};

/// Category of a generated name list, with its own length floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCategory {
    /// Character names (minimum 2 characters).
    Character,
    /// Location names (minimum 3 characters).
    Location,
}

impl NameCategory {
    const fn label(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Location => "location",
        }
    }

    const fn min_length(self) -> usize {
        match self {
            Self::Character => 2,
            Self::Location => 3,
        }
    }

    fn generic_patterns(self) -> &'static [&'static std::sync::LazyLock<Option<regex::Regex>>] {
        match self {
            Self::Character => GENERIC_CHARACTER_NAMES,
            Self::Location => GENERIC_LOCATION_NAMES,
        }
    }
}

/// Validates a piece of content for placeholder markers and length floors,
/// recursing into nested structures.
///
/// Scalars are pattern-scanned and length-checked against `min_length`
/// (trimmed character count). Mappings recurse per key with a dotted field
/// path (`field.key`) and a context-sensitive minimum: identifier-like keys
/// (name/id/key/code) get a short floor so proper nouns pass, other values
/// get a relaxed prose floor. Lists recurse per element with an indexed
/// path (`field[i]`); string elements get a short floor so single words
/// pass, non-string elements keep the caller's `min_length`.
///
/// All child errors and warnings aggregate upward; validation never stops
/// at the first violation.
#[must_use]
pub fn validate_content(
    content: &Value,
    field_name: &str,
    min_length: usize,
    allow_empty: bool,
) -> ValidationOutcome {
    match content {
        Value::Null => {
            if allow_empty {
                ValidationOutcome::pass()
            } else {
                ValidationOutcome::fail(format!("{field_name}: content is missing"))
            }
        }
        Value::String(text) => validate_scalar(text, field_name, min_length, allow_empty),
        Value::Bool(value) => {
            validate_scalar(&value.to_string(), field_name, min_length, allow_empty)
        }
        Value::Number(value) => {
            validate_scalar(&value.to_string(), field_name, min_length, allow_empty)
        }
        Value::Array(items) => {
            if items.is_empty() {
                return if allow_empty {
                    ValidationOutcome::pass()
                } else {
                    ValidationOutcome::fail(format!("{field_name}: list is empty"))
                };
            }
            let mut outcome = ValidationOutcome::pass();
            for (index, item) in items.iter().enumerate() {
                let child_min = if item.is_string() {
                    LIST_ITEM_MIN_LENGTH
                } else {
                    min_length
                };
                outcome.merge(validate_content(
                    item,
                    &format!("{field_name}[{index}]"),
                    child_min,
                    false,
                ));
            }
            outcome
        }
        Value::Object(fields) => {
            if fields.is_empty() {
                return if allow_empty {
                    ValidationOutcome::pass()
                } else {
                    ValidationOutcome::fail(format!("{field_name}: mapping is empty"))
                };
            }
            let mut outcome = ValidationOutcome::pass();
            for (key, value) in fields {
                let child_min = if is_identifier_field(key) {
                    IDENTIFIER_MIN_LENGTH
                } else {
                    PROSE_MIN_LENGTH
                };
                outcome.merge(validate_content(
                    value,
                    &format!("{field_name}.{key}"),
                    child_min,
                    false,
                ));
            }
            outcome
        }
    }
}

fn validate_scalar(
    text: &str,
    field_name: &str,
    min_length: usize,
    allow_empty: bool,
) -> ValidationOutcome {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return if allow_empty {
            ValidationOutcome::pass()
        } else {
            ValidationOutcome::fail(format!("{field_name}: content is empty"))
        };
    }

    let mut outcome = ValidationOutcome::pass();
    for (category, matched) in forbidden_matches(trimmed) {
        outcome.error(format!(
            "{field_name}: {category} text detected ({matched:?})"
        ));
    }
    let length = trimmed.chars().count();
    if length < min_length {
        outcome.error(format!(
            "{field_name}: content too short ({length} chars, minimum {min_length})"
        ));
    }
    outcome
}

/// Validates that every required field of a mapping is present, non-blank,
/// and passes [`validate_content`] with its category-specific length floor.
///
/// Errors from all fields accumulate; a missing first field never hides a
/// placeholder in the last.
#[must_use]
pub fn validate_required_fields(data: &Value, required_fields: &[&str]) -> ValidationOutcome {
    let Some(fields) = data.as_object() else {
        return ValidationOutcome::fail(format!(
            "expected a mapping with required fields, got {}",
            kind_name(data)
        ));
    };

    let mut outcome = ValidationOutcome::pass();
    for field in required_fields {
        match fields.get(*field) {
            None => outcome.error(format!("{field}: required field is missing")),
            Some(Value::Null) => outcome.error(format!("{field}: required field is null")),
            Some(Value::String(text)) if text.trim().is_empty() => {
                outcome.error(format!("{field}: required field is blank"));
            }
            Some(value) => {
                outcome.merge(validate_content(value, field, min_length_for(field), false));
            }
        }
    }
    outcome
}

/// Validates a list of generated names for a category.
///
/// An empty list fails immediately with a single error. Otherwise every
/// name is checked against the category's length floor and generic-name
/// patterns ("Character 2", "Location 1", "Place A", ...), and all
/// violations are reported.
#[must_use]
pub fn validate_name_list(names: &[String], category: NameCategory) -> ValidationOutcome {
    let label = category.label();
    if names.is_empty() {
        return ValidationOutcome::fail(format!("no {label} names were generated"));
    }

    let mut outcome = ValidationOutcome::pass();
    for name in names {
        let trimmed = name.trim();
        if trimmed.chars().count() < category.min_length() {
            outcome.error(format!(
                "{label} name {trimmed:?} is too short (minimum {} chars)",
                category.min_length()
            ));
        }
        if is_generic_name(trimmed, category.generic_patterns()) {
            outcome.error(format!("{label} name {trimmed:?} is a generic placeholder"));
        }
    }
    outcome
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_string_passes() {
        let outcome = validate_content(
            &json!("A lighthouse keeper discovers a tide that remembers names"),
            "premise",
            10,
            false,
        );
        assert!(outcome.passed, "unexpected errors: {:?}", outcome.errors);
    }

    #[test]
    fn test_forbidden_pattern_cites_field_and_category() {
        let outcome = validate_content(&json!("The rest is TBD"), "premise", 10, false);
        assert!(!outcome.passed);
        assert!(outcome.errors[0].contains("premise"));
        assert!(outcome.errors[0].contains("placeholder"));
        assert!(outcome.errors[0].contains("TBD"));
    }

    #[test]
    fn test_short_content_reports_length() {
        let outcome = validate_content(&json!("terse"), "premise", 10, false);
        assert!(!outcome.passed);
        assert!(outcome.errors[0].contains("too short"));

        let at_minimum = validate_content(&json!("exactly 10"), "premise", 10, false);
        assert!(at_minimum.passed);
    }

    #[test]
    fn test_trimming_applies_before_length_check() {
        let outcome = validate_content(&json!("   hi   "), "note", 5, false);
        assert!(!outcome.passed);
        assert!(outcome.errors[0].contains("2 chars"));
    }

    #[test]
    fn test_empty_string_respects_allow_empty() {
        assert!(!validate_content(&json!(""), "premise", 10, false).passed);
        assert!(validate_content(&json!("  "), "premise", 10, true).passed);
        assert!(!validate_content(&json!(null), "premise", 10, false).passed);
        assert!(validate_content(&json!(null), "premise", 10, true).passed);
    }

    #[test]
    fn test_mapping_builds_dotted_paths() {
        let content = json!({
            "premise": "TBD",
            "cast": { "lead_name": "Mara" }
        });
        let outcome = validate_content(&content, "episode", 10, false);
        assert!(!outcome.passed);
        assert!(outcome.errors.iter().any(|e| e.contains("episode.premise")));
        assert!(!outcome.errors.iter().any(|e| e.contains("lead_name")));
    }

    #[test]
    fn test_identifier_keys_get_short_minimum() {
        let content = json!({ "id": "e1", "mood": "wry" });
        let outcome = validate_content(&content, "episode", 10, false);
        // "e1" passes the identifier floor (2); "wry" fails the prose floor (5).
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("episode.mood"));
    }

    #[test]
    fn test_nested_placeholder_is_still_caught() {
        let content = json!({
            "acts": [ { "beats": ["[insert name] returns home"] } ]
        });
        let outcome = validate_content(&content, "outline", 10, false);
        assert!(!outcome.passed);
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.contains("outline.acts[0].beats[0]") && e.contains("template token")));
    }

    #[test]
    fn test_list_rules() {
        assert!(!validate_content(&json!([]), "themes", 10, false).passed);
        assert!(validate_content(&json!([]), "themes", 10, true).passed);

        // Single words pass the list-item floor.
        let words = validate_content(&json!(["loss", "memory"]), "themes", 10, false);
        assert!(words.passed, "unexpected errors: {:?}", words.errors);

        let indexed = validate_content(&json!(["fine theme", "x"]), "themes", 10, false);
        assert!(!indexed.passed);
        assert!(indexed.errors[0].contains("themes[1]"));
    }

    #[test]
    fn test_aggregation_does_not_short_circuit() {
        let content = json!({
            "premise": "TBD",
            "setting": "Unknown",
            "cast": ["Character 1"]
        });
        let outcome = validate_content(&content, "episode", 10, false);
        assert!(outcome.errors.len() >= 3, "got: {:?}", outcome.errors);
    }

    #[test]
    fn test_non_string_scalars_are_serialized_for_scanning() {
        let outcome = validate_content(&json!(42), "count", 10, false);
        assert!(!outcome.passed);
        assert!(outcome.errors[0].contains("too short"));
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let content = json!({ "premise": "TBD", "themes": ["loss"] });
        let first = validate_content(&content, "episode", 10, false);
        let second = validate_content(&content, "episode", 10, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_required_fields_missing_blank_and_delegated() {
        let data = json!({
            "title": "   ",
            "premise": "A lighthouse keeper discovers a tide that remembers"
        });
        let outcome = validate_required_fields(&data, &["title", "premise", "logline"]);
        assert!(!outcome.passed);
        assert!(outcome.errors.iter().any(|e| e.contains("title") && e.contains("blank")));
        assert!(outcome.errors.iter().any(|e| e.contains("logline") && e.contains("missing")));
        assert_eq!(outcome.errors.len(), 2);
    }

    #[test]
    fn test_required_fields_on_non_mapping() {
        let outcome = validate_required_fields(&json!(["not", "a", "mapping"]), &["title"]);
        assert!(!outcome.passed);
        assert!(outcome.errors[0].contains("expected a mapping"));
    }

    #[test]
    fn test_name_list_empty_is_single_error() {
        let outcome = validate_name_list(&[], NameCategory::Location);
        assert!(!outcome.passed);
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn test_name_list_rejects_generic_names() {
        let names = vec!["Location 1".to_string()];
        let outcome = validate_name_list(&names, NameCategory::Location);
        assert!(!outcome.passed);
        assert!(outcome.errors[0].contains("generic"));
    }

    #[test]
    fn test_name_list_accepts_real_names() {
        let names = vec!["Thornwood Hollow".to_string(), "Saltmere".to_string()];
        assert!(validate_name_list(&names, NameCategory::Location).passed);
    }

    #[test]
    fn test_name_list_reports_every_violation() {
        let names = vec![
            "Jo".to_string(),
            "Protagonist".to_string(),
            "Character 3".to_string(),
        ];
        let outcome = validate_name_list(&names, NameCategory::Character);
        // "Jo" passes the character floor of 2; both generics are reported.
        assert_eq!(outcome.errors.len(), 2);
    }

    #[test]
    fn test_location_length_floor() {
        let names = vec!["Ba".to_string()];
        let outcome = validate_name_list(&names, NameCategory::Location);
        assert!(!outcome.passed);
        assert!(outcome.errors[0].contains("too short"));
    }
}
