//! JSON Schema adapter producing engine-compatible validators.

use serde_json::Value;
use thiserror::Error;

use crate::outcome::ValidationOutcome;

/// The schema itself failed to compile; no validator can be built from it.
#[derive(Debug, Error)]
#[error("schema compilation failed: {0}")]
pub struct SchemaError(pub String);

/// Compiles a JSON Schema into a validator closure for the retry engine.
///
/// The schema compiles once, up front; a bad schema surfaces as a
/// [`SchemaError`] before any attempt runs. The returned closure collects
/// every violation (not just the first) with its instance path, so the
/// outcome's error list reads like
/// `At path '/severity': "urgent" is not one of ...`.
///
/// # Examples
///
/// ```
/// use genloop::schema::schema_validator;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": { "premise": { "type": "string", "minLength": 10 } },
///     "required": ["premise"]
/// });
///
/// let validate = schema_validator(&schema)?;
/// assert!(validate(&json!({ "premise": "A tide that remembers names" })).passed);
/// assert!(!validate(&json!({})).passed);
/// # Ok::<(), genloop::schema::SchemaError>(())
/// ```
pub fn schema_validator(
    schema: &Value,
) -> Result<impl Fn(&Value) -> ValidationOutcome, SchemaError> {
    let validator =
        jsonschema::Validator::new(schema).map_err(|e| SchemaError(e.to_string()))?;

    Ok(move |instance: &Value| {
        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|error| format!("At path '{}': {error}", error.instance_path))
            .collect();
        ValidationOutcome::from_errors(errors)
    })
}
