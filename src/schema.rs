use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("{}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
///
/// On failure, every violation is reported.
pub fn validate(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator =
        validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    let problems: Vec<String> = validator
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed(problems))
    }
}
