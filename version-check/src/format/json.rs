//! JSON manifest extractor.
//!
//! Only the top level is consulted; nested objects carrying a field with the
//! same name are never considered.

use std::path::Path;

use serde_json::Value;

use crate::error::{ExtractError, ExtractErrorKind};

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extract the top-level string `field` from JSON content.
///
/// # Errors
///
/// - `ParseFailure` if the content is not valid JSON or its top level is not an object
/// - `FieldNotFound` if the field is missing or an empty string
/// - `FieldNotString` if the field holds any other JSON type
pub fn extract_json_version(
    content: &str,
    field: &str,
    path: &Path,
) -> Result<String, ExtractError> {
    let value: Value = serde_json::from_str(content).map_err(|e| {
        ExtractError::new(
            path,
            ExtractErrorKind::ParseFailure,
            format!("JSON parse error: {e}"),
        )
    })?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ExtractError::new(
                path,
                ExtractErrorKind::ParseFailure,
                format!(
                    "Top-level JSON value is {}, expected an object",
                    type_name(&other)
                ),
            ));
        }
    };

    match map.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(ExtractError::new(
            path,
            ExtractErrorKind::FieldNotFound,
            format!("Field `{field}` is empty"),
        )),
        Some(other) => Err(ExtractError::new(
            path,
            ExtractErrorKind::FieldNotString,
            format!("Field `{field}` is {}, expected a string", type_name(other)),
        )),
        None => Err(ExtractError::new(
            path,
            ExtractErrorKind::FieldNotFound,
            format!("No top-level `{field}` field found"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Result<String, ExtractError> {
        extract_json_version(content, "version", Path::new("package.json"))
    }

    #[test]
    fn test_extract_top_level_version() {
        let content = r#"{"name": "regolith", "version": "2.3.1", "main": "index.js"}"#;
        assert_eq!(extract(content).unwrap(), "2.3.1");
    }

    #[test]
    fn test_value_is_not_trimmed() {
        assert_eq!(extract(r#"{"version": " 1.0.0 "}"#).unwrap(), " 1.0.0 ");
    }

    #[test]
    fn test_invalid_json_is_parse_failure() {
        let err = extract(r#"{"version": "1.0.0",}"#).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::ParseFailure);
        assert!(err.message.contains("JSON parse error"));
    }

    #[test]
    fn test_non_object_top_level_is_parse_failure() {
        let err = extract(r#"["version", "1.0.0"]"#).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::ParseFailure);
        assert!(err.message.contains("an array"));
    }

    #[test]
    fn test_missing_field() {
        let err = extract(r#"{"name": "regolith"}"#).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::FieldNotFound);
    }

    #[test]
    fn test_nested_field_is_ignored() {
        let err = extract(r#"{"engines": {"version": "1.0.0"}}"#).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::FieldNotFound);
    }

    #[test]
    fn test_empty_string_is_treated_as_missing() {
        let err = extract(r#"{"version": ""}"#).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::FieldNotFound);
    }

    #[test]
    fn test_non_string_field() {
        let err = extract(r#"{"version": 2}"#).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::FieldNotString);
        assert!(err.message.contains("a number"));

        let err = extract(r#"{"version": null}"#).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::FieldNotString);
    }
}
