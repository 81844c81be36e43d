//! Line-oriented manifest extractor.
//!
//! Matches the first line that starts with `field`, followed by `=` and a
//! double-quoted, non-empty value. Whitespace around `=` is tolerated; leading
//! indentation is not, so inline tables like `serde = { version = "1" }` and
//! indented keys of nested tables never match.

use std::path::Path;

use regex::Regex;

use crate::error::{ExtractError, ExtractErrorKind};

fn field_pattern(field: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r#"^{}\s*=\s*"([^"]+)""#, regex::escape(field)))
}

/// Extract the quoted value of the first `field = "value"` line.
///
/// # Errors
///
/// Returns `FieldNotFound` if no line matches.
pub fn extract_line_version(
    content: &str,
    field: &str,
    path: &Path,
) -> Result<String, ExtractError> {
    let pattern = field_pattern(field).map_err(|e| {
        ExtractError::new(
            path,
            ExtractErrorKind::ParseFailure,
            format!("Invalid field name '{field}': {e}"),
        )
    })?;

    content
        .lines()
        .find_map(|line| pattern.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| {
            ExtractError::new(
                path,
                ExtractErrorKind::FieldNotFound,
                format!("No `{field} = \"...\"` line found"),
            )
        })
}
