//! Format-specific version extractors.
//!
//! Each sub-module handles one manifest format:
//! - `line` — `key = "value"` lines (e.g. `Cargo.toml`)
//! - `json` — top-level field of a JSON object (e.g. `package.json`)

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::ExtractError;

pub mod json;
pub mod line;

/// How a version is extracted from a manifest's content.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ManifestFormat {
    /// First line of the form `field = "value"`.
    LinePattern,
    /// Top-level string field of a JSON object.
    Structured,
}

impl ManifestFormat {
    /// Extract `field` from manifest `content`.
    ///
    /// `path` is only used to label errors; no file is touched.
    ///
    /// # Errors
    ///
    /// Returns an `ExtractError` if the content cannot be parsed or carries no
    /// usable value for `field`.
    pub fn extract(
        self,
        content: &str,
        field: &str,
        path: &Path,
    ) -> Result<String, ExtractError> {
        match self {
            Self::LinePattern => line::extract_line_version(content, field, path),
            Self::Structured => json::extract_json_version(content, field, path),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinePattern => f.write_str("line-pattern"),
            Self::Structured => f.write_str("structured"),
        }
    }
}
