//! Configuration for a version check.
//!
//! Paths are explicit inputs rather than constants so callers (and tests) can
//! point the checker at any pair of manifests.

use std::path::PathBuf;

/// Default path of the line-oriented manifest, relative to the working directory.
pub const DEFAULT_LINE_MANIFEST: &str = "../Cargo.toml";

/// Default path of the structured manifest, relative to the working directory.
pub const DEFAULT_STRUCTURED_MANIFEST: &str = "../package.json";

/// Default name of the field holding the version.
pub const DEFAULT_FIELD: &str = "version";

/// Inputs of a single version check.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Manifest made of `key = "value"` lines (default: `../Cargo.toml`).
    pub line_manifest: PathBuf,
    /// JSON manifest with a top-level version field (default: `../package.json`).
    pub structured_manifest: PathBuf,
    /// Field name looked up in both manifests (default: `version`).
    pub field: String,
    /// Maximum manifest size in bytes (default: 1 MiB).
    /// Larger files are reported as an extraction failure.
    pub max_file_size: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            line_manifest: PathBuf::from(DEFAULT_LINE_MANIFEST),
            structured_manifest: PathBuf::from(DEFAULT_STRUCTURED_MANIFEST),
            field: DEFAULT_FIELD.to_owned(),
            max_file_size: 1_048_576,
        }
    }
}
