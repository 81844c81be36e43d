//! Version check report types.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExtractError;
use crate::format::ManifestFormat;

/// Overall outcome of a check.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Both versions were extracted and are identical.
    Match,
    /// Both versions were extracted but differ.
    Mismatch,
    /// At least one manifest has no readable/parseable version.
    Unavailable,
}

impl CheckStatus {
    /// Process exit code for this status: `0`, `1` or `2`.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Match => 0,
            Self::Mismatch => 1,
            Self::Unavailable => 2,
        }
    }
}

/// What one manifest yielded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ManifestVersion {
    /// Manifest path as given in the config.
    pub file: PathBuf,
    /// Extraction strategy used.
    pub format: ManifestFormat,
    /// The extracted version, absent when extraction failed.
    pub version: Option<String>,
    /// Why extraction failed, if it did.
    pub error: Option<ExtractError>,
}

impl ManifestVersion {
    pub(crate) fn new(
        file: &Path,
        format: ManifestFormat,
        result: Result<String, ExtractError>,
    ) -> Self {
        let (version, error) = match result {
            Ok(v) => (Some(v), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            file: file.to_owned(),
            format,
            version,
            error,
        }
    }

    /// Short label for messages: the file name, or the full path when it has none.
    #[must_use]
    pub fn label(&self) -> String {
        self.file.file_name().map_or_else(
            || self.file.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Result of a version check.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Overall outcome.
    pub status: CheckStatus,
    /// Outcome for the line-oriented manifest.
    pub line_manifest: ManifestVersion,
    /// Outcome for the structured manifest.
    pub structured_manifest: ManifestVersion,
}

impl CheckReport {
    /// Build a report, deciding the status from the two outcomes.
    ///
    /// Versions are compared with exact string equality.
    #[must_use]
    pub fn from_versions(
        line_manifest: ManifestVersion,
        structured_manifest: ManifestVersion,
    ) -> Self {
        let status = match (&line_manifest.version, &structured_manifest.version) {
            (Some(a), Some(b)) if a == b => CheckStatus::Match,
            (Some(_), Some(_)) => CheckStatus::Mismatch,
            _ => CheckStatus::Unavailable,
        };
        Self {
            status,
            line_manifest,
            structured_manifest,
        }
    }

    /// Process exit code for this report.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }

    /// Manifests whose version could not be extracted, in check order.
    pub fn failures(&self) -> impl Iterator<Item = &ManifestVersion> {
        [&self.line_manifest, &self.structured_manifest]
            .into_iter()
            .filter(|m| m.version.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractErrorKind;

    fn found(file: &str, format: ManifestFormat, version: &str) -> ManifestVersion {
        ManifestVersion::new(Path::new(file), format, Ok(version.to_owned()))
    }

    fn missing(file: &str, format: ManifestFormat) -> ManifestVersion {
        let path = Path::new(file);
        ManifestVersion::new(
            path,
            format,
            Err(ExtractError::new(
                path,
                ExtractErrorKind::MissingFile,
                "File not found",
            )),
        )
    }

    #[test]
    fn test_equal_versions_match() {
        let report = CheckReport::from_versions(
            found("../Cargo.toml", ManifestFormat::LinePattern, "2.3.1"),
            found("../package.json", ManifestFormat::Structured, "2.3.1"),
        );
        assert_eq!(report.status, CheckStatus::Match);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_prerelease_suffix_is_mismatch() {
        let report = CheckReport::from_versions(
            found("../Cargo.toml", ManifestFormat::LinePattern, "1.0.0"),
            found("../package.json", ManifestFormat::Structured, "1.0.0-rc1"),
        );
        assert_eq!(report.status, CheckStatus::Mismatch);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_any_absent_version_is_unavailable() {
        let report = CheckReport::from_versions(
            missing("../Cargo.toml", ManifestFormat::LinePattern),
            found("../package.json", ManifestFormat::Structured, "1.0.0"),
        );
        assert_eq!(report.status, CheckStatus::Unavailable);
        assert_eq!(report.exit_code(), 2);
        let failed: Vec<_> = report.failures().map(ManifestVersion::label).collect();
        assert_eq!(failed, vec!["Cargo.toml"]);

        let report = CheckReport::from_versions(
            missing("../Cargo.toml", ManifestFormat::LinePattern),
            missing("../package.json", ManifestFormat::Structured),
        );
        assert_eq!(report.status, CheckStatus::Unavailable);
        assert_eq!(report.failures().count(), 2);
    }

    #[test]
    fn test_label_falls_back_to_path() {
        let m = found("..", ManifestFormat::LinePattern, "1.0.0");
        assert_eq!(m.label(), "..");
    }
}
