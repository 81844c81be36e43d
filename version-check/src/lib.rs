//! # version-check
//!
//! Guards against co-versioned manifests drifting apart: reads the version
//! from a line-oriented manifest (`Cargo.toml`) and from a structured one
//! (`package.json`) and compares them as plain strings.
//!
//! Extraction never aborts the check. Missing files, parse failures and
//! missing fields are recorded in the report and map to exit code `2`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use version_check::{CheckConfig, check_versions};
//!
//! let mut config = CheckConfig::default();
//! config.line_manifest = PathBuf::from("Cargo.toml");
//! config.structured_manifest = PathBuf::from("package.json");
//!
//! let report = check_versions(&config);
//! println!("Status: {:?}", report.status);
//! std::process::exit(i32::from(report.exit_code()));
//! ```

mod config;
mod error;
pub mod format;
pub mod output;
mod report;
mod source;

pub use config::{
    CheckConfig, DEFAULT_FIELD, DEFAULT_LINE_MANIFEST, DEFAULT_STRUCTURED_MANIFEST,
};
pub use error::{ExtractError, ExtractErrorKind};
pub use format::ManifestFormat;
pub use report::{CheckReport, CheckStatus, ManifestVersion};
pub use source::{VersionSource, read_manifest_bounded};

use tracing::{debug, info, warn};

/// Compare the versions of the two manifests named in `config`.
///
/// The line-oriented manifest is read with [`ManifestFormat::LinePattern`],
/// the structured one with [`ManifestFormat::Structured`]. The result is
/// deterministic: the same file contents always yield the same report.
#[must_use]
pub fn check_versions(config: &CheckConfig) -> CheckReport {
    let line = VersionSource::new(&config.line_manifest, ManifestFormat::LinePattern);
    let structured =
        VersionSource::new(&config.structured_manifest, ManifestFormat::Structured);

    let report = CheckReport::from_versions(
        extract_version(&line, config),
        extract_version(&structured, config),
    );

    match report.status {
        CheckStatus::Match => info!(
            version = report.line_manifest.version.as_deref().unwrap_or_default(),
            "versions match"
        ),
        CheckStatus::Mismatch => info!(
            line = report.line_manifest.version.as_deref().unwrap_or_default(),
            structured = report.structured_manifest.version.as_deref().unwrap_or_default(),
            "versions differ"
        ),
        CheckStatus::Unavailable => info!(
            failed = report.failures().count(),
            "version unavailable"
        ),
    }

    report
}

/// Extract one manifest's version, recording failures instead of returning them.
fn extract_version(source: &VersionSource, config: &CheckConfig) -> ManifestVersion {
    let result = source.extract(&config.field, config.max_file_size);
    match &result {
        Ok(version) => debug!(path = %source.path.display(), %version, "extracted version"),
        Err(e) => warn!(path = %source.path.display(), kind = ?e.kind, "{}", e.message),
    }
    ManifestVersion::new(&source.path, source.format, result)
}
