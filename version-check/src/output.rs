//! Output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`.

use std::io::Write;

use crate::report::{CheckReport, CheckStatus, ManifestVersion};

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as a short human-readable message to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let line = &report.line_manifest;
    let structured = &report.structured_manifest;

    match report.status {
        CheckStatus::Match => {
            let version = line.version.as_deref().unwrap_or_default();
            writeln!(writer, "Version match: {version}")?;
        }
        CheckStatus::Mismatch => {
            writeln!(writer, "Error: Version mismatch!")?;
            writeln!(
                writer,
                "{}: {},",
                line.label(),
                line.version.as_deref().unwrap_or_default()
            )?;
            writeln!(
                writer,
                "{}: {}",
                structured.label(),
                structured.version.as_deref().unwrap_or_default()
            )?;
        }
        CheckStatus::Unavailable => {
            let names: Vec<String> = report.failures().map(ManifestVersion::label).collect();
            writeln!(
                writer,
                "Error: Could not find version in {}.",
                names.join(" and ")
            )?;
            for failed in report.failures() {
                if let Some(err) = &failed.error {
                    writeln!(writer, "  {err}")?;
                }
            }
        }
    }

    Ok(())
}
