//! Manifest sources on disk.
//!
//! A `VersionSource` pairs a path with the extractor for its format. Reading
//! is bounded: `Read::take` caps memory use no matter how large the file is.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExtractError, ExtractErrorKind};
use crate::format::ManifestFormat;

/// A manifest file and the strategy used to pull a version out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSource {
    /// Path of the manifest.
    pub path: PathBuf,
    /// Extraction strategy for the manifest's content.
    pub format: ManifestFormat,
}

impl VersionSource {
    /// Create a source for `path` read with `format`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: ManifestFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Read the manifest and extract `field` from it.
    ///
    /// # Errors
    ///
    /// Returns an `ExtractError` if the file is missing, unreadable, too large,
    /// not UTF-8, or carries no usable value for `field`.
    pub fn extract(&self, field: &str, max_file_size: u64) -> Result<String, ExtractError> {
        let content = read_manifest_bounded(&self.path, max_file_size)?;
        debug!(
            path = %self.path.display(),
            format = %self.format,
            bytes = content.len(),
            "read manifest"
        );
        self.format.extract(&content, field, &self.path)
    }
}

/// Read a manifest using a bounded streaming read, enforcing `max_file_size`.
///
/// Existence is checked explicitly first so a missing manifest is reported as
/// `MissingFile` rather than a generic I/O failure.
///
/// # Errors
///
/// Returns an `ExtractError` if:
/// - The path does not exist or is not a regular file
/// - An I/O error occurs
/// - The file exceeds `max_file_size`
/// - The content is not valid UTF-8
pub fn read_manifest_bounded(path: &Path, max_file_size: u64) -> Result<String, ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::new(
            path,
            ExtractErrorKind::MissingFile,
            "File not found",
        ));
    }

    let file = std::fs::File::open(path).map_err(|e| {
        let kind = if e.kind() == io::ErrorKind::NotFound {
            ExtractErrorKind::MissingFile
        } else {
            ExtractErrorKind::IoError
        };
        ExtractError::new(path, kind, format!("Failed to open file: {e}"))
    })?;

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| {
            ExtractError::new(
                path,
                ExtractErrorKind::IoError,
                format!("Failed to read file: {e}"),
            )
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(ExtractError::new(
            path,
            ExtractErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    String::from_utf8(buffer).map_err(|_| {
        ExtractError::new(
            path,
            ExtractErrorKind::InvalidEncoding,
            "File is not valid UTF-8",
        )
    })
}
