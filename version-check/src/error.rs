//! Error types for version extraction.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// The kind of failure that prevented a version from being extracted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractErrorKind {
    /// The manifest path does not exist or is not a regular file.
    MissingFile,
    /// An I/O error occurred while reading the manifest.
    IoError,
    /// The manifest exceeded the configured maximum size limit.
    FileTooLarge,
    /// The manifest content is not valid UTF-8.
    InvalidEncoding,
    /// The structured manifest could not be parsed, or its top level is not an object.
    ParseFailure,
    /// No version field was found.
    FieldNotFound,
    /// The version field exists but does not hold a string.
    FieldNotString,
}

/// A manifest whose version could not be extracted.
///
/// Extraction failures never abort a check; they are collected into the
/// report and the run finishes with the "unavailable" exit code.
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[error("{}: {message}", .file.display())]
#[non_exhaustive]
pub struct ExtractError {
    /// The manifest path.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ExtractErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ExtractError {
    pub(crate) fn new(file: &Path, kind: ExtractErrorKind, message: impl Into<String>) -> Self {
        Self {
            file: file.to_owned(),
            kind,
            message: message.into(),
        }
    }
}
