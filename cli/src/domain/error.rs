//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, or `std::fs`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::report::WriteReport;

// ── Provisioning errors ───────────────────────────────────────────────────────

/// Errors raised while resolving the root or materialising a content map.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Cannot resolve project root '{}': {reason}", path.display())]
    PathResolution { path: PathBuf, reason: String },

    #[error("Cannot create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid entry path '{path}': {reason}")]
    InvalidEntry { path: String, reason: &'static str },
}

impl ProvisionError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PathResolution { .. } => "path_resolution",
            Self::DirectoryCreation { .. } => "directory_creation",
            Self::Write { .. } => "write",
            Self::InvalidEntry { .. } => "invalid_entry",
        }
    }
}

/// An aborted apply: the error that stopped the run plus everything written
/// before it.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ApplyFailure {
    /// Entries successfully written before the failure, in order.
    pub written: WriteReport,
    /// The error that aborted the run.
    #[source]
    pub error: ProvisionError,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
