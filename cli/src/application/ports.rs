//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::io;
use std::path::Path;

use anyhow::Result;

use crate::domain::ScaffoldConfig;

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// The filesystem operations a provisioning run needs.
///
/// Returns raw `io::Result` so the service can map each failure onto the
/// matching [`crate::domain::ProvisionError`] variant with the path attached.
pub trait ProjectFs {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
    /// Whether anything (file, directory or dangling link) exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Create `path` and every missing ancestor. Existing directories are a no-op.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    /// Read the full contents of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    /// Create or truncate the file at `path` and write `content`.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the config, returning defaults if no file exists.
    fn load(&self) -> Result<ScaffoldConfig>;
    /// Persist the config.
    fn save(&self, config: &ScaffoldConfig) -> Result<()>;
    /// Path of the backing file.
    fn path(&self) -> &Path;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
