//! Domain types and validators for Scaffold configuration.
//!
//! Pure functions only: no I/O, no filesystem access.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, ProvisionError};

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["root"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.scaffold/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Project root to provision when neither `--root` nor `SCAFFOLD_ROOT`
    /// is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// Where the effective project root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Flag,
    Env,
    Config,
    CurrentDir,
}

impl RootSource {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Flag => "--root",
            Self::Env => "SCAFFOLD_ROOT",
            Self::Config => "config file",
            Self::CurrentDir => "current directory",
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    if key == "root" && value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "root must be a non-empty path".to_string(),
        }
        .into());
    }
    Ok(())
}

// ── Root selection ───────────────────────────────────────────────────────────

/// Pick the root candidate by precedence: flag, environment, config file.
///
/// Returns `None` when none is set; the caller falls back to the current
/// directory.
#[must_use]
pub fn select_root(
    flag: Option<&Path>,
    env: Option<&Path>,
    config: &ScaffoldConfig,
) -> Option<(PathBuf, RootSource)> {
    flag.map(|p| (p.to_path_buf(), RootSource::Flag))
        .or_else(|| env.map(|p| (p.to_path_buf(), RootSource::Env)))
        .or_else(|| config.root.clone().map(|p| (p, RootSource::Config)))
}

/// Make `path` absolute against `cwd` without touching the filesystem.
///
/// # Errors
///
/// Returns [`ProvisionError::PathResolution`] for an empty path or a
/// relative `cwd`.
pub fn absolutize(path: &Path, cwd: &Path) -> Result<PathBuf, ProvisionError> {
    if path.as_os_str().is_empty() {
        return Err(ProvisionError::PathResolution {
            path: path.to_path_buf(),
            reason: "path is empty".to_string(),
        });
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    if !cwd.is_absolute() {
        return Err(ProvisionError::PathResolution {
            path: path.to_path_buf(),
            reason: format!("working directory {} is not absolute", cwd.display()),
        });
    }
    Ok(cwd.join(path))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
