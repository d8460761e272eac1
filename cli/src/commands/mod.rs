//! Command implementations

pub mod apply;
pub mod config;
pub mod list;
pub mod version;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::services::config_service;
use crate::domain::RootSource;

/// Environment variable that overrides the configured project root.
pub const ROOT_ENV: &str = "SCAFFOLD_ROOT";

/// Resolve the absolute project root for this invocation.
///
/// # Errors
///
/// Returns an error if the working directory is unavailable, the config is
/// needed but cannot be loaded, or the chosen root cannot be made absolute.
pub fn effective_root(app: &AppContext, flag: Option<&Path>) -> Result<(PathBuf, RootSource)> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let env = std::env::var_os(ROOT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    config_service::locate_root(&app.config_store, flag, env.as_deref(), &cwd)
}
