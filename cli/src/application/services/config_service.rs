//! Application service: configuration use-cases.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{
    RootSource, ScaffoldConfig, absolutize, select_root, validate_config_key,
    validate_config_value,
};
use crate::domain::error::ProvisionError;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<ScaffoldConfig> {
    store.load()
}

/// Validate and persist a single `key = value` setting.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<ScaffoldConfig> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    let mut config = store.load()?;
    if key == "root" {
        config.root = Some(PathBuf::from(value));
    }
    store.save(&config)?;
    Ok(config)
}

/// Resolve the absolute project root, reading the config file only when
/// neither the flag nor the environment names a root.
///
/// # Errors
///
/// Returns an error if the config is needed but cannot be loaded, or the
/// chosen path cannot be made absolute.
pub fn locate_root(
    store: &impl ConfigStore,
    flag: Option<&Path>,
    env: Option<&Path>,
    cwd: &Path,
) -> Result<(PathBuf, RootSource)> {
    let config = if flag.is_some() || env.is_some() {
        ScaffoldConfig::default()
    } else {
        store.load()?
    };
    Ok(resolve_root(flag, env, &config, cwd)?)
}

/// Resolve the absolute project root from the flag, environment and config.
///
/// Falls back to `cwd` itself when nothing else is set.
///
/// # Errors
///
/// Returns [`ProvisionError::PathResolution`] if the chosen path cannot be
/// made absolute.
pub fn resolve_root(
    flag: Option<&Path>,
    env: Option<&Path>,
    config: &ScaffoldConfig,
    cwd: &Path,
) -> Result<(PathBuf, RootSource), ProvisionError> {
    let (raw, source) = select_root(flag, env, config)
        .unwrap_or_else(|| (cwd.to_path_buf(), RootSource::CurrentDir));
    Ok((absolutize(&raw, cwd)?, source))
}
