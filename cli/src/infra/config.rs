//! YAML-file implementation of the `ConfigStore` port.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::ScaffoldConfig;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "SCAFFOLD_CONFIG";

/// `ConfigStore` backed by one YAML file, located once at construction.
#[derive(Debug, Clone)]
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$SCAFFOLD_CONFIG`, or `~/.scaffold/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the variable nor a home directory is set.
    pub fn locate() -> Result<Self> {
        config_path(std::env::var_os(CONFIG_ENV), dirs::home_dir())
            .map(Self::new)
            .with_context(|| format!("cannot determine home directory; set {CONFIG_ENV}"))
    }
}

fn config_path(env: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    env.filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".scaffold").join("config.yaml")))
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<ScaffoldConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ScaffoldConfig::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", self.path.display()));
            }
        };
        serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))
    }

    fn save(&self, config: &ScaffoldConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(config).context("cannot serialize config")?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&self.path)
            .with_context(|| format!("cannot write {}", self.path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("cannot write {}", self.path.display()))?;

        // `mode` only applies on creation; tighten a pre-existing file too.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", self.path.display()))?;
        }
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
