use crate::api::JdApi;
use crate::config::JdConfig;
use crate::error::{JdError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_ROOT: &str = "JDNAV_ROOT";
pub const ENV_CONFIG_DIR: &str = "JDNAV_CONFIG_DIR";

pub struct JdContext {
    pub api: JdApi<FileStore>,
    pub config: JdConfig,
}

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
}

impl Overrides {
    /// Reads `$JDNAV_ROOT` and `$JDNAV_CONFIG_DIR`; empty values are ignored.
    pub fn from_env() -> Self {
        Self {
            root: non_empty_env(ENV_ROOT),
            config_dir: non_empty_env(ENV_CONFIG_DIR),
        }
    }

    /// A root given on the command line beats the environment.
    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        if let Some(root) = root.filter(|r| !r.as_os_str().is_empty()) {
            self.root = Some(root);
        }
        self
    }
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn config_dir(overrides: &Overrides) -> Result<PathBuf> {
    if let Some(dir) = &overrides.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "jdnav", "jdnav")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| JdError::Config("Could not determine config directory".to_string()))
}

/// Picks the root folder: override first, then the config file.
pub fn effective_root(overrides: &Overrides, config: &JdConfig) -> Option<PathBuf> {
    overrides
        .root
        .clone()
        .or_else(|| config.root().map(Path::to_path_buf))
}

pub fn initialize(overrides: &Overrides) -> Result<JdContext> {
    let config_dir = config_dir(overrides)?;
    let config = JdConfig::load(&config_dir)?;
    let root = effective_root(overrides, &config);

    debug!(
        config_dir = %config_dir.display(),
        root = ?root,
        "initialized"
    );

    let api = JdApi::new(FileStore::new(), root, config_dir);
    Ok(JdContext { api, config })
}
