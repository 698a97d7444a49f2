//! # Configuration
//!
//! Settings live in `config.json` inside the jdnav config directory (see
//! [`crate::init`] for how that directory is found).
//!
//! | Key      | Description                                            |
//! |----------|--------------------------------------------------------|
//! | `root`   | Root of the Johnny.Decimal tree                        |
//! | `opener` | Command used to open folders (default: platform opener) |
//!
//! The root folder can also come from `$JDNAV_ROOT` or `--root`; those win
//! over the file. `jdnav config root <path>` stores relative paths anchored
//! to the directory it was run from.

use crate::error::{JdError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_ROOT: &str = "root";
pub const KEY_OPENER: &str = "opener";
pub const KEYS: &[&str] = &[KEY_ROOT, KEY_OPENER];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JdConfig {
    /// Root folder of the Johnny.Decimal tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<PathBuf>,

    /// Command to open a folder with, e.g. "code -n"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener: Option<String>,
}

impl JdConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JdError::Io)?;
        let config: JdConfig = serde_json::from_str(&content).map_err(JdError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JdError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JdError::Serialization)?;
        fs::write(config_path, content).map_err(JdError::Io)?;
        Ok(())
    }

    /// The configured root, treating an empty path as unset.
    pub fn root(&self) -> Option<&Path> {
        self.root_folder
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_ROOT => self.root().map(|p| p.display().to_string()),
            KEY_OPENER => self.opener.clone(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("Value for {} cannot be empty", key));
        }
        match key {
            KEY_ROOT => self.root_folder = Some(PathBuf::from(value)),
            KEY_OPENER => self.opener = Some(value.to_string()),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn unset(&mut self, key: &str) -> std::result::Result<(), String> {
        match key {
            KEY_ROOT => self.root_folder = None,
            KEY_OPENER => self.opener = None,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All keys with their current value, unset ones included.
    pub fn list_all(&self) -> Vec<(&'static str, Option<String>)> {
        KEYS.iter().map(|key| (*key, self.get(key))).collect()
    }
}
