use crate::commands::{CmdMessage, CmdResult};
use crate::config::{JdConfig, KEY_ROOT};
use crate::error::{JdError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
    Unset(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = JdConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = JdConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            if !crate::config::KEYS.contains(&key.as_str()) {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                return Ok(result);
            }
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::info(format!("{} is not set", key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let value = if key == KEY_ROOT {
                absolute_root(&value)?
            } else {
                value
            };
            let mut config = JdConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
        ConfigAction::Unset(key) => {
            let mut config = JdConfig::load(config_dir)?;
            if let Err(e) = config.unset(&key) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} unset", key)));
            Ok(result)
        }
    }
}

/// Anchors a relative root to the current directory.
fn absolute_root(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let path = Path::new(trimmed);
    if trimmed.is_empty() || path.is_absolute() {
        return Ok(value.to_string());
    }
    let cwd = std::env::current_dir().map_err(JdError::Io)?;
    Ok(cwd.join(path).display().to_string())
}
