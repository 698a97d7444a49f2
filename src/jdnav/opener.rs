use crate::error::{JdError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &str = "open";

#[cfg(target_os = "windows")]
const DEFAULT_OPENER: &str = "explorer";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_OPENER: &str = "xdg-open";

/// Splits a configured opener such as `"code -n"` into program and args.
///
/// Falls back to the platform file manager when `custom` is unset or blank.
pub fn opener_command(custom: Option<&str>) -> (String, Vec<String>) {
    let mut parts = custom.unwrap_or_default().split_whitespace();
    match parts.next() {
        Some(program) => (program.to_string(), parts.map(String::from).collect()),
        None => (DEFAULT_OPENER.to_string(), Vec::new()),
    }
}

/// Opens `path` in the file manager (or the configured opener).
///
/// The opener is spawned and left running; only a failure to start it is an
/// error.
pub fn open_folder(path: &Path, custom: Option<&str>) -> Result<()> {
    let (program, args) = opener_command(custom);
    debug!(program = %program, path = %path.display(), "opening folder");

    Command::new(&program)
        .args(&args)
        .arg(path)
        .spawn()
        .map_err(|e| JdError::Action(format!("Failed to launch opener '{}': {}", program, e)))?;

    Ok(())
}
