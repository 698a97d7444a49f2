use crate::error::{JdError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard tools for this platform, tried in order.
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Copies text to the system clipboard using the first tool that starts.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;

    for (program, args) in CLIPBOARD_COMMANDS {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.unwrap_or_else(|| {
        JdError::Action("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| JdError::Action(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| JdError::Action(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| JdError::Action(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(JdError::Action(format!("{} exited with error", program)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_an_action_error() {
        let err = pipe_to("jdnav-no-such-clipboard-tool", &[], "x").unwrap_err();
        assert!(matches!(err, JdError::Action(ref msg) if msg.starts_with("Failed to spawn")));
    }

    #[test]
    fn test_platform_has_candidates() {
        assert!(!CLIPBOARD_COMMANDS.is_empty());
    }
}
