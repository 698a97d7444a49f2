//! # Rendering
//!
//! Turns `CmdResult` values into terminal text. Functions return `String`s so
//! they can be tested without capturing stdout; only [`print_messages`]
//! writes directly.
//!
//! Info and success messages go to stdout. Warnings and errors go to stderr,
//! which keeps `jdnav -p 11.01` safe to use inside `$(...)`.

use colored::Colorize;
use jdnav::api::{CmdMessage, CmdResult, MessageLevel};
use jdnav::model::{Folder, Identifier};
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Folder names wider than this are truncated in the listing.
const MAX_NAME_WIDTH: usize = 48;
const NOT_SET: &str = "(not set)";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => {
                eprintln!("{} {}", "Error:".red().bold(), message.content.red())
            }
        }
    }
}

/// One line per folder: the name padded to a common width, then the path.
pub fn render_folders(folders: &[Folder]) -> String {
    let names: Vec<String> = folders
        .iter()
        .map(|f| truncate_to_width(&f.name, MAX_NAME_WIDTH))
        .collect();
    let width = names.iter().map(|n| n.width()).max().unwrap_or(0);

    let mut output = String::new();
    for (name, folder) in names.iter().zip(folders) {
        let padding = " ".repeat(width.saturating_sub(name.width()));
        output.push_str(&format!(
            "{}{}  {}\n",
            name.bold(),
            padding,
            folder.path.display().to_string().dimmed()
        ));
    }
    output
}

pub fn render_paths(folders: &[Folder]) -> String {
    folders
        .iter()
        .map(|f| format!("{}\n", f.path.display()))
        .collect()
}

pub fn render_json(result: &CmdResult) -> String {
    let value = match (&result.error, result.messages.first()) {
        (Some(error), _) => json!({
            "identifier": result.identifier,
            "error": error.to_string(),
        }),
        (None, Some(message)) if !result.is_success() => json!({
            "error": message.content,
        }),
        _ => json!({
            "identifier": result.identifier,
            "folders": result.folders,
        }),
    };
    format!("{}\n", value)
}

pub fn render_identifier(id: &Identifier) -> String {
    let field = |value: Option<&str>| value.unwrap_or("-").to_string();
    let glob = |pattern: Option<jdnav::model::DirPattern>| {
        pattern.map(|p| p.glob()).unwrap_or_else(|| "-".to_string())
    };

    let rows = [
        ("area", field(id.area()), glob(id.area_pattern())),
        ("category", field(id.category()), glob(id.category_pattern())),
        ("id", field(id.id()), glob(id.id_pattern())),
    ];

    let mut output = format!("{}\n", id.to_string().bold());
    for (label, value, pattern) in rows {
        output.push_str(&format!(
            "  {:<10}{:<6}{}\n",
            label,
            value,
            pattern.dimmed()
        ));
    }
    output
}

pub fn render_config(entries: &[(&str, Option<String>)]) -> String {
    entries
        .iter()
        .map(|(key, value)| match value {
            Some(v) => format!("{} = {}\n", key, v),
            None => format!("{} = {}\n", key, NOT_SET.dimmed()),
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
