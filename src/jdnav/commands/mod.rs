use crate::config::JdConfig;
use crate::error::ResolveError;
use crate::model::{Folder, Identifier};

pub mod config;
pub mod find;
pub mod parse;

/// Shown when the query does not start with a digit.
pub const INVALID_QUERY: &str = "No results found: please enter a valid Johnny.Decimal id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub identifier: Option<Identifier>,
    pub folders: Vec<Folder>,
    pub error: Option<ResolveError>,
    pub config: Option<JdConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    pub fn with_folders(mut self, folders: Vec<Folder>) -> Self {
        self.folders = folders;
        self
    }

    pub fn with_error(mut self, error: ResolveError) -> Self {
        self.messages.push(CmdMessage::error(error.to_string()));
        self.error = Some(error);
        self
    }

    pub fn with_config(mut self, config: JdConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command produced something the user asked for.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
            && !self
                .messages
                .iter()
                .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
