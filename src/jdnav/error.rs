use std::path::PathBuf;
use thiserror::Error;

/// Why a query could not be resolved to folders.
///
/// Variants are listed in the order the resolver checks them. Every one of
/// them is fixable by the user (change the query or the settings), so they
/// are shown verbatim rather than treated as failures of the tool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Root folder is not configured")]
    RootNotConfigured,

    #[error("Root folder '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("Please provide a valid area")]
    AreaMissing,

    #[error("Area '{0}' is empty")]
    AreaEmpty(String),

    #[error("Category '{0}' is empty")]
    CategoryEmpty(String),

    #[error("ID '{0}' is empty")]
    IdEmpty(String),

    #[error("Cannot read folder '{}': {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum JdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Action(String),
}

pub type Result<T> = std::result::Result<T, JdError>;
