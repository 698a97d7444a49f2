//! # API Facade
//!
//! The single entry point for every jdnav operation, whatever the UI. It
//! holds the per-session inputs (folder store, effective root, config
//! directory) and dispatches to `commands/*.rs`.
//!
//! Like the commands it wraps, the API never prints and never exits: it
//! returns [`CmdResult`] values for the caller to render.
//!
//! `JdApi<S: FolderStore>` is generic over the store:
//! - Production: `JdApi<FileStore>`
//! - Testing: `JdApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::FolderStore;
use std::path::{Path, PathBuf};

pub struct JdApi<S: FolderStore> {
    store: S,
    root: Option<PathBuf>,
    config_dir: PathBuf,
}

impl<S: FolderStore> JdApi<S> {
    pub fn new(store: S, root: Option<PathBuf>, config_dir: PathBuf) -> Self {
        Self {
            store,
            root,
            config_dir,
        }
    }

    /// Parses `query` and resolves it under the root folder.
    pub fn find(&self, query: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, self.root(), query)
    }

    pub fn parse(&self, query: &str) -> Result<CmdResult> {
        commands::parse::run(query)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
