//! # Folder Store
//!
//! The resolver never touches `std::fs` directly. It asks a [`FolderStore`]
//! two questions: "is this a directory?" and "which directories live right
//! under this one?".
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the real filesystem.
//! - [`memory::InMemoryStore`]: a tree of paths held in memory, for tests.
//!   It also records every listing request, which lets tests check that the
//!   resolver stops listing as soon as a stage fails.
//!
//! ## Ordering
//!
//! `list_folders` returns entries sorted by name. The resolver picks the
//! first match at each stage, so the order has to be stable across calls
//! and platforms; raw `read_dir` order is neither.

use crate::error::Result;
use crate::model::Folder;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait FolderStore {
    /// True if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`, sorted by name. Files are skipped.
    fn list_folders(&self, path: &Path) -> Result<Vec<Folder>>;
}
