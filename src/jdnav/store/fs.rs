use super::FolderStore;
use crate::error::{JdError, Result};
use crate::model::Folder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads directory listings straight from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FolderStore for FileStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_folders(&self, path: &Path) -> Result<Vec<Folder>> {
        let entries = fs::read_dir(path).map_err(JdError::Io)?;
        Ok(collect_folders(entries.map(|entry| entry.map(|e| e.path()))))
    }
}

/// Keeps the directories among `entries`, sorted by name.
///
/// An entry that cannot be read is skipped; only failing to open the
/// directory itself is an error.
fn collect_folders<I>(entries: I) -> Vec<Folder>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut folders: Vec<Folder> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        // Follows symlinks, so a link to a directory counts as one
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            Some(Folder::new(name, path))
        })
        .collect();

    folders.sort();
    folders
}
