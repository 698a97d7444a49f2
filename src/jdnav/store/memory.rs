use super::FolderStore;
use crate::error::{JdError, Result};
use crate::model::Folder;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory directory tree for testing.
///
/// Adding a path adds all of its ancestors too. Every `list_folders` call is
/// recorded and can be inspected through [`InMemoryStore::listed`].
#[derive(Default)]
pub struct InMemoryStore {
    dirs: BTreeSet<PathBuf>,
    listed: RefCell<Vec<PathBuf>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dirs<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut store = Self::new();
        for path in paths {
            store.add_dir(path);
        }
        store
    }

    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) {
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Directories passed to `list_folders`, in call order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    pub fn listing_count(&self) -> usize {
        self.listed.borrow().len()
    }
}

impl FolderStore for InMemoryStore {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn list_folders(&self, path: &Path) -> Result<Vec<Folder>> {
        self.listed.borrow_mut().push(path.to_path_buf());

        if !self.dirs.contains(path) {
            return Err(JdError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )));
        }

        let mut folders: Vec<Folder> = self
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| {
                let name = dir.file_name()?.to_string_lossy().into_owned();
                Some(Folder::new(name, dir.clone()))
            })
            .collect();
        folders.sort();
        Ok(folders)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const ROOT: &str = "/jd";

    /// A small but complete tree:
    ///
    /// ```text
    /// /jd
    /// ├── 10-19 Admin
    /// │   ├── 11 Finance
    /// │   │   ├── 11.01 Invoices
    /// │   │   └── 11.02 Receipts
    /// │   └── 12 Legal
    /// └── 20-29 Work
    ///     └── 21 Clients
    /// ```
    pub fn sample_tree() -> InMemoryStore {
        InMemoryStore::with_dirs([
            "/jd/10-19 Admin/11 Finance/11.01 Invoices",
            "/jd/10-19 Admin/11 Finance/11.02 Receipts",
            "/jd/10-19 Admin/12 Legal",
            "/jd/20-29 Work/21 Clients",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_tree;
    use super::*;

    #[test]
    fn test_ancestors_are_dirs() {
        let store = sample_tree();
        assert!(store.is_dir(Path::new("/jd")));
        assert!(store.is_dir(Path::new("/jd/10-19 Admin/11 Finance")));
        assert!(!store.is_dir(Path::new("/jd/30-39 Home")));
    }

    #[test]
    fn test_lists_immediate_children_only() {
        let store = sample_tree();
        let folders = store.list_folders(Path::new("/jd/10-19 Admin")).unwrap();
        let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["11 Finance", "12 Legal"]);
    }

    #[test]
    fn test_records_listing_calls() {
        let store = sample_tree();
        store.list_folders(Path::new("/jd")).unwrap();
        let _ = store.list_folders(Path::new("/missing"));
        assert_eq!(
            store.listed(),
            vec![PathBuf::from("/jd"), PathBuf::from("/missing")]
        );
        assert_eq!(store.listing_count(), 2);
    }
}
