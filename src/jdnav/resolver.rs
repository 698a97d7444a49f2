//! # Path Resolution
//!
//! Walks a Johnny.Decimal tree one level at a time:
//!
//! ```text
//! root ──(10-19*)──▶ area ──(11*)──▶ category ──(11.01*)──▶ id
//! ```
//!
//! Each stage lists exactly one directory: the root, then the first matching
//! area, then the first matching category. The first failing stage ends the
//! lookup with its own [`ResolveError`]; nothing below it is listed.
//!
//! A query that stops short of an id (`1` or `11`) succeeds with every match
//! at the level it reaches, which is how "show me this area" works.
//!
//! ## Duplicates
//!
//! A well-formed tree has a single `10-19 …` folder and a single `11 …`
//! folder inside it. If there are more, the first by name is used for
//! narrowing and the rest are ignored.

use crate::error::ResolveError;
use crate::model::{DirPattern, Folder, Identifier};
use crate::store::FolderStore;
use std::path::Path;
use tracing::debug;

pub type SearchResult = std::result::Result<Vec<Folder>, ResolveError>;

/// Resolves `id` against the tree rooted at `root`.
pub fn resolve<S: FolderStore>(store: &S, id: &Identifier, root: Option<&Path>) -> SearchResult {
    let root = match root {
        Some(root) if !root.as_os_str().is_empty() => root,
        _ => return Err(ResolveError::RootNotConfigured),
    };
    if !store.is_dir(root) {
        return Err(ResolveError::RootNotFound(root.to_path_buf()));
    }

    let Some(area_pattern) = id.area_pattern() else {
        return Err(ResolveError::AreaMissing);
    };
    let areas = matching(store, root, &area_pattern)?;
    let Some(area_dir) = first(&areas, &area_pattern) else {
        return Err(ResolveError::AreaEmpty(area_pattern.to_string()));
    };

    let Some(category_pattern) = id.category_pattern() else {
        return Ok(areas);
    };
    let categories = matching(store, &area_dir.path, &category_pattern)?;
    let Some(category_dir) = first(&categories, &category_pattern) else {
        return Err(ResolveError::CategoryEmpty(category_pattern.to_string()));
    };

    let Some(id_pattern) = id.id_pattern() else {
        return Ok(categories);
    };
    let ids = matching(store, &category_dir.path, &id_pattern)?;
    if ids.is_empty() {
        return Err(ResolveError::IdEmpty(id_pattern.to_string()));
    }

    Ok(ids)
}

fn matching<S: FolderStore>(
    store: &S,
    dir: &Path,
    pattern: &DirPattern,
) -> Result<Vec<Folder>, ResolveError> {
    let folders = store
        .list_folders(dir)
        .map_err(|e| ResolveError::Unreadable {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

    let matches: Vec<Folder> = folders
        .into_iter()
        .filter(|folder| pattern.matches(&folder.name))
        .collect();

    debug!(
        dir = %dir.display(),
        pattern = %pattern.glob(),
        found = matches.len(),
        "listed folder"
    );
    Ok(matches)
}

fn first<'a>(matches: &'a [Folder], pattern: &DirPattern) -> Option<&'a Folder> {
    if matches.len() > 1 {
        debug!(
            pattern = %pattern.glob(),
            count = matches.len(),
            "several folders match, using the first"
        );
    }
    matches.first()
}
