use crate::commands::{CmdMessage, CmdResult, INVALID_QUERY};
use crate::error::Result;
use crate::parser::parse;
use crate::resolver::resolve;
use crate::store::FolderStore;
use std::path::Path;
use tracing::info;

pub fn run<S: FolderStore>(store: &S, root: Option<&Path>, query: &str) -> Result<CmdResult> {
    info!(query, "find");

    let Some(identifier) = parse(query) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(INVALID_QUERY));
        return Ok(result);
    };

    let result = CmdResult::default().with_identifier(identifier.clone());
    match resolve(store, &identifier, root) {
        Ok(folders) => Ok(result.with_folders(folders)),
        Err(e) => Ok(result.with_error(e)),
    }
}
