use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Identifier;

pub fn run(query: &str) -> Result<CmdResult> {
    match query.parse::<Identifier>() {
        Ok(identifier) => Ok(CmdResult::default().with_identifier(identifier)),
        Err(e) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(e.to_string()));
            Ok(result)
        }
    }
}
