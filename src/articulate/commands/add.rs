use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArticulateError, Result};
use crate::model::Draft;
use crate::store::{CardStore, StorageBackend};
use crate::validate::is_valid;
use tracing::debug;

pub const MSG_ADDED: &str = "Card added successfully!";
pub const MSG_INCOMPLETE: &str = "Please fill in all fields";

pub fn run<B: StorageBackend>(store: &mut CardStore<B>, draft: &Draft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !is_valid(draft) {
        debug!("rejected incomplete draft");
        result.add_message(CmdMessage::error(MSG_INCOMPLETE));
        return Ok(result);
    }

    match store.add(draft) {
        Ok(card) => {
            result.add_message(CmdMessage::success(MSG_ADDED));
            Ok(result.with_affected_cards(vec![card]))
        }
        Err(ArticulateError::Validation(reason)) => {
            result.add_message(CmdMessage::error(reason));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}
