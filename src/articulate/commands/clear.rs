use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CardStore, StorageBackend};

pub const MSG_CLEARED: &str = "All cards cleared";
pub const MSG_CANCELLED: &str = "Clear cancelled";

/// Empties the store. `confirmed` must come from an explicit user answer;
/// without it nothing is touched.
pub fn run<B: StorageBackend>(store: &mut CardStore<B>, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::info(MSG_CANCELLED));
        return Ok(result);
    }

    store.clear();
    result.add_message(CmdMessage::info(MSG_CLEARED));
    Ok(result)
}
