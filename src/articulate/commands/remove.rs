use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArticulateError, Result};
use crate::model::CardId;
use crate::render::{resolve_index, CardSelector};
use crate::store::{CardStore, StorageBackend};

pub const MSG_REMOVED: &str = "Card removed";

/// Resolves every selector against the list as it is now, so removing `1 2`
/// removes the first two cards rather than the first and third.
fn resolve<B: StorageBackend>(
    store: &CardStore<B>,
    selectors: &[CardSelector],
) -> Result<Vec<CardId>> {
    selectors
        .iter()
        .map(|sel| match sel {
            CardSelector::Index(i) => resolve_index(store.list(), *i)
                .ok_or_else(|| ArticulateError::Api(format!("Index {} not found", i))),
            CardSelector::Id(id) => Ok(*id),
        })
        .collect()
}

pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    selectors: &[CardSelector],
) -> Result<CmdResult> {
    let ids = resolve(store, selectors)?;
    let mut result = CmdResult::default();

    for id in ids {
        match store.remove(id) {
            Some(card) => {
                result.add_message(CmdMessage::info(MSG_REMOVED));
                result.affected_cards.push(card);
            }
            None => result.add_message(CmdMessage::warning(format!("No card with id #{}", id))),
        }
    }

    Ok(result)
}
