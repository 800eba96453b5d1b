use super::backend::StorageBackend;
use crate::model::Card;
use tracing::{debug, error, warn};

/// Key under which the whole card list is stored.
pub const CARDS_KEY: &str = "articulateCards";

/// Serialized mirror of the card list.
///
/// Neither direction ever fails from the caller's point of view: a failed save
/// is logged and reported as `false`, and a missing or corrupt record loads as
/// an empty list.
pub struct CardPersistence<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CardPersistence<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn save(&self, cards: &[Card]) -> bool {
        let json = match serde_json::to_string(cards) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Error saving cards");
                return false;
            }
        };
        match self.backend.write(CARDS_KEY, &json) {
            Ok(()) => {
                debug!(count = cards.len(), "saved cards");
                true
            }
            Err(e) => {
                error!(error = %e, "Error saving cards");
                false
            }
        }
    }

    pub fn load(&self) -> Vec<Card> {
        let raw = match self.backend.read(CARDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!(error = %e, "Error loading cards");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Card>>(&raw) {
            Ok(cards) => {
                debug!(count = cards.len(), "loaded cards");
                cards
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable card record");
                Vec::new()
            }
        }
    }
}
