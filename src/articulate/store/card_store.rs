use super::backend::StorageBackend;
use super::persist::CardPersistence;
use crate::error::Result;
use crate::model::{Card, CardId, Draft};
use crate::validate::into_card;
use chrono::Utc;
use tracing::debug;

/// Issues card ids from the wall clock, never repeating one.
///
/// Two cards created within the same millisecond (or after the clock stepped
/// backwards) get `last + 1` instead of the clock value.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Primes the generator so every later id is above `ids`.
    pub fn after<'a>(ids: impl IntoIterator<Item = &'a CardId>) -> Self {
        Self {
            last: ids.into_iter().map(|id| id.0).max().unwrap_or(0),
        }
    }

    pub fn next_at(&mut self, now_ms: u64) -> CardId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        CardId(id)
    }

    pub fn next(&mut self) -> CardId {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now_ms)
    }
}

/// The ordered, in-memory card list and its persisted mirror.
///
/// The in-memory list is the source of truth for the session: every mutation
/// is written through to the backend, and a failed write is logged without
/// undoing the mutation.
pub struct CardStore<B: StorageBackend> {
    cards: Vec<Card>,
    ids: IdGenerator,
    persistence: CardPersistence<B>,
}

impl<B: StorageBackend> CardStore<B> {
    /// Opens the store, replacing in-memory state with whatever the backend holds.
    pub fn open(backend: B) -> Self {
        let persistence = CardPersistence::new(backend);
        let cards = persistence.load();
        let ids = IdGenerator::after(cards.iter().map(|c| &c.id));
        Self {
            cards,
            ids,
            persistence,
        }
    }

    pub fn backend(&self) -> &B {
        self.persistence.backend()
    }

    /// Validates and appends a new card.
    pub fn add(&mut self, draft: &Draft) -> Result<Card> {
        let id = self.ids.next();
        let card = into_card(draft, id)?;
        self.cards.push(card.clone());
        debug!(id = %card.id, "card added");
        self.persist();
        Ok(card)
    }

    /// Removes the card with `id`. Absent ids leave the list untouched.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let removed = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .map(|pos| self.cards.remove(pos));
        debug!(id = %id, found = removed.is_some(), "card removed");
        self.persist();
        removed
    }

    /// Drops every card. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.cards.len();
        self.cards.clear();
        self.persist();
        removed
    }

    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn persist(&self) {
        self.persistence.save(&self.cards);
        debug!("Total cards: {}", self.cards.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::store::mem_backend::MemBackend;
    use crate::store::persist::CARDS_KEY;

    fn draft(word: &str) -> Draft {
        let mut draft = Draft::new().with_category("object");
        for field in Field::ALL {
            draft.set(field, format!("{} {}", word, field));
        }
        draft
    }

    #[test]
    fn id_generator_never_repeats_within_a_tick() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);
        assert_eq!(a, CardId(1_000));
        assert_eq!(b, CardId(1_001));
        assert_eq!(c, CardId(1_002));
        assert_eq!(ids.next_at(5_000), CardId(5_000));
    }

    #[test]
    fn id_generator_starts_above_loaded_ids() {
        let loaded = [CardId(10), CardId(99), CardId(42)];
        let mut ids = IdGenerator::after(loaded.iter());
        assert_eq!(ids.next_at(0), CardId(100));
    }

    #[test]
    fn add_increments_count_with_distinct_ids() {
        let mut store = CardStore::open(MemBackend::new());
        let mut seen = Vec::new();
        for i in 0..20 {
            let before = store.count();
            let card = store.add(&draft(&format!("w{}", i))).unwrap();
            assert_eq!(store.count(), before + 1);
            assert!(!seen.contains(&card.id));
            seen.push(card.id);
        }
    }

    #[test]
    fn add_persists_each_mutation() {
        let mut store = CardStore::open(MemBackend::new());
        store.add(&draft("a")).unwrap();
        store.add(&draft("b")).unwrap();
        assert_eq!(store.backend().write_count(), 2);
    }

    #[test]
    fn add_rejects_invalid_draft_without_mutation() {
        let mut store = CardStore::open(MemBackend::new());
        assert!(store.add(&Draft::new()).is_err());
        assert_eq!(store.count(), 0);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn remove_keeps_order_of_remaining_cards() {
        let mut store = CardStore::open(MemBackend::new());
        let a = store.add(&draft("a")).unwrap();
        let b = store.add(&draft("b")).unwrap();
        let c = store.add(&draft("c")).unwrap();

        let removed = store.remove(b.id).unwrap();
        assert_eq!(removed, b);
        assert_eq!(store.list(), &[a, c]);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = CardStore::open(MemBackend::new());
        store.add(&draft("a")).unwrap();
        store.add(&draft("b")).unwrap();
        let before = store.list().to_vec();

        assert!(store.remove(CardId(1)).is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn clear_empties_and_persists() {
        let mut store = CardStore::open(MemBackend::new());
        store.add(&draft("a")).unwrap();
        store.add(&draft("b")).unwrap();

        assert_eq!(store.clear(), 2);
        assert_eq!(store.count(), 0);
        assert_eq!(store.backend().read(CARDS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn failed_save_keeps_in_memory_mutation() {
        let mut store = CardStore::open(MemBackend::new());
        store.backend().set_simulate_write_error(true);

        let card = store.add(&draft("a")).unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.get(card.id), Some(&card));
    }

    #[test]
    fn open_restores_persisted_cards() {
        let mut store = CardStore::open(MemBackend::new());
        let a = store.add(&draft("a")).unwrap();
        let b = store.add(&draft("b")).unwrap();
        let raw = store.backend().read(CARDS_KEY).unwrap().unwrap();

        let mut reopened = CardStore::open(MemBackend::new().with_entry(CARDS_KEY, &raw));
        assert_eq!(reopened.list(), &[a, b.clone()]);

        let c = reopened.add(&draft("c")).unwrap();
        assert!(c.id > b.id);
    }
}
