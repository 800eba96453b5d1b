use crate::commands::CmdResult;
use crate::error::Result;
use crate::render::render_cards;
use crate::store::{CardStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &CardStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_cards(render_cards(store.list())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{Draft, Field};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn lists_cards_in_insertion_order() {
        let mut store = CardStore::open(MemBackend::new());
        for word in ["first", "second"] {
            let mut draft = Draft::new().with_category("person");
            for field in Field::ALL {
                draft.set(field, word);
            }
            add::run(&mut store, &draft).unwrap();
        }

        let result = run(&store).unwrap();
        assert_eq!(result.listed_cards.len(), 2);
        assert_eq!(result.listed_cards[0].index, 1);
        assert_eq!(
            result.listed_cards[0].field(Field::Person).text,
            "*** first"
        );
        assert_eq!(result.listed_cards[1].field(Field::Object).text, "second");
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = CardStore::open(MemBackend::new());
        assert!(run(&store).unwrap().listed_cards.is_empty());
    }
}
