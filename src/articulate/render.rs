//! Display projection of the card list.
//!
//! The renderer knows nothing about terminals or colors. It turns cards into
//! plain view-models that any front end can draw, re-deriving the whole list
//! on every call.

use crate::model::{Card, CardId, Field};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Shown instead of a list when there are no cards.
pub const EMPTY_LIST_TEXT: &str = "No cards created yet. Add your first card above!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub letter: char,
    pub text: String,
    pub is_category: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// 1-based position in the list.
    pub index: usize,
    pub id: CardId,
    pub fields: Vec<FieldView>,
}

impl CardView {
    pub fn field(&self, field: Field) -> &FieldView {
        &self.fields[Field::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default()]
    }
}

pub fn render_card(index: usize, card: &Card) -> CardView {
    CardView {
        index,
        id: card.id,
        fields: Field::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                letter: field.letter(),
                text: card.display_text(field),
                is_category: card.is_category(field),
            })
            .collect(),
    }
}

pub fn render_cards(cards: &[Card]) -> Vec<CardView> {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| render_card(i + 1, card))
        .collect()
}

/// Maps a 1-based display index back to the card id it names.
pub fn resolve_index(cards: &[Card], index: usize) -> Option<CardId> {
    index
        .checked_sub(1)
        .and_then(|i| cards.get(i))
        .map(|card| card.id)
}

/// A user reference to a card: its display index (`3`) or its id (`#1718000000000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSelector {
    Index(usize),
    Id(CardId),
}

impl fmt::Display for CardSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSelector::Index(i) => write!(f, "{}", i),
            CardSelector::Id(id) => write!(f, "#{}", id),
        }
    }
}

impl FromStr for CardSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return s.parse().map(CardSelector::Id);
        }
        s.parse()
            .map(CardSelector::Index)
            .map_err(|_| format!("Invalid card reference: {}", s))
    }
}
