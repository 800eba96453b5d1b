//! Draft validation.
//!
//! A draft is accepted only when every one of the six text fields and the
//! category carry something other than whitespace. There are no length or
//! character rules beyond that.

use crate::error::{ArticulateError, Result};
use crate::model::{Card, CardId, Draft, Field};

/// Form label for the category input, used when reporting missing inputs.
pub const CATEGORY_INPUT: &str = "category";

/// Returns true when the draft can become a card.
///
/// # Examples
/// ```
/// use articulate::model::{Draft, Field};
/// use articulate::validate::is_valid;
///
/// let mut draft = Draft::new();
/// for field in Field::ALL {
///     draft.set(field, "word");
/// }
/// assert!(!is_valid(&draft));
/// assert!(is_valid(&draft.with_category("person")));
/// ```
pub fn is_valid(draft: &Draft) -> bool {
    missing_fields(draft).is_empty()
}

/// Names of the inputs that are absent or blank, in form order.
pub fn missing_fields(draft: &Draft) -> Vec<&'static str> {
    let mut missing: Vec<&'static str> = Field::ALL
        .iter()
        .filter(|field| is_blank(draft.get(**field)))
        .map(|field| field.name())
        .collect();

    if is_blank(draft.category.as_deref()) {
        missing.push(CATEGORY_INPUT);
    }
    missing
}

/// Turns a valid draft into a card carrying `id`, trimming every field.
pub fn into_card(draft: &Draft, id: CardId) -> Result<Card> {
    let missing = missing_fields(draft);
    if !missing.is_empty() {
        return Err(ArticulateError::Validation(format!(
            "missing {}",
            missing.join(", ")
        )));
    }

    let category = draft
        .category
        .as_deref()
        .unwrap_or_default()
        .parse::<Field>()
        .map_err(ArticulateError::Validation)?;

    let text = |field: Field| draft.get(field).unwrap_or_default().trim().to_string();

    Ok(Card {
        person: text(Field::Person),
        object: text(Field::Object),
        world: text(Field::World),
        action: text(Field::Action),
        nature: text(Field::Nature),
        random: text(Field::Random),
        category: Some(category),
        id,
    })
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|s| s.trim().is_empty()).unwrap_or(true)
}
