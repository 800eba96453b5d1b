use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shown in front of the category field's text, both in the list view
/// and on exported sheets.
pub const CATEGORY_MARKER: &str = "***";

/// One of the six labeled text slots on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Person,
    Object,
    World,
    Action,
    Nature,
    Random,
}

impl Field {
    /// All fields in card order (top band to bottom band).
    pub const ALL: [Field; 6] = [
        Field::Person,
        Field::Object,
        Field::World,
        Field::Action,
        Field::Nature,
        Field::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Person => "person",
            Field::Object => "object",
            Field::World => "world",
            Field::Action => "action",
            Field::Nature => "nature",
            Field::Random => "random",
        }
    }

    /// Single-letter label drawn on the band.
    pub fn letter(&self) -> char {
        match self {
            Field::Person => 'P',
            Field::Object => 'O',
            Field::World => 'W',
            Field::Action => 'A',
            Field::Nature => 'N',
            Field::Random => 'R',
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown category: {}", needle))
    }
}

/// Store-unique card identifier. Derived from the creation time in
/// milliseconds, bumped past the last issued id when the clock has not moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CardId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse()
            .map(CardId)
            .map_err(|_| format!("Invalid card id: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub person: String,
    pub object: String,
    pub world: String,
    pub action: String,
    pub nature: String,
    pub random: String,
    // Older records may carry an empty or unknown category; those load as unset.
    #[serde(
        rename = "spadeCategory",
        default,
        deserialize_with = "deserialize_category"
    )]
    pub category: Option<Field>,
    pub id: CardId,
}

impl Card {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Person => &self.person,
            Field::Object => &self.object,
            Field::World => &self.world,
            Field::Action => &self.action,
            Field::Nature => &self.nature,
            Field::Random => &self.random,
        }
    }

    pub fn is_category(&self, field: Field) -> bool {
        self.category == Some(field)
    }

    /// Text as shown to the user: the category field gets the marker prefix.
    pub fn display_text(&self, field: Field) -> String {
        let value = self.value(field);
        if self.is_category(field) {
            format!("{} {}", CATEGORY_MARKER, value)
        } else {
            value.to_string()
        }
    }
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<Field>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Unvalidated user input for a new card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub person: Option<String>,
    pub object: Option<String>,
    pub world: Option<String>,
    pub action: Option<String>,
    pub nature: Option<String>,
    pub random: Option<String>,
    pub category: Option<String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Person => self.person.as_deref(),
            Field::Object => self.object.as_deref(),
            Field::World => self.world.as_deref(),
            Field::Action => self.action.as_deref(),
            Field::Nature => self.nature.as_deref(),
            Field::Random => self.random.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Person => &mut self.person,
            Field::Object => &mut self.object,
            Field::World => &mut self.world,
            Field::Action => &mut self.action,
            Field::Nature => &mut self.nature,
            Field::Random => &mut self.random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card(category: Option<Field>) -> Card {
        Card {
            person: "Elvis".into(),
            object: "Teapot".into(),
            world: "Paris".into(),
            action: "Juggling".into(),
            nature: "Oak".into(),
            random: "Velcro".into(),
            category,
            id: CardId(1_700_000_000_000),
        }
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!("Person".parse::<Field>().unwrap(), Field::Person);
        assert_eq!(" random ".parse::<Field>().unwrap(), Field::Random);
        assert!("spade".parse::<Field>().is_err());
    }

    #[test]
    fn card_id_accepts_hash_prefix() {
        assert_eq!("#42".parse::<CardId>().unwrap(), CardId(42));
        assert_eq!("42".parse::<CardId>().unwrap(), CardId(42));
        assert!("p1".parse::<CardId>().is_err());
    }

    #[test]
    fn display_text_marks_only_category_field() {
        let card = sample_card(Some(Field::Person));
        assert_eq!(card.display_text(Field::Person), "*** Elvis");
        assert_eq!(card.display_text(Field::Object), "Teapot");

        let plain = sample_card(None);
        for field in Field::ALL {
            assert!(!plain.display_text(field).starts_with(CATEGORY_MARKER));
        }
    }

    #[test]
    fn card_uses_browser_record_layout() {
        let card = sample_card(Some(Field::World));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["spadeCategory"], "world");
        assert_eq!(json["id"], 1_700_000_000_000u64);
    }

    #[test]
    fn unknown_or_missing_category_loads_as_unset() {
        let json = r#"{"person":"a","object":"b","world":"c","action":"d",
            "nature":"e","random":"f","spadeCategory":"","id":7}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.category, None);

        let json = r#"{"person":"a","object":"b","world":"c","action":"d",
            "nature":"e","random":"f","id":8}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.category, None);
    }

    #[test]
    fn draft_setters_address_each_field() {
        let mut draft = Draft::new();
        for field in Field::ALL {
            draft.set(field, field.name());
        }
        for field in Field::ALL {
            assert_eq!(draft.get(field), Some(field.name()));
        }
    }
}
