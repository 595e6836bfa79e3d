use serde::{Deserialize, Serialize};

use crate::book::non_empty;
use crate::id::{BookId, CharacterId};

/// A character belonging to exactly one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub origin: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub family: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub summary: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub backstory: String,
    pub book_id: BookId,
}

impl Character {
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// Narrative attributes that carry a value, labelled for display.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Origin", self.origin.as_str()),
            ("Family", self.family.as_str()),
            ("Summary", self.summary.as_str()),
            ("Backstory", self.backstory.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
    }
}

/// Field values for a character that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub book_id: BookId,
    pub name: String,
    pub image: String,
    pub origin: String,
    pub family: String,
    pub summary: String,
    pub backstory: String,
}

impl NewCharacter {
    pub fn new(book_id: BookId, name: impl Into<String>) -> Self {
        Self {
            book_id,
            name: name.into(),
            image: String::new(),
            origin: String::new(),
            family: String::new(),
            summary: String::new(),
            backstory: String::new(),
        }
    }

    pub fn into_character(self, id: CharacterId) -> Character {
        Character {
            id,
            name: self.name,
            image: self.image,
            origin: self.origin,
            family: self.family,
            summary: self.summary,
            backstory: self.backstory,
            book_id: self.book_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_book_id_from_forms() {
        let json = r#"{"id": 9, "name": "Paul", "bookId": "1700000000000"}"#;
        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.book_id, BookId(1_700_000_000_000));
        assert_eq!(character.backstory, "");
    }

    #[test]
    fn missing_book_id_is_rejected() {
        let json = r#"{"id": 9, "name": "Paul"}"#;
        assert!(serde_json::from_str::<Character>(json).is_err());
    }

    #[test]
    fn attributes_skip_blank_values() {
        let mut character = NewCharacter::new(BookId(1), "Paul").into_character(CharacterId(2));
        character.origin = "Caladan".to_string();
        character.summary = "   ".to_string();

        let attributes: Vec<_> = character.attributes().collect();
        assert_eq!(attributes, vec![("Origin", "Caladan")]);
    }
}
