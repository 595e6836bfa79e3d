use serde::{Deserialize, Serialize};

use crate::id::BookId;
use crate::status::ReadStatus;

/// A book in the catalog.
///
/// Optional text fields use the empty string for "unset" so records round-trip
/// unchanged through storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub cover_image: String,
    #[serde(default, with = "crate::status::text")]
    pub read_status: Option<ReadStatus>,
    #[serde(default, deserialize_with = "crate::text::or_empty")]
    pub notes: String,
}

impl Book {
    pub fn cover_image(&self) -> Option<&str> {
        non_empty(&self.cover_image)
    }

    pub fn notes(&self) -> Option<&str> {
        non_empty(&self.notes)
    }

    pub fn has_status(&self, status: ReadStatus) -> bool {
        self.read_status == Some(status)
    }
}

/// Field values for a book that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub cover_image: String,
    pub read_status: Option<ReadStatus>,
    pub notes: String,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ReadStatus) -> Self {
        self.read_status = Some(status);
        self
    }

    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            cover_image: self.cover_image,
            read_status: self.read_status,
            notes: self.notes,
        }
    }
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_partial_records_with_defaults() {
        let json = r#"{"id": 5, "title": "Dune", "author": "Herbert", "extra": true}"#;
        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.id, BookId(5));
        assert_eq!(book.cover_image, "");
        assert_eq!(book.read_status, None);
        assert_eq!(book.notes(), None);
    }

    #[test]
    fn null_and_unknown_values_degrade_to_empty() {
        let json = r#"{"id": 1, "title": "A", "author": "B", "notes": null, "readStatus": "Finished"}"#;
        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.notes, "");
        assert_eq!(book.read_status, None);
    }

    #[test]
    fn writes_camel_case_record_with_empty_status() {
        let book = NewBook::new("A", "B").into_book(BookId(7));
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "title": "A",
                "author": "B",
                "coverImage": "",
                "readStatus": "",
                "notes": ""
            })
        );
    }
}
