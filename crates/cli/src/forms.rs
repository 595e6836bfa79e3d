//! Form handling: turning user input into catalog records.
//!
//! Required fields are checked here, before the catalog is asked to do
//! anything, and a character's book must exist in the catalog.

use eyre::{Result, bail, eyre};
use folio_storage::{Catalog, KeyValueStore};
use folio_types::{Book, BookId, Character, NewBook, NewCharacter, ReadStatus};

use crate::cli::{BookFields, CharacterFields};

impl BookFields {
    /// Build from `key=value` pairs as typed in the shell.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let mut fields = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "title" => fields.title = Some(value.clone()),
                "author" => fields.author = Some(value.clone()),
                "cover" | "coverImage" => fields.cover = Some(value.clone()),
                "status" | "readStatus" => {
                    if value.trim().is_empty() {
                        fields.clear_status = true;
                    } else {
                        fields.status = Some(value.parse::<ReadStatus>()?);
                    }
                }
                "notes" => fields.notes = Some(value.clone()),
                _ => bail!("Unknown book field: {}", key),
            }
        }
        Ok(fields)
    }

    pub fn into_new_book(self) -> Result<NewBook> {
        let title = required(self.title, "title")?;
        let author = required(self.author, "author")?;

        Ok(NewBook {
            title,
            author,
            cover_image: self.cover.unwrap_or_default(),
            read_status: if self.clear_status { None } else { self.status },
            notes: self.notes.unwrap_or_default(),
        })
    }

    /// Overwrite the fields that were given; the id is never touched.
    pub fn apply_to(self, book: &mut Book) -> Result<()> {
        if let Some(title) = self.title {
            book.title = required(Some(title), "title")?;
        }
        if let Some(author) = self.author {
            book.author = required(Some(author), "author")?;
        }
        if let Some(cover) = self.cover {
            book.cover_image = cover;
        }
        if self.clear_status {
            book.read_status = None;
        } else if let Some(status) = self.status {
            book.read_status = Some(status);
        }
        if let Some(notes) = self.notes {
            book.notes = notes;
        }
        Ok(())
    }
}

impl CharacterFields {
    /// Build from `key=value` pairs as typed in the shell. A `book` pair is
    /// returned separately since it is not an editable field.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<(Self, Option<BookId>)> {
        let mut fields = Self::default();
        let mut book = None;
        for (key, value) in pairs {
            match key.as_str() {
                "book" | "bookId" => {
                    book = Some(
                        value
                            .parse::<BookId>()
                            .map_err(|_| eyre!("Invalid book id: {}", value))?,
                    )
                }
                "name" => fields.name = Some(value.clone()),
                "image" => fields.image = Some(value.clone()),
                "origin" => fields.origin = Some(value.clone()),
                "family" => fields.family = Some(value.clone()),
                "summary" => fields.summary = Some(value.clone()),
                "backstory" => fields.backstory = Some(value.clone()),
                _ => bail!("Unknown character field: {}", key),
            }
        }
        Ok((fields, book))
    }

    /// Validate against the catalog and build a new character for `book_id`.
    pub fn into_new_character<S: KeyValueStore>(
        self,
        book_id: BookId,
        catalog: &Catalog<S>,
    ) -> Result<NewCharacter> {
        if catalog.book(book_id).is_none() {
            bail!("Book not found: {}", book_id);
        }

        let mut character = NewCharacter::new(book_id, required(self.name, "name")?);
        character.image = self.image.unwrap_or_default();
        character.origin = self.origin.unwrap_or_default();
        character.family = self.family.unwrap_or_default();
        character.summary = self.summary.unwrap_or_default();
        character.backstory = self.backstory.unwrap_or_default();
        Ok(character)
    }

    /// Overwrite the fields that were given; id and book are never touched.
    pub fn apply_to(self, character: &mut Character) -> Result<()> {
        if let Some(name) = self.name {
            character.name = required(Some(name), "name")?;
        }
        for (value, target) in [
            (self.image, &mut character.image),
            (self.origin, &mut character.origin),
            (self.family, &mut character.family),
            (self.summary, &mut character.summary),
            (self.backstory, &mut character.backstory),
        ] {
            if let Some(value) = value {
                *target = value;
            }
        }
        Ok(())
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(eyre!("Missing required field: {}", field)),
    }
}

/// Split a shell line into words, honouring double quotes.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        bail!("Unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Separate `key=value` words from positional ones.
pub fn split_pairs(words: &[String]) -> (Vec<String>, Vec<(String, String)>) {
    let mut positional = Vec::new();
    let mut pairs = Vec::new();
    for word in words {
        match word.split_once('=') {
            Some((key, value)) => pairs.push((key.to_string(), value.to_string())),
            None => positional.push(word.clone()),
        }
    }
    (positional, pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::MemoryStore;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn split_words_handles_quotes() {
        let words = split_words(r#"add-book title="The Left Hand" author=Le"  "Guin"#).unwrap();
        assert_eq!(
            words,
            vec!["add-book", "title=The Left Hand", "author=Le  Guin"]
        );
        assert!(split_words(r#"title="open"#).is_err());
        assert_eq!(split_words(r#"notes="""#).unwrap(), vec!["notes="]);
    }

    #[test]
    fn split_pairs_separates_positionals() {
        let words = vec!["42".to_string(), "name=Paul".to_string()];
        let (positional, pairs) = split_pairs(&words);
        assert_eq!(positional, vec!["42"]);
        assert_eq!(pairs, vec![("name".to_string(), "Paul".to_string())]);
    }

    #[test]
    fn book_form_requires_title_and_author() {
        let form = BookFields::from_pairs(&pairs(&[("title", "Dune")])).unwrap();
        assert!(form.into_new_book().is_err());

        let form = BookFields::from_pairs(&pairs(&[
            ("title", " Dune "),
            ("author", "Herbert"),
            ("status", "to-read"),
        ]))
        .unwrap();
        let book = form.into_new_book().unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.read_status, Some(ReadStatus::ToRead));
    }

    #[test]
    fn book_form_rejects_unknown_fields() {
        assert!(BookFields::from_pairs(&pairs(&[("rating", "5")])).is_err());
        assert!(BookFields::from_pairs(&pairs(&[("status", "finished")])).is_err());
    }

    #[test]
    fn apply_only_touches_given_fields() {
        let mut book = NewBook::new("Dune", "Herbert")
            .with_status(ReadStatus::Reading)
            .into_book(BookId(1));
        let form = BookFields::from_pairs(&pairs(&[("notes", "Reread"), ("status", "")])).unwrap();

        form.apply_to(&mut book).unwrap();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.notes, "Reread");
        assert_eq!(book.read_status, None);
    }

    #[tokio::test]
    async fn character_form_checks_parent_book() {
        let mut catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        let book = catalog.add_book(NewBook::new("Dune", "Herbert")).await.unwrap();

        let (form, _) = CharacterFields::from_pairs(&pairs(&[("name", "Paul")])).unwrap();
        assert!(form.into_new_character(BookId(1), &catalog).is_err());

        let id = book.id.to_string();
        let (form, parent) =
            CharacterFields::from_pairs(&pairs(&[("name", "Paul"), ("book", id.as_str())])).unwrap();
        assert_eq!(parent, Some(book.id));
        let character = form.into_new_character(book.id, &catalog).unwrap();
        assert_eq!(character.name, "Paul");
    }
}
