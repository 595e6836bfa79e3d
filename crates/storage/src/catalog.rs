//! The entity store: books and characters, kept in memory and written through
//! to a [`KeyValueStore`] on every mutation.

use folio_types::{Book, BookId, Character, CharacterId, NewBook, NewCharacter, ReadStatus};
use tokio::sync::watch;

use crate::error::{CatalogError, Result};
use crate::ids::IdGenerator;
use crate::models::{decode_collection, encode_collection};
use crate::traits::{BOOKS_KEY, CHARACTERS_KEY, KeyValueStore};
use crate::types::{BookFilter, CatalogStats, CleanupReport, DeleteReport};

/// In-memory catalog backed by a key-value store.
///
/// A `Catalog` only exists once its collections have been loaded, so every
/// accessor works on initialized data. Mutations take `&mut self`; each one
/// writes the new collection to the store before replacing the in-memory copy,
/// which keeps both sides identical even when a write fails.
pub struct Catalog<S> {
    store: S,
    books: Vec<Book>,
    characters: Vec<Character>,
    book_ids: IdGenerator,
    character_ids: IdGenerator,
    revision: watch::Sender<u64>,
}

impl<S: KeyValueStore> Catalog<S> {
    /// Load both collections from `store`.
    ///
    /// Absent or unreadable payloads start as empty collections. Errors from
    /// the store itself (e.g. permission denied) are returned, since writing
    /// over data we failed to read would lose it.
    pub async fn load(store: S) -> Result<Self> {
        let book_bytes = store.get(BOOKS_KEY).await?;
        let character_bytes = store.get(CHARACTERS_KEY).await?;

        let books: Vec<Book> = decode_collection(BOOKS_KEY, book_bytes.as_deref());
        let characters: Vec<Character> =
            decode_collection(CHARACTERS_KEY, character_bytes.as_deref());

        tracing::info!(
            "Loaded catalog with {} books and {} characters",
            books.len(),
            characters.len()
        );

        let book_ids = IdGenerator::seeded(books.iter().map(|b| b.id.get()));
        let character_ids = IdGenerator::seeded(characters.iter().map(|c| c.id.get()));
        let (revision, _) = watch::channel(0);

        Ok(Self {
            store,
            books,
            characters,
            book_ids,
            character_ids,
            revision,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // === Change notification ===

    /// Number of committed mutations since the catalog was loaded.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that observes a new revision after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    // === Queries ===

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All characters in insertion order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Characters of a book, in collection order.
    pub fn characters_for_book(&self, book_id: BookId) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| c.book_id == book_id)
            .collect()
    }

    /// Books matching `filter`, in collection order.
    pub fn list_books(&self, filter: &BookFilter) -> Vec<&Book> {
        self.books.iter().filter(|b| filter.matches(b)).collect()
    }

    pub fn wishlist(&self) -> Vec<&Book> {
        self.list_books(&BookFilter::status(ReadStatus::ToRead))
    }

    pub fn read_books(&self) -> Vec<&Book> {
        self.list_books(&BookFilter::status(ReadStatus::Read))
    }

    /// Characters whose book no longer exists.
    ///
    /// Store operations never leave such records behind; they only appear when
    /// the persisted data was edited by something else.
    pub fn find_orphaned_characters(&self) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| self.book(c.book_id).is_none())
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let books_by_status = ReadStatus::ALL
            .iter()
            .map(|&status| {
                let count = self.books.iter().filter(|b| b.has_status(status)).count();
                (status, count)
            })
            .collect();

        CatalogStats {
            total_books: self.books.len(),
            total_characters: self.characters.len(),
            books_by_status,
            books_without_status: self
                .books
                .iter()
                .filter(|b| b.read_status.is_none())
                .count(),
            orphaned_characters: self.find_orphaned_characters().len(),
        }
    }

    // === Book operations ===

    /// Add a book and return it with its newly assigned id.
    pub async fn add_book(&mut self, data: NewBook) -> Result<Book> {
        validate_book(&data.title, &data.author)?;

        let book = data.into_book(BookId::new(self.book_ids.next_id()));
        let mut books = self.books.clone();
        books.push(book.clone());
        self.commit_books(books).await?;

        tracing::debug!("Added book {} ({})", book.id, book.title);
        Ok(book)
    }

    /// Replace the fields of the book with `data.id`.
    ///
    /// # Returns
    /// `true` if the book existed. The collection is persisted either way.
    pub async fn update_book(&mut self, data: Book) -> Result<bool> {
        validate_book(&data.title, &data.author)?;

        let mut books = self.books.clone();
        let found = match books.iter_mut().find(|b| b.id == data.id) {
            Some(existing) => {
                *existing = data;
                true
            }
            None => false,
        };
        self.commit_books(books).await?;

        tracing::debug!("Updated book (found: {})", found);
        Ok(found)
    }

    /// Delete a book together with all of its characters.
    ///
    /// Characters are written first, so an interrupted delete can leave a book
    /// without characters but never characters without a book.
    pub async fn delete_book(&mut self, id: BookId) -> Result<DeleteReport> {
        let characters: Vec<Character> = self
            .characters
            .iter()
            .filter(|c| c.book_id != id)
            .cloned()
            .collect();
        let characters_removed = self.characters.len() - characters.len();
        self.commit_characters(characters).await?;

        let books: Vec<Book> = self.books.iter().filter(|b| b.id != id).cloned().collect();
        let book_removed = books.len() != self.books.len();
        self.commit_books(books).await?;

        tracing::debug!(
            "Deleted book {} (removed: {}, characters removed: {})",
            id,
            book_removed,
            characters_removed
        );
        Ok(DeleteReport {
            book_removed,
            characters_removed,
        })
    }

    // === Character operations ===

    /// Add a character and return it with its newly assigned id.
    ///
    /// The parent book id is taken as given; callers check it against the
    /// books they offered for selection.
    pub async fn add_character(&mut self, data: NewCharacter) -> Result<Character> {
        validate_character(&data.name)?;

        let character = data.into_character(CharacterId::new(self.character_ids.next_id()));
        let mut characters = self.characters.clone();
        characters.push(character.clone());
        self.commit_characters(characters).await?;

        tracing::debug!(
            "Added character {} ({}) to book {}",
            character.id,
            character.name,
            character.book_id
        );
        Ok(character)
    }

    /// Replace the fields of the character with `data.id`.
    ///
    /// The parent book cannot be changed through an edit: the stored `bookId`
    /// is kept.
    ///
    /// # Returns
    /// `true` if the character existed. The collection is persisted either way.
    pub async fn update_character(&mut self, data: Character) -> Result<bool> {
        validate_character(&data.name)?;

        let mut characters = self.characters.clone();
        let found = match characters.iter_mut().find(|c| c.id == data.id) {
            Some(existing) => {
                if existing.book_id != data.book_id {
                    tracing::warn!(
                        "Ignoring book change for character {} ({} -> {})",
                        existing.id,
                        existing.book_id,
                        data.book_id
                    );
                }
                *existing = Character {
                    book_id: existing.book_id,
                    ..data
                };
                true
            }
            None => false,
        };
        self.commit_characters(characters).await?;

        tracing::debug!("Updated character (found: {})", found);
        Ok(found)
    }

    /// Delete a single character.
    ///
    /// # Returns
    /// `true` if the character was deleted, `false` if it didn't exist
    pub async fn delete_character(&mut self, id: CharacterId) -> Result<bool> {
        let characters: Vec<Character> = self
            .characters
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        let removed = characters.len() != self.characters.len();
        self.commit_characters(characters).await?;

        tracing::debug!("Deleted character {} (removed: {})", id, removed);
        Ok(removed)
    }

    // === Maintenance ===

    /// Remove characters whose book no longer exists.
    pub async fn cleanup_orphans(&mut self) -> Result<CleanupReport> {
        let mut report = CleanupReport::new();
        report.removed_characters = self
            .find_orphaned_characters()
            .iter()
            .map(|c| c.id)
            .collect();

        if report.is_clean() {
            return Ok(report);
        }

        let characters: Vec<Character> = self
            .characters
            .iter()
            .filter(|c| !report.removed_characters.contains(&c.id))
            .cloned()
            .collect();
        self.commit_characters(characters).await?;

        tracing::info!(
            "Removed {} orphaned characters",
            report.removed_characters.len()
        );
        Ok(report)
    }

    async fn commit_books(&mut self, books: Vec<Book>) -> Result<()> {
        let bytes = encode_collection(BOOKS_KEY, &books)?;
        self.store.set(BOOKS_KEY, &bytes).await?;
        self.books = books;
        self.bump_revision();
        Ok(())
    }

    async fn commit_characters(&mut self, characters: Vec<Character>) -> Result<()> {
        let bytes = encode_collection(CHARACTERS_KEY, &characters)?;
        self.store.set(CHARACTERS_KEY, &bytes).await?;
        self.characters = characters;
        self.bump_revision();
        Ok(())
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

fn validate_book(title: &str, author: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(CatalogError::InvalidBookData {
            message: "Book title cannot be empty".to_string(),
        });
    }

    if author.trim().is_empty() {
        return Err(CatalogError::InvalidBookData {
            message: "Book author cannot be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_character(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidCharacterData {
            message: "Character name cannot be empty".to_string(),
        });
    }

    Ok(())
}
