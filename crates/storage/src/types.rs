//! Supporting types for catalog queries and maintenance.

use folio_types::{Book, CharacterId, ReadStatus};

/// Filter criteria for listing books.
///
/// Empty criteria match everything. Text matches are case-insensitive
/// substring matches.
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    pub statuses: Vec<ReadStatus>,
    pub title_contains: Option<String>,
    pub author_contains: Option<String>,
}

impl BookFilter {
    pub fn status(status: ReadStatus) -> Self {
        Self {
            statuses: vec![status],
            ..Default::default()
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        if !self.statuses.is_empty()
            && !book
                .read_status
                .is_some_and(|status| self.statuses.contains(&status))
        {
            return false;
        }

        if let Some(ref title) = self.title_contains {
            if !contains_ignore_case(&book.title, title) {
                return false;
            }
        }

        if let Some(ref author) = self.author_contains {
            if !contains_ignore_case(&book.author, author) {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Outcome of deleting a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub book_removed: bool,
    pub characters_removed: usize,
}

/// Report from cleanup operations.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed_characters: Vec<CharacterId>,
}

impl CleanupReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing needed fixing.
    pub fn is_clean(&self) -> bool {
        self.removed_characters.is_empty()
    }
}

/// Catalog statistics.
#[derive(Debug)]
pub struct CatalogStats {
    pub total_books: usize,
    pub total_characters: usize,
    pub books_by_status: Vec<(ReadStatus, usize)>,
    pub books_without_status: usize,
    pub orphaned_characters: usize,
}
