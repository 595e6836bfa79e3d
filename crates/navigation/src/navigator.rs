use folio_storage::{Catalog, KeyValueStore};
use folio_types::{Book, BookId, Character, CharacterId};

use crate::screen::{Resolved, Screen};
use crate::view::{Selection, View};

/// Current view plus the book and character it was opened for.
///
/// Transitions never fail and never validate: whether the selection still
/// exists is decided by [`Navigator::resolve`] at presentation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    view: View,
    book: Option<BookId>,
    character: Option<CharacterId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn selected_book(&self) -> Option<BookId> {
        self.book
    }

    pub fn selected_character(&self) -> Option<CharacterId> {
        self.character
    }

    /// Switch to `view`. Both selections are replaced, so nothing carries over
    /// from the previous view.
    pub fn navigate(
        &mut self,
        view: View,
        book: Option<BookId>,
        character: Option<CharacterId>,
    ) {
        tracing::debug!(
            "Navigate to {} (book: {:?}, character: {:?})",
            view,
            book,
            character
        );
        self.view = view;
        self.book = book;
        self.character = character;
    }

    /// Look up the entities the current view needs.
    ///
    /// Falls back to the book list when the selected book or character is
    /// missing, so stale ids never reach the presentation layer.
    pub fn resolve<'a, S: KeyValueStore>(&self, catalog: &'a Catalog<S>) -> Resolved<'a> {
        match self.resolve_screen(catalog) {
            Some(screen) => Resolved {
                screen,
                fallback_from: None,
            },
            None => {
                tracing::debug!(
                    "Cannot show {} (book: {:?}, character: {:?}), showing books",
                    self.view,
                    self.book,
                    self.character
                );
                Resolved {
                    screen: Screen::Books {
                        books: catalog.books().iter().collect(),
                    },
                    fallback_from: Some(self.view),
                }
            }
        }
    }

    fn resolve_screen<'a, S: KeyValueStore>(&self, catalog: &'a Catalog<S>) -> Option<Screen<'a>> {
        let selected_book = || self.book.and_then(|id| catalog.book(id));

        let target = match self.view.required_selection() {
            Selection::None => Target::Nothing,
            Selection::Book => Target::Book(selected_book()?),
            Selection::Character => {
                let character = self.character.and_then(|id| catalog.character(id))?;
                // The owning book wins over whatever book was selected
                let book = catalog.book(character.book_id).or_else(selected_book);
                Target::Character(character, book)
            }
        };

        let screen = match (self.view, target) {
            (View::Books, _) => Screen::Books {
                books: catalog.books().iter().collect(),
            },
            (View::Wishlist, _) => Screen::Wishlist {
                books: catalog.wishlist(),
            },
            (View::ReadBooks, _) => Screen::ReadBooks {
                books: catalog.read_books(),
            },
            (View::AddBook, _) => Screen::AddBook,
            (View::EditBook, Target::Book(book)) => Screen::EditBook { book },
            (View::ViewBook, Target::Book(book)) => Screen::ViewBook {
                book,
                characters: catalog.characters_for_book(book.id),
            },
            (View::AddCharacter, Target::Book(book)) => Screen::AddCharacter { book },
            (View::EditCharacter, Target::Character(character, book)) => {
                Screen::EditCharacter { character, book }
            }
            (View::ViewCharacter, Target::Character(character, book)) => {
                Screen::ViewCharacter { character, book }
            }
            _ => return None,
        };

        Some(screen)
    }
}

/// The entity a view's [`Selection`] resolved to.
enum Target<'a> {
    Nothing,
    Book(&'a Book),
    Character(&'a Character, Option<&'a Book>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::MemoryStore;
    use folio_types::{NewBook, NewCharacter, ReadStatus};

    async fn sample_catalog() -> (Catalog<MemoryStore>, Book, Character) {
        let mut catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        let dune = catalog
            .add_book(NewBook::new("Dune", "Herbert").with_status(ReadStatus::ToRead))
            .await
            .unwrap();
        catalog
            .add_book(NewBook::new("Emma", "Austen").with_status(ReadStatus::Read))
            .await
            .unwrap();
        let paul = catalog
            .add_character(NewCharacter::new(dune.id, "Paul"))
            .await
            .unwrap();
        (catalog, dune, paul)
    }

    #[test]
    fn starts_on_book_list() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current_view(), View::Books);
        assert_eq!(navigator.selected_book(), None);
        assert_eq!(navigator.selected_character(), None);
    }

    #[test]
    fn navigate_resets_both_selections() {
        let mut navigator = Navigator::new();
        navigator.navigate(View::ViewCharacter, Some(BookId(1)), Some(CharacterId(2)));
        navigator.navigate(View::ViewBook, Some(BookId(3)), None);

        assert_eq!(navigator.current_view(), View::ViewBook);
        assert_eq!(navigator.selected_book(), Some(BookId(3)));
        assert_eq!(navigator.selected_character(), None);

        navigator.navigate(View::Books, None, None);
        assert_eq!(navigator, Navigator::new());
    }

    #[tokio::test]
    async fn view_book_lists_its_characters() {
        let (catalog, dune, paul) = sample_catalog().await;
        let mut navigator = Navigator::new();
        navigator.navigate(View::ViewBook, Some(dune.id), None);

        let resolved = navigator.resolve(&catalog);

        assert!(!resolved.is_fallback());
        assert_eq!(
            resolved.screen,
            Screen::ViewBook {
                book: &dune,
                characters: vec![&paul],
            }
        );
    }

    #[tokio::test]
    async fn unknown_book_falls_back_to_book_list() {
        let (catalog, _, _) = sample_catalog().await;
        let mut navigator = Navigator::new();
        navigator.navigate(View::ViewBook, Some(BookId(1)), None);

        let resolved = navigator.resolve(&catalog);

        assert_eq!(resolved.screen.view(), View::Books);
        assert_eq!(resolved.fallback_from, Some(View::ViewBook));
    }

    #[tokio::test]
    async fn missing_selection_falls_back_per_view() {
        let (catalog, _, _) = sample_catalog().await;
        let mut navigator = Navigator::new();

        for view in [View::EditBook, View::AddCharacter, View::EditCharacter, View::ViewCharacter] {
            navigator.navigate(view, None, None);
            assert_eq!(navigator.resolve(&catalog).fallback_from, Some(view));
        }

        navigator.navigate(View::AddBook, None, None);
        let resolved = navigator.resolve(&catalog);
        assert_eq!(resolved.screen, Screen::AddBook);
        assert!(!resolved.is_fallback());
    }

    #[tokio::test]
    async fn deleted_book_invalidates_open_view() {
        let (mut catalog, dune, paul) = sample_catalog().await;
        let mut navigator = Navigator::new();
        navigator.navigate(View::ViewCharacter, Some(dune.id), Some(paul.id));
        assert_eq!(navigator.resolve(&catalog).screen.view(), View::ViewCharacter);

        catalog.delete_book(dune.id).await.unwrap();

        let resolved = navigator.resolve(&catalog);
        assert_eq!(resolved.fallback_from, Some(View::ViewCharacter));
        assert_eq!(
            resolved.screen,
            Screen::Books {
                books: catalog.books().iter().collect()
            }
        );
    }

    #[tokio::test]
    async fn character_views_resolve_owning_book() {
        let (catalog, dune, paul) = sample_catalog().await;
        let mut navigator = Navigator::new();
        navigator.navigate(View::EditCharacter, None, Some(paul.id));

        assert_eq!(
            navigator.resolve(&catalog).screen,
            Screen::EditCharacter {
                character: &paul,
                book: Some(&dune),
            }
        );
    }

    #[tokio::test]
    async fn status_lists_filter_books() {
        let (catalog, dune, _) = sample_catalog().await;
        let mut navigator = Navigator::new();

        navigator.navigate(View::Wishlist, None, None);
        assert_eq!(
            navigator.resolve(&catalog).screen,
            Screen::Wishlist { books: vec![&dune] }
        );

        navigator.navigate(View::ReadBooks, None, None);
        match navigator.resolve(&catalog).screen {
            Screen::ReadBooks { books } => {
                assert_eq!(books.len(), 1);
                assert_eq!(books[0].title, "Emma");
            }
            other => panic!("unexpected screen: {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_view_resolves_when_its_selection_exists() {
        let (catalog, dune, paul) = sample_catalog().await;
        let mut navigator = Navigator::new();

        for view in View::ALL {
            navigator.navigate(view, Some(dune.id), Some(paul.id));
            let resolved = navigator.resolve(&catalog);
            assert!(!resolved.is_fallback(), "{view} fell back");
            assert_eq!(resolved.screen.view(), view);

            navigator.navigate(view, None, None);
            let resolved = navigator.resolve(&catalog);
            assert_eq!(
                resolved.is_fallback(),
                view.required_selection() != Selection::None,
                "{view} without a selection"
            );
        }
    }
}
