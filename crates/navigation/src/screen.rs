use folio_types::{Book, Character};

use crate::view::View;

/// A view together with the entities it presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    Books {
        books: Vec<&'a Book>,
    },
    Wishlist {
        books: Vec<&'a Book>,
    },
    ReadBooks {
        books: Vec<&'a Book>,
    },
    AddBook,
    EditBook {
        book: &'a Book,
    },
    ViewBook {
        book: &'a Book,
        characters: Vec<&'a Character>,
    },
    AddCharacter {
        book: &'a Book,
    },
    EditCharacter {
        character: &'a Character,
        book: Option<&'a Book>,
    },
    ViewCharacter {
        character: &'a Character,
        book: Option<&'a Book>,
    },
}

impl Screen<'_> {
    pub fn view(&self) -> View {
        match self {
            Screen::Books { .. } => View::Books,
            Screen::Wishlist { .. } => View::Wishlist,
            Screen::ReadBooks { .. } => View::ReadBooks,
            Screen::AddBook => View::AddBook,
            Screen::EditBook { .. } => View::EditBook,
            Screen::ViewBook { .. } => View::ViewBook,
            Screen::AddCharacter { .. } => View::AddCharacter,
            Screen::EditCharacter { .. } => View::EditCharacter,
            Screen::ViewCharacter { .. } => View::ViewCharacter,
        }
    }
}

/// Outcome of resolving the navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub screen: Screen<'a>,
    /// The requested view, when its entities could not be found and the book
    /// list is shown instead.
    pub fallback_from: Option<View>,
}

impl Resolved<'_> {
    pub fn is_fallback(&self) -> bool {
        self.fallback_from.is_some()
    }
}
