use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every view the front-ends can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Books,
    Wishlist,
    ReadBooks,
    AddBook,
    EditBook,
    ViewBook,
    AddCharacter,
    EditCharacter,
    ViewCharacter,
}

/// Which selected entity a view needs before it can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    Book,
    Character,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);

impl View {
    pub const ALL: [View; 9] = [
        View::Books,
        View::Wishlist,
        View::ReadBooks,
        View::AddBook,
        View::EditBook,
        View::ViewBook,
        View::AddCharacter,
        View::EditCharacter,
        View::ViewCharacter,
    ];

    pub fn id(self) -> &'static str {
        match self {
            View::Books => "books",
            View::Wishlist => "wishlist",
            View::ReadBooks => "readBooks",
            View::AddBook => "addBook",
            View::EditBook => "editBook",
            View::ViewBook => "viewBook",
            View::AddCharacter => "addCharacter",
            View::EditCharacter => "editCharacter",
            View::ViewCharacter => "viewCharacter",
        }
    }

    pub fn required_selection(self) -> Selection {
        match self {
            View::Books | View::Wishlist | View::ReadBooks | View::AddBook => Selection::None,
            View::EditBook | View::ViewBook | View::AddCharacter => Selection::Book,
            View::EditCharacter | View::ViewCharacter => Selection::Character,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = UnknownView;

    /// Accepts the view id in any case, with optional `-`/`_` separators
    /// (`viewBook`, `view-book`, `VIEW_BOOK`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        View::ALL
            .into_iter()
            .find(|view| view.id().to_lowercase() == wanted)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
