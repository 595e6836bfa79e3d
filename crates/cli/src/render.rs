//! Text presentation of resolved screens.

use std::fmt;

use folio_navigation::{Resolved, Screen};
use folio_types::{Book, Character, ReadStatus};

use crate::config::DisplayConfig;

pub fn render(resolved: &Resolved<'_>, display: &DisplayConfig) -> String {
    ScreenText { resolved, display }.to_string()
}

/// A resolved screen paired with the display settings it is shown with.
struct ScreenText<'r, 'a> {
    resolved: &'r Resolved<'a>,
    display: &'r DisplayConfig,
}

impl fmt::Display for ScreenText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = self.display;

        if let Some(requested) = self.resolved.fallback_from {
            writeln!(
                f,
                "⚠️  Nothing to show for '{}', showing all books instead",
                requested
            )?;
        }

        match &self.resolved.screen {
            Screen::Books { books } => write_book_list(f, "Library", books),
            Screen::Wishlist { books } => write_book_list(f, "Wishlist", books),
            Screen::ReadBooks { books } => write_book_list(f, "Read", books),
            Screen::AddBook => {
                writeln!(f, "📕 New book")?;
                writeln!(
                    f,
                    "   add-book title=\"...\" author=\"...\" [status=...] [cover=URL] [notes=\"...\"]"
                )?;
                writeln!(f, "   Statuses: {}", status_choices())
            }
            Screen::EditBook { book } => {
                writeln!(f, "✏️  Editing book [{}]", book.id)?;
                write_book_fields(f, book, true)?;
                writeln!(f, "   edit-book field=value ... (title, author, status, cover, notes)")
            }
            Screen::ViewBook { book, characters } => {
                writeln!(f, "📖 {}", book.title)?;
                writeln!(f, "{}", "=".repeat(50))?;
                write_book_fields(f, book, display.show_notes)?;
                if display.show_images {
                    if let Some(cover) = book.cover_image() {
                        writeln!(f, "Cover: {}", cover)?;
                    }
                }
                writeln!(f)?;
                if characters.is_empty() {
                    return writeln!(f, "No characters yet");
                }
                writeln!(f, "Characters ({}):", characters.len())?;
                for character in characters {
                    writeln!(f, "  [{}] {}", character.id, character.name)?;
                }
                Ok(())
            }
            Screen::AddCharacter { book } => {
                writeln!(f, "🧑 New character for \"{}\" [{}]", book.title, book.id)?;
                writeln!(
                    f,
                    "   add-character name=\"...\" [origin=...] [family=...] [summary=...] [backstory=...] [image=URL]"
                )
            }
            Screen::EditCharacter { character, book } => {
                writeln!(f, "✏️  Editing character [{}]", character.id)?;
                write_character(f, character, *book, display)?;
                writeln!(
                    f,
                    "   edit-character field=value ... (name, origin, family, summary, backstory, image)"
                )
            }
            Screen::ViewCharacter { character, book } => {
                writeln!(f, "🧑 {}", character.name)?;
                writeln!(f, "{}", "=".repeat(50))?;
                write_character(f, character, *book, display)
            }
        }
    }
}

fn write_book_list(f: &mut fmt::Formatter<'_>, heading: &str, books: &[&Book]) -> fmt::Result {
    if books.is_empty() {
        return writeln!(f, "{}: no books", heading);
    }

    writeln!(f, "{} ({} books):", heading, books.len())?;
    for book in books {
        write!(f, "  [{}] {} by {}", book.id, book.title, book.author)?;
        match book.read_status {
            Some(status) => writeln!(f, " ({})", status)?,
            None => writeln!(f)?,
        }
    }
    Ok(())
}

fn write_book_fields(f: &mut fmt::Formatter<'_>, book: &Book, show_notes: bool) -> fmt::Result {
    writeln!(f, "Title: {}", book.title)?;
    writeln!(f, "Author: {}", book.author)?;
    writeln!(
        f,
        "Status: {}",
        book.read_status
            .map(ReadStatus::label)
            .unwrap_or("(not set)")
    )?;
    if show_notes {
        if let Some(notes) = book.notes() {
            writeln!(f, "Notes: {}", notes)?;
        }
    }
    Ok(())
}

fn write_character(
    f: &mut fmt::Formatter<'_>,
    character: &Character,
    book: Option<&Book>,
    display: &DisplayConfig,
) -> fmt::Result {
    writeln!(f, "Name: {}", character.name)?;
    match book {
        Some(book) => writeln!(f, "Book: {} [{}]", book.title, book.id)?,
        None => writeln!(f, "Book: (missing) [{}]", character.book_id)?,
    }
    for (label, value) in character.attributes() {
        writeln!(f, "{}: {}", label, value)?;
    }
    if display.show_images {
        if let Some(image) = character.image() {
            writeln!(f, "Image: {}", image)?;
        }
    }
    Ok(())
}

fn status_choices() -> String {
    ReadStatus::ALL.map(ReadStatus::label).join(", ")
}
