//! Interactive session: navigate between views and edit the catalog in place.

use eyre::{Result, bail, eyre};
use folio_navigation::{Navigator, View};
use folio_types::{BookId, CharacterId};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::watch;

use crate::cli::{BookFields, CharacterFields};
use crate::commands::browse::format_stats;
use crate::config::Config;
use crate::forms::{split_pairs, split_words};
use crate::render::render;
use crate::utils::{AppCatalog, confirm_delete};

/// What the shell loop should do after a command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub message: Option<String>,
    pub quit: bool,
}

impl Outcome {
    fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            quit: false,
        }
    }

    fn quiet() -> Self {
        Self::default()
    }
}

/// Navigation state of one interactive session.
///
/// The current view is re-rendered whenever navigation moves or the catalog
/// reports a new revision.
pub struct Session {
    navigator: Navigator,
    changes: watch::Receiver<u64>,
    last_shown: Option<Navigator>,
}

impl Session {
    pub fn new(catalog: &AppCatalog) -> Self {
        Self {
            navigator: Navigator::new(),
            changes: catalog.subscribe(),
            last_shown: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The current screen, if anything changed since it was last shown.
    pub fn render_if_changed(&mut self, catalog: &AppCatalog, config: &Config) -> Option<String> {
        let catalog_changed = self.changes.has_changed().unwrap_or(false);
        if !catalog_changed && self.last_shown.as_ref() == Some(&self.navigator) {
            return None;
        }

        self.changes.borrow_and_update();
        self.last_shown = Some(self.navigator.clone());
        Some(render(&self.navigator.resolve(catalog), &config.display))
    }

    pub async fn execute(
        &mut self,
        line: &str,
        catalog: &mut AppCatalog,
        config: &Config,
    ) -> Result<Outcome> {
        let words = split_words(line)?;
        let Some((command, args)) = words.split_first() else {
            return Ok(Outcome::quiet());
        };
        let (positional, pairs) = split_pairs(args);

        match command.as_str() {
            "quit" | "exit" | "q" => Ok(Outcome {
                message: Some("👋 Goodbye!".to_string()),
                quit: true,
            }),
            "help" | "h" => Ok(Outcome::message(HELP)),
            "clear" | "cls" => {
                // Force the current view to be drawn again below the cleared screen
                self.last_shown = None;
                Ok(Outcome::message("\x1B[2J\x1B[1;1H"))
            }
            "books" | "ls" => self.go(View::Books, None, None),
            "wishlist" => self.go(View::Wishlist, None, None),
            "read" => self.go(View::ReadBooks, None, None),
            "stats" => Ok(Outcome::message(format_stats(&catalog.stats()))),
            "go" => {
                let view = positional
                    .first()
                    .ok_or_else(|| eyre!("Usage: go <view> [book-id] [character-id]"))?
                    .parse::<View>()?;
                let book = parse_id::<BookId>(positional.get(1))?;
                let character = parse_id::<CharacterId>(positional.get(2))?;
                self.go(view, book, character)
            }
            "open" => {
                let book = self.book_arg(&positional)?;
                self.go(View::ViewBook, Some(book), None)
            }
            "char" => {
                let character = self.character_arg(&positional)?;
                let book = self.navigator.selected_book();
                self.go(View::ViewCharacter, book, Some(character))
            }
            "new-book" => self.go(View::AddBook, None, None),
            "add-book" => {
                let new_book = BookFields::from_pairs(&pairs)?.into_new_book()?;
                let book = catalog.add_book(new_book).await?;
                self.navigator.navigate(View::ViewBook, Some(book.id), None);
                Ok(Outcome::message(format!("✅ Added book [{}] {}", book.id, book.title)))
            }
            "edit-book" => {
                let id = self.book_arg(&positional)?;
                if pairs.is_empty() {
                    return self.go(View::EditBook, Some(id), None);
                }
                let Some(mut book) = catalog.book(id).cloned() else {
                    bail!("Book not found: {}", id);
                };
                BookFields::from_pairs(&pairs)?.apply_to(&mut book)?;
                catalog.update_book(book).await?;
                self.navigator.navigate(View::ViewBook, Some(id), None);
                Ok(Outcome::message(format!("✅ Updated book [{}]", id)))
            }
            "delete-book" => {
                let id = self.book_arg(&positional)?;
                let Some(book) = catalog.book(id) else {
                    bail!("Book not found: {}", id);
                };
                let question = format!(
                    "Remove '{}' and its {} character(s)?",
                    book.title,
                    catalog.characters_for_book(id).len()
                );
                if !confirm_delete(&question, false, config)? {
                    return Ok(Outcome::message("❌ Cancelled"));
                }
                let report = catalog.delete_book(id).await?;
                self.navigator.navigate(View::Books, None, None);
                Ok(Outcome::message(format!(
                    "✅ Removed book [{}] and {} character(s)",
                    id, report.characters_removed
                )))
            }
            "new-character" => {
                let book = self.book_arg(&positional)?;
                self.go(View::AddCharacter, Some(book), None)
            }
            "add-character" => {
                let (fields, book) = CharacterFields::from_pairs(&pairs)?;
                let book_id = match book {
                    Some(book) => book,
                    None => self.book_arg(&positional)?,
                };
                let new_character = fields.into_new_character(book_id, catalog)?;
                let character = catalog.add_character(new_character).await?;
                self.navigator
                    .navigate(View::ViewCharacter, Some(book_id), Some(character.id));
                Ok(Outcome::message(format!(
                    "✅ Added character [{}] {}",
                    character.id, character.name
                )))
            }
            "edit-character" => {
                let id = self.character_arg(&positional)?;
                if pairs.is_empty() {
                    let book = self.navigator.selected_book();
                    return self.go(View::EditCharacter, book, Some(id));
                }
                let Some(mut character) = catalog.character(id).cloned() else {
                    bail!("Character not found: {}", id);
                };
                let (fields, book) = CharacterFields::from_pairs(&pairs)?;
                if book.is_some_and(|book| book != character.book_id) {
                    bail!("A character cannot be moved to another book");
                }
                fields.apply_to(&mut character)?;
                let book_id = character.book_id;
                catalog.update_character(character).await?;
                self.navigator
                    .navigate(View::ViewCharacter, Some(book_id), Some(id));
                Ok(Outcome::message(format!("✅ Updated character [{}]", id)))
            }
            "delete-character" => {
                let id = self.character_arg(&positional)?;
                let Some(character) = catalog.character(id) else {
                    bail!("Character not found: {}", id);
                };
                let book_id = character.book_id;
                let question = format!("Remove character '{}'?", character.name);
                if !confirm_delete(&question, false, config)? {
                    return Ok(Outcome::message("❌ Cancelled"));
                }
                catalog.delete_character(id).await?;
                self.navigator.navigate(View::ViewBook, Some(book_id), None);
                Ok(Outcome::message(format!("✅ Removed character [{}]", id)))
            }
            other => Ok(Outcome::message(format!(
                "❓ Unknown command: '{}'. Type 'help' for available commands.",
                other
            ))),
        }
    }

    fn go(
        &mut self,
        view: View,
        book: Option<BookId>,
        character: Option<CharacterId>,
    ) -> Result<Outcome> {
        self.navigator.navigate(view, book, character);
        Ok(Outcome::quiet())
    }

    /// Book id given on the line, or the one currently selected.
    fn book_arg(&self, positional: &[String]) -> Result<BookId> {
        parse_id::<BookId>(positional.first())?
            .or(self.navigator.selected_book())
            .ok_or_else(|| eyre!("No book selected; pass a book id"))
    }

    /// Character id given on the line, or the one currently selected.
    fn character_arg(&self, positional: &[String]) -> Result<CharacterId> {
        parse_id::<CharacterId>(positional.first())?
            .or(self.navigator.selected_character())
            .ok_or_else(|| eyre!("No character selected; pass a character id"))
    }
}

fn parse_id<T: std::str::FromStr>(value: Option<&String>) -> Result<Option<T>> {
    value
        .map(|v| v.parse::<T>().map_err(|_| eyre!("Invalid id: {}", v)))
        .transpose()
}

const HELP: &str = "\
Views:
  books | wishlist | read          Show a book list
  open [book-id]                   Show a book and its characters
  char [character-id]              Show a character
  go <view> [book-id] [char-id]    Show any view by id (e.g. go editBook 17)
Books:
  new-book                         Show the new book form
  add-book title=... author=... [status=...] [cover=...] [notes=...]
  edit-book [book-id] [field=value ...]
  delete-book [book-id]
Characters:
  new-character [book-id]          Show the new character form
  add-character [book=id] name=... [origin=...] [family=...] [summary=...] [backstory=...] [image=...]
  edit-character [char-id] [field=value ...]
  delete-character [char-id]
Other:
  stats | clear | help | quit
Ids default to the book or character currently shown. Quote values with spaces.";

/// Run the interactive shell until the user quits.
pub async fn run_shell(catalog: &mut AppCatalog, config: &Config) -> Result<()> {
    println!("Folio interactive session");
    println!("Type 'help' for available commands, 'quit' to exit.");
    println!();

    let mut session = Session::new(catalog);
    let mut rl = DefaultEditor::new()?;

    loop {
        if let Some(screen) = session.render_if_changed(catalog, config) {
            println!("{}", screen);
        }

        let prompt = format!("folio:{}> ", session.navigator().current_view());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match session.execute(line, catalog, config).await {
                    Ok(outcome) => {
                        if let Some(message) = outcome.message {
                            println!("{}", message);
                        }
                        if outcome.quit {
                            break;
                        }
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("👋 Goodbye!");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
