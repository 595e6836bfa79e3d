//! Book command handlers.

use eyre::Result;
use folio_navigation::{Navigator, View};
use folio_storage::BookFilter;
use folio_types::{BookId, ReadStatus};

use crate::cli::{BookCommands, BookFields};
use crate::config::Config;
use crate::render::render;
use crate::utils::{AppCatalog, confirm_delete};

pub async fn handle_book_command(
    cmd: BookCommands,
    catalog: &mut AppCatalog,
    config: &Config,
) -> Result<()> {
    match cmd {
        BookCommands::List {
            status,
            title,
            author,
        } => handle_list_books(status, title, author, catalog),
        BookCommands::Show { id } => handle_show_book(id, catalog, config),
        BookCommands::Add { fields } => handle_add_book(fields, catalog).await,
        BookCommands::Edit { id, fields } => handle_edit_book(id, fields, catalog).await,
        BookCommands::Remove { id, force } => handle_remove_book(id, force, catalog, config).await,
    }
}

fn handle_list_books(
    status: Option<ReadStatus>,
    title: Option<String>,
    author: Option<String>,
    catalog: &AppCatalog,
) -> Result<()> {
    let filter = BookFilter {
        statuses: status.into_iter().collect(),
        title_contains: title,
        author_contains: author,
    };

    let books = catalog.list_books(&filter);
    if books.is_empty() {
        println!("No matching books");
        return Ok(());
    }

    println!("Books ({}):", books.len());
    for book in books {
        let status = book
            .read_status
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        println!("  [{}] {} by {}{}", book.id, book.title, book.author, status);
    }
    Ok(())
}

fn handle_show_book(id: BookId, catalog: &AppCatalog, config: &Config) -> Result<()> {
    let mut navigator = Navigator::new();
    navigator.navigate(View::ViewBook, Some(id), None);
    print!("{}", render(&navigator.resolve(catalog), &config.display));
    Ok(())
}

async fn handle_add_book(fields: BookFields, catalog: &mut AppCatalog) -> Result<()> {
    let book = catalog.add_book(fields.into_new_book()?).await?;
    println!("✅ Added book [{}] {}", book.id, book.title);
    Ok(())
}

async fn handle_edit_book(id: BookId, fields: BookFields, catalog: &mut AppCatalog) -> Result<()> {
    let Some(mut book) = catalog.book(id).cloned() else {
        println!("❌ Book not found: {}", id);
        return Ok(());
    };

    fields.apply_to(&mut book)?;
    catalog.update_book(book).await?;
    println!("✅ Updated book [{}]", id);
    Ok(())
}

async fn handle_remove_book(
    id: BookId,
    force: bool,
    catalog: &mut AppCatalog,
    config: &Config,
) -> Result<()> {
    let Some(book) = catalog.book(id) else {
        println!("❌ Book not found: {}", id);
        return Ok(());
    };

    let character_count = catalog.characters_for_book(id).len();
    let question = format!(
        "Remove '{}' and its {} character(s)?",
        book.title, character_count
    );
    if !confirm_delete(&question, force, config)? {
        println!("❌ Cancelled");
        return Ok(());
    }

    let report = catalog.delete_book(id).await?;
    println!(
        "✅ Removed book [{}] and {} character(s)",
        id, report.characters_removed
    );
    Ok(())
}
