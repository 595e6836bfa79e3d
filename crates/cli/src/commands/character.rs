//! Character command handlers.

use eyre::Result;
use folio_navigation::{Navigator, View};
use folio_types::{BookId, CharacterId};

use crate::cli::{CharacterCommands, CharacterFields};
use crate::config::Config;
use crate::render::render;
use crate::utils::{AppCatalog, confirm_delete};

pub async fn handle_character_command(
    cmd: CharacterCommands,
    catalog: &mut AppCatalog,
    config: &Config,
) -> Result<()> {
    match cmd {
        CharacterCommands::Show { id } => handle_show_character(id, catalog, config),
        CharacterCommands::Add { book, fields } => handle_add_character(book, fields, catalog).await,
        CharacterCommands::Edit { id, fields } => handle_edit_character(id, fields, catalog).await,
        CharacterCommands::Remove { id, force } => {
            handle_remove_character(id, force, catalog, config).await
        }
    }
}

fn handle_show_character(id: CharacterId, catalog: &AppCatalog, config: &Config) -> Result<()> {
    let mut navigator = Navigator::new();
    navigator.navigate(View::ViewCharacter, None, Some(id));
    print!("{}", render(&navigator.resolve(catalog), &config.display));
    Ok(())
}

async fn handle_add_character(
    book_id: BookId,
    fields: CharacterFields,
    catalog: &mut AppCatalog,
) -> Result<()> {
    let new_character = fields.into_new_character(book_id, catalog)?;
    let character = catalog.add_character(new_character).await?;
    println!(
        "✅ Added character [{}] {} to book [{}]",
        character.id, character.name, character.book_id
    );
    Ok(())
}

async fn handle_edit_character(
    id: CharacterId,
    fields: CharacterFields,
    catalog: &mut AppCatalog,
) -> Result<()> {
    let Some(mut character) = catalog.character(id).cloned() else {
        println!("❌ Character not found: {}", id);
        return Ok(());
    };

    fields.apply_to(&mut character)?;
    catalog.update_character(character).await?;
    println!("✅ Updated character [{}]", id);
    Ok(())
}

async fn handle_remove_character(
    id: CharacterId,
    force: bool,
    catalog: &mut AppCatalog,
    config: &Config,
) -> Result<()> {
    let Some(character) = catalog.character(id) else {
        println!("❌ Character not found: {}", id);
        return Ok(());
    };

    let question = format!("Remove character '{}'?", character.name);
    if !confirm_delete(&question, force, config)? {
        println!("❌ Cancelled");
        return Ok(());
    }

    catalog.delete_character(id).await?;
    println!("✅ Removed character [{}]", id);
    Ok(())
}
