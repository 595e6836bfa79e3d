use std::path::PathBuf;

use folio_navigation::View;
use folio_types::{BookId, CharacterId, ReadStatus};

#[derive(clap::Parser, Debug)]
#[command(name = "folio", about = "Personal library catalog for books and their characters")]
pub struct Cli {
    /// Directory holding the catalog (overrides `storage.path`)
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep the catalog in memory only; nothing is written to disk
    #[clap(long, global = true)]
    pub ephemeral: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Manage books
    Book {
        #[clap(subcommand)]
        command: BookCommands,
    },
    /// Manage characters
    Character {
        #[clap(subcommand)]
        command: CharacterCommands,
    },
    /// Show books marked "To Read"
    Wishlist,
    /// Show books marked "Read"
    Read,
    /// Render any view by its id (books, viewBook, editCharacter, ...)
    View {
        view: View,
        #[clap(long)]
        book: Option<BookId>,
        #[clap(long)]
        character: Option<CharacterId>,
    },
    /// Show catalog statistics
    Stats,
    /// Remove characters whose book no longer exists
    Cleanup,
    /// Start an interactive session
    Shell,
    /// Manage configuration
    Config {
        #[clap(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct BookFields {
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long)]
    pub author: Option<String>,
    /// Cover image URL
    #[clap(long)]
    pub cover: Option<String>,
    /// Reading status ("To Read", reading, read, on-hold, dnf)
    #[clap(long)]
    pub status: Option<ReadStatus>,
    /// Remove the reading status
    #[clap(long, conflicts_with = "status")]
    pub clear_status: bool,
    #[clap(long)]
    pub notes: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
pub enum BookCommands {
    /// List books, optionally filtered
    List {
        #[clap(long)]
        status: Option<ReadStatus>,
        /// Only titles containing this text
        #[clap(long)]
        title: Option<String>,
        /// Only authors containing this text
        #[clap(long)]
        author: Option<String>,
    },
    /// Show a book and its characters
    Show { id: BookId },
    /// Add a book
    Add {
        #[clap(flatten)]
        fields: BookFields,
    },
    /// Edit a book
    Edit {
        id: BookId,
        #[clap(flatten)]
        fields: BookFields,
    },
    /// Remove a book and all of its characters
    Remove {
        id: BookId,
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct CharacterFields {
    #[clap(long)]
    pub name: Option<String>,
    /// Portrait image URL
    #[clap(long)]
    pub image: Option<String>,
    #[clap(long)]
    pub origin: Option<String>,
    #[clap(long)]
    pub family: Option<String>,
    #[clap(long)]
    pub summary: Option<String>,
    #[clap(long)]
    pub backstory: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
pub enum CharacterCommands {
    /// Show a character
    Show { id: CharacterId },
    /// Add a character to a book
    Add {
        /// Book the character belongs to
        #[clap(long)]
        book: BookId,
        #[clap(flatten)]
        fields: CharacterFields,
    },
    /// Edit a character
    Edit {
        id: CharacterId,
        #[clap(flatten)]
        fields: CharacterFields,
    },
    /// Remove a character
    Remove {
        id: CharacterId,
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
    /// Show all configuration
    Show,
    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
}
