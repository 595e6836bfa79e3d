mod cli;
mod commands;
mod config;
mod forms;
mod render;
mod utils;

use clap::Parser;
use eyre::Result;
use folio_navigation::View;

use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_book_command, handle_character_command, handle_cleanup, handle_config_command,
    handle_stats, handle_view, run_shell,
};
use crate::config::Config;
use crate::utils::open_catalog;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configuration commands never touch the catalog
    let command = match cli.command {
        Commands::Config { command } => return handle_config_command(command).await,
        command => command,
    };

    let config = Config::load().await?;
    let mut catalog = open_catalog(cli.data_dir, cli.ephemeral, &config).await?;

    match command {
        Commands::Book { command } => handle_book_command(command, &mut catalog, &config).await,
        Commands::Character { command } => {
            handle_character_command(command, &mut catalog, &config).await
        }
        Commands::Wishlist => handle_view(View::Wishlist, None, None, &catalog, &config),
        Commands::Read => handle_view(View::ReadBooks, None, None, &catalog, &config),
        Commands::View {
            view,
            book,
            character,
        } => handle_view(view, book, character, &catalog, &config),
        Commands::Stats => handle_stats(&catalog),
        Commands::Cleanup => handle_cleanup(&mut catalog).await,
        Commands::Shell => run_shell(&mut catalog, &config).await,
        Commands::Config { .. } => Ok(()),
    }
}
