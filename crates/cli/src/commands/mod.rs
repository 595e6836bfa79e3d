pub mod book;
pub mod browse;
pub mod character;
pub mod config;
pub mod shell;

pub use book::handle_book_command;
pub use browse::{handle_cleanup, handle_stats, handle_view};
pub use character::handle_character_command;
pub use config::handle_config_command;
pub use shell::run_shell;
