//! Shared data model for the Folio library catalog.
//!
//! Books and characters are stored as flat camelCase JSON records. Readers are
//! lenient: absent optional fields default to empty text and unknown fields are
//! ignored, so records written by older or newer versions still load.

pub mod book;
pub mod character;
pub mod id;
pub mod status;
mod text;

pub use book::{Book, NewBook};
pub use character::{Character, NewCharacter};
pub use id::{BookId, CharacterId};
pub use status::ReadStatus;
