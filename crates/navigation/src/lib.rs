//! View routing for the Folio front-ends.
//!
//! A [`Navigator`] holds the current [`View`] and the selected book and
//! character ids. Resolving it against a catalog yields the [`Screen`] to
//! present, falling back to the book list whenever a view's entities are gone.

pub mod navigator;
pub mod screen;
pub mod view;

pub use navigator::Navigator;
pub use screen::{Resolved, Screen};
pub use view::{Selection, UnknownView, View};
