//! UI Components
//!
//! Reusable Leptos components for the journal client.

pub mod create;
pub mod entry_card;
pub mod fab;
pub mod loading;
pub mod nav;
pub mod tile;
pub mod toast;

pub use entry_card::EntryCard;
pub use fab::Fab;
pub use loading::InlineLoading;
pub use nav::Nav;
pub use tile::{PlaceholderTile, TileView};
pub use toast::Toast;
