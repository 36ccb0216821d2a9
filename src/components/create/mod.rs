//! Tile Acquisition Modals
//!
//! One modal per acquisition flow; each produces a single tile on success and
//! hands it to the composer.

pub mod image_modal;
pub mod music_modal;
pub mod workout_modal;

pub use image_modal::ImageTileModal;
pub use music_modal::MusicTileModal;
pub use workout_modal::WorkoutTileModal;
