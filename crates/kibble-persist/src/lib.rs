//! # Kibble Persist
//!
//! Disk persistence for the Kibble virtual pet game.
//!
//! This crate keeps game state on disk as JSON:
//! - Saved games, one file per pet under `SavedFiles/SavedGames/`
//! - Game settings in a single `game_settings.json` file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod settings_store;
pub mod store;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::settings_store::*;
    pub use crate::store::*;
}

pub use prelude::*;
