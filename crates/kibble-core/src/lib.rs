//! # Kibble Core
//!
//! Core simulation for the Kibble virtual pet game.
//!
//! This crate provides the whole pet-care model with no I/O attached:
//! - The pet: vital stats, mood flags, and care interactions
//! - Species with distinct stat depletion rates
//! - Player score and an inventory of food and gift items
//! - A fixed-cadence game loop with periodic inventory restocks
//! - Saved-game snapshots and settings types for persistence
//! - Sound effect events delivered through a pluggable audio port

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod audio;
pub mod clock;
pub mod game_loop;
pub mod inventory;
pub mod item;
pub mod pet;
pub mod player;
pub mod save;
pub mod settings;
pub mod species;
pub mod visual;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::audio::*;
    pub use crate::clock::*;
    pub use crate::game_loop::*;
    pub use crate::inventory::*;
    pub use crate::item::*;
    pub use crate::pet::*;
    pub use crate::player::*;
    pub use crate::save::*;
    pub use crate::settings::*;
    pub use crate::species::*;
    pub use crate::visual::*;
}

pub use prelude::*;
