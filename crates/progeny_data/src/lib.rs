//! Core data structures for the Progeny breeding game.

pub mod creature;
pub mod state;

pub use creature::{Creature, Stat};
pub use state::{GamePhase, GameState};
