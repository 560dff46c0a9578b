//! Progeny - the core of a creature-breeding game, with a headless
//! driver standing in for the presentation layer.

pub mod app;

pub use progeny_core::session::BreedingSession;
pub use progeny_data::{Creature, GamePhase, GameState, Stat};
