use crate::creature::Creature;
use serde::{Deserialize, Serialize};

/// Current phase of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Breed,
    Select,
    Battle,
}

impl GamePhase {
    /// The phase that follows this one; `Battle` wraps back to `Breed`.
    #[must_use]
    pub const fn next(self) -> GamePhase {
        match self {
            GamePhase::Breed => GamePhase::Select,
            GamePhase::Select => GamePhase::Battle,
            GamePhase::Battle => GamePhase::Breed,
        }
    }
}

/// The rosters handed from phase to phase. The breeding phase consumes
/// `player_pop`; `enemy_pop` belongs to the battle phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub player_pop: Vec<Creature>,
    pub enemy_pop: Vec<Creature>,
}
