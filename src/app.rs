//! Headless application driver.
//!
//! The real game front-end feeds clicks into the breeding session; this
//! driver plays that role for the CLI by auto-selecting compatible pairs
//! until fertility runs out or a round limit is hit.

use progeny_core::config::AppConfig;
use progeny_core::lifecycle;
use progeny_core::selection::CandidateId;
use progeny_core::session::BreedingSession;
use progeny_data::{GamePhase, GameState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct App {
    pub config: AppConfig,
    pub state: GameState,
    pub session: BreedingSession,
    pub phase: GamePhase,
    rng: ChaCha8Rng,
}

impl App {
    /// Builds the game state and breeding session from configuration.
    /// The seed is honored only when `deterministic` is set.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let mut rng = match (config.population.deterministic, config.population.seed) {
            (true, Some(seed)) => ChaCha8Rng::seed_from_u64(seed),
            _ => ChaCha8Rng::from_entropy(),
        };
        let state = GameState {
            player_pop: lifecycle::generate_with_rng(config.population.size, &mut rng),
            enemy_pop: lifecycle::generate_with_rng(config.population.size, &mut rng),
        };
        let session = BreedingSession::with_mutation_amount(
            state.player_pop.clone(),
            config.breeding.mutation_amount,
        );
        Self {
            config,
            state,
            session,
            phase: GamePhase::Breed,
            rng,
        }
    }

    /// Runs up to `max_rounds` breeding rounds, pairing the first fertile
    /// male with the first fertile female each round. Returns the number
    /// of children born.
    pub fn run_breeding(&mut self, max_rounds: usize) -> usize {
        let mut births = 0;
        for round in 0..max_rounds {
            let Some((male, female)) = self.next_pair() else {
                tracing::info!(round, "roster exhausted");
                break;
            };
            self.session.deselect();
            self.session.select(male);
            self.session.select(female);
            if self.session.can_breed() && self.session.breed_with_rng(&mut self.rng).is_some() {
                births += 1;
            }
        }
        births
    }

    /// Hands the phase over; breeding state stays with this app until it
    /// is dropped.
    pub fn advance_phase(&mut self) {
        self.phase = self.phase.next();
    }

    fn next_pair(&self) -> Option<(CandidateId, CandidateId)> {
        let mut male = None;
        let mut female = None;
        for (id, candidate) in self.session.roster() {
            if !candidate.is_fertile() {
                continue;
            }
            if candidate.creature().sex {
                male.get_or_insert(id);
            } else {
                female.get_or_insert(id);
            }
        }
        Some((male?, female?))
    }
}
