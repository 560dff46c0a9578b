//! Breeding candidates and the breed operation.
//!
//! A [`Candidate`] wraps a trait vector for the duration of one session
//! and carries the remaining breeding capacity. Breeding either commits
//! entirely (child produced, both parents decremented) or is rejected up
//! front; there is no partial state.

use crate::genetics;
use progeny_data::Creature;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A trait vector enrolled in a breeding session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    creature: Creature,
    fertility_left: f64,
}

impl Candidate {
    /// Enrolls a creature, initializing its remaining capacity from the
    /// heritable fertility value.
    #[must_use]
    pub fn new(creature: Creature) -> Self {
        let fertility_left = creature.fertility;
        Self {
            creature,
            fertility_left,
        }
    }

    #[must_use]
    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    /// Remaining breeding capacity this session.
    #[must_use]
    pub fn fertility_left(&self) -> f64 {
        self.fertility_left
    }

    /// Whether this candidate can still parent a child.
    #[must_use]
    pub fn is_fertile(&self) -> bool {
        self.fertility_left >= 1.0
    }
}

/// True iff the two candidates are of opposite sex and both are still
/// fertile. Pure predicate; symmetric in its arguments.
#[must_use]
pub fn can_breed(a: &Candidate, b: &Candidate) -> bool {
    a.creature.sex != b.creature.sex && a.is_fertile() && b.is_fertile()
}

/// Breeds two candidates, returning the child and decrementing both
/// parents' remaining capacity by one.
///
/// Returns `None` without consuming randomness or touching either parent
/// when [`can_breed`] rejects the pair.
pub fn breed_with_rng<R: Rng>(
    a: &mut Candidate,
    b: &mut Candidate,
    mutation_amount: f64,
    rng: &mut R,
) -> Option<Creature> {
    if !can_breed(a, b) {
        return None;
    }
    let child = genetics::crossover_with_rng(&a.creature, &b.creature, mutation_amount, rng);
    a.fertility_left -= 1.0;
    b.fertility_left -= 1.0;
    Some(child)
}
