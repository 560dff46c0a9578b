//! The breeding session: one game phase's worth of state.
//!
//! A session owns the candidate roster (built once from the initial
//! population, fixed membership thereafter), the pairing selection, and
//! the ledger of offspring. Offspring are accumulated for the next phase
//! and never join the breedable roster.

use crate::breeding::{self, Candidate};
use crate::genetics;
use crate::ledger::BreedingLedger;
use crate::selection::{CandidateId, PairSelection};
use progeny_data::Creature;
use rand::Rng;

/// One breeding phase instance. Exclusively owned by the loop driving it;
/// all operations are synchronous and complete before returning.
#[derive(Debug, Clone)]
pub struct BreedingSession {
    roster: Vec<Candidate>,
    selection: PairSelection,
    ledger: BreedingLedger,
    mutation_amount: f64,
}

impl BreedingSession {
    /// Enrolls a population with the default mutation amount.
    #[must_use]
    pub fn new(population: Vec<Creature>) -> Self {
        Self::with_mutation_amount(population, genetics::DEFAULT_MUTATION_AMOUNT)
    }

    /// Enrolls a population with an explicit mutation amount.
    #[must_use]
    pub fn with_mutation_amount(population: Vec<Creature>, mutation_amount: f64) -> Self {
        Self {
            roster: population.into_iter().map(Candidate::new).collect(),
            selection: PairSelection::default(),
            ledger: BreedingLedger::default(),
            mutation_amount,
        }
    }

    /// The enrolled candidates with their stable handles.
    pub fn roster(&self) -> impl Iterator<Item = (CandidateId, &Candidate)> {
        self.roster
            .iter()
            .enumerate()
            .map(|(index, candidate)| (CandidateId(index), candidate))
    }

    #[must_use]
    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.roster.get(id.index())
    }

    #[must_use]
    pub fn selection(&self) -> &PairSelection {
        &self.selection
    }

    #[must_use]
    pub fn ledger(&self) -> &BreedingLedger {
        &self.ledger
    }

    /// Every child produced this session, in birth order.
    #[must_use]
    pub fn offspring(&self) -> &[Creature] {
        self.ledger.offspring()
    }

    /// Feeds one selection click into the session. Unknown handles and
    /// same-sex conflicts are rejected silently.
    pub fn select(&mut self, id: CandidateId) -> bool {
        let Some(candidate) = self.roster.get(id.index()) else {
            return false;
        };
        let accepted = self.selection.select(id, candidate.creature().sex);
        if accepted {
            tracing::debug!(candidate = %candidate.creature().id, "candidate selected");
        } else {
            tracing::debug!(candidate = %candidate.creature().id, "selection rejected");
        }
        accepted
    }

    /// Clears the pairing selection. Candidates are untouched.
    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// Whether the current selection is a breedable pair.
    #[must_use]
    pub fn can_breed(&self) -> bool {
        match self.selection.pair() {
            Some((a, b)) => breeding::can_breed(&self.roster[a.index()], &self.roster[b.index()]),
            None => false,
        }
    }

    /// Breeds the selected pair, booking the child under the
    /// selection-ordered key. Returns the appended child, or `None` when
    /// the selection is incomplete or the pair cannot breed; nothing
    /// changes in that case.
    pub fn breed_with_rng<R: Rng>(&mut self, rng: &mut R) -> Option<&Creature> {
        let (id_a, id_b) = self.selection.pair()?;
        let (a, b) = two_mut(&mut self.roster, id_a.index(), id_b.index());
        let child = breeding::breed_with_rng(a, b, self.mutation_amount, rng)?;
        tracing::info!(
            child = %child.id,
            parent_a = %a.creature().id,
            parent_b = %b.creature().id,
            "offspring born"
        );
        self.ledger.record((id_a, id_b), child);
        self.ledger.offspring().last()
    }
}

/// Disjoint mutable borrows of two roster entries. The selection
/// invariant guarantees the indices differ.
fn two_mut(roster: &mut [Candidate], i: usize, j: usize) -> (&mut Candidate, &mut Candidate) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = roster.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = roster.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
