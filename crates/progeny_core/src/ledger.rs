//! Offspring bookkeeping keyed by parent pair.

use crate::selection::CandidateId;
use progeny_data::Creature;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Records how many offspring each ordered parent pair has produced, and
/// accumulates every child in birth order (which is display order).
///
/// Keys are candidate handles, not trait values: two breeding events
/// between the same two candidates accumulate into one entry, while two
/// structurally identical candidates keep separate entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreedingLedger {
    counts: HashMap<(CandidateId, CandidateId), u64>,
    offspring: Vec<Creature>,
}

impl BreedingLedger {
    /// Books one successful breed: bumps the pair's count and appends the
    /// child. Pure bookkeeping; the caller guarantees the breed happened.
    pub fn record(&mut self, pair: (CandidateId, CandidateId), child: Creature) {
        *self.counts.entry(pair).or_insert(0) += 1;
        self.offspring.push(child);
    }

    /// Offspring produced by one ordered pair so far.
    #[must_use]
    pub fn count(&self, pair: (CandidateId, CandidateId)) -> u64 {
        self.counts.get(&pair).copied().unwrap_or(0)
    }

    /// Every child produced so far, in birth order.
    #[must_use]
    pub fn offspring(&self) -> &[Creature] {
        &self.offspring
    }

    /// Total number of offspring across all pairs.
    #[must_use]
    pub fn total(&self) -> usize {
        self.offspring.len()
    }

    /// Iterates the recorded pairs and their counts.
    pub fn pairs(&self) -> impl Iterator<Item = ((CandidateId, CandidateId), u64)> + '_ {
        self.counts.iter().map(|(&pair, &count)| (pair, count))
    }
}
