//! Pairing selection state machine.
//!
//! Tracks the 0-2 candidates currently chosen as breeding parents.
//! Slots are keyed by [`CandidateId`], a stable handle into the session
//! roster, so two structurally identical creatures stay distinguishable.

use serde::{Deserialize, Serialize};

/// Stable opaque handle to a candidate in a session roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub(crate) usize);

impl CandidateId {
    /// Position of the candidate in the session roster.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One filled selection slot: which candidate, and its sex at selection
/// time (sex is immutable, so the copy never goes stale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: CandidateId,
    pub sex: bool,
}

/// The current pairing selection.
///
/// Invariant: in [`PairSelection::Two`], the slots always hold opposite
/// sexes. The transition rules enforce this; there is no post-hoc check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairSelection {
    #[default]
    Empty,
    One(Slot),
    Two(Slot, Slot),
}

impl PairSelection {
    /// Feeds one selection click into the machine. Returns whether the
    /// click was accepted.
    ///
    /// A second same-sex click while one slot is filled is rejected and
    /// leaves the state unchanged. With both slots filled, the incoming
    /// candidate displaces whichever slot shares its sex, so one
    /// candidate of each sex is always kept.
    pub fn select(&mut self, id: CandidateId, sex: bool) -> bool {
        let slot = Slot { id, sex };
        match *self {
            PairSelection::Empty => {
                *self = PairSelection::One(slot);
                true
            }
            PairSelection::One(a) => {
                if sex == a.sex {
                    return false;
                }
                *self = PairSelection::Two(a, slot);
                true
            }
            PairSelection::Two(a, b) => {
                if sex != a.sex {
                    *self = PairSelection::Two(a, slot);
                } else if sex != b.sex {
                    *self = PairSelection::Two(slot, b);
                } else {
                    // Both slots match the incoming sex: unreachable while
                    // the opposite-sex invariant holds.
                    return false;
                }
                true
            }
        }
    }

    /// Resets to `Empty` from any state. Selection only; candidates are
    /// never touched.
    pub fn clear(&mut self) {
        *self = PairSelection::Empty;
    }

    /// The selected pair in selection order, once both slots are filled.
    #[must_use]
    pub fn pair(&self) -> Option<(CandidateId, CandidateId)> {
        match *self {
            PairSelection::Two(a, b) => Some((a.id, b.id)),
            _ => None,
        }
    }

    /// Slot contents for display: slot A, then slot B.
    #[must_use]
    pub fn slots(&self) -> [Option<Slot>; 2] {
        match *self {
            PairSelection::Empty => [None, None],
            PairSelection::One(a) => [Some(a), None],
            PairSelection::Two(a, b) => [Some(a), Some(b)],
        }
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            PairSelection::Empty => 0,
            PairSelection::One(_) => 1,
            PairSelection::Two(_, _) => 2,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, PairSelection::Empty)
    }
}
