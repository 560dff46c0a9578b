use progeny_core::selection::CandidateId;
use progeny_core::session::BreedingSession;
use progeny_data::{Creature, Stat};
use uuid::Uuid;

#[allow(dead_code)]
pub struct CreatureBuilder {
    creature: Creature,
}

#[allow(dead_code)]
impl CreatureBuilder {
    pub fn new() -> Self {
        Self {
            creature: Creature::new(Uuid::new_v4(), false, 0.0),
        }
    }

    pub fn male(mut self) -> Self {
        self.creature.sex = true;
        self
    }

    pub fn female(mut self) -> Self {
        self.creature.sex = false;
        self
    }

    pub fn fertility(mut self, fertility: f64) -> Self {
        self.creature.fertility = fertility;
        self
    }

    pub fn stat(mut self, stat: Stat, value: f64) -> Self {
        self.creature.set_stat(stat, value);
        self
    }

    pub fn build(self) -> Creature {
        self.creature
    }
}

#[allow(dead_code)]
pub struct SessionBuilder {
    population: Vec<Creature>,
}

#[allow(dead_code)]
impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            population: Vec::new(),
        }
    }

    pub fn with_creature(mut self, creature: Creature) -> Self {
        self.population.push(creature);
        self
    }

    pub fn build(self) -> BreedingSession {
        BreedingSession::new(self.population)
    }
}

#[allow(dead_code)]
pub fn candidate_ids(session: &BreedingSession) -> Vec<CandidateId> {
    session.roster().map(|(id, _)| id).collect()
}
