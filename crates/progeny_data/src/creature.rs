use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A heritable combat stat of a creature.
///
/// This enumeration is the authoritative list of blendable stats: any code
/// that walks "every stat" iterates [`Stat::ALL`], so adding or removing a
/// stat is a compile-time change. `id`, `sex` and `fertility` are not
/// stats and are never reachable from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Maximum hit points.
    HpMax,
    /// Damage reduction.
    Def,
    /// Attack damage.
    AtkDmg,
    /// Attack range in pixels.
    AtkRange,
    /// Attack cooldown in frames.
    AtkCd,
    /// Critical hit chance as a decimal.
    AtkCrit,
    /// Movement speed in pixels per 100 frames.
    Spd,
    /// Cooldown reduction.
    Tenacity,
    /// Chance to kill instead of capture.
    Brutality,
}

impl Stat {
    /// Every blendable stat, in declaration order.
    pub const ALL: [Stat; 9] = [
        Stat::HpMax,
        Stat::Def,
        Stat::AtkDmg,
        Stat::AtkRange,
        Stat::AtkCd,
        Stat::AtkCrit,
        Stat::Spd,
        Stat::Tenacity,
        Stat::Brutality,
    ];

    /// Exclusive upper bound of the uniform range used when rolling a
    /// fresh creature. Bred values may drift past these bounds.
    #[must_use]
    pub const fn roll_bound(self) -> f64 {
        match self {
            Stat::HpMax => 500.0,
            Stat::Def => 50.0,
            Stat::AtkDmg => 50.0,
            Stat::AtkRange => 200.0,
            Stat::AtkCd => 240.0,
            Stat::AtkCrit => 1.0,
            Stat::Spd => 100.0,
            Stat::Tenacity => 1.0,
            Stat::Brutality => 1.0,
        }
    }
}

/// The full trait vector of a single creature: identity, sex, breeding
/// capacity and the nine heritable combat stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Unique identifier, assigned at creation and never reassigned.
    pub id: Uuid,
    /// `true` is male. Assigned at creation, immutable thereafter.
    pub sex: bool,
    /// Heritable breeding capacity. The remaining capacity during a
    /// breeding session lives on the session's candidate wrapper, not
    /// here.
    pub fertility: f64,
    pub hp_max: f64,
    pub def: f64,
    pub atk_dmg: f64,
    /// Pixels.
    pub atk_range: f64,
    /// Frames.
    pub atk_cd: f64,
    /// Chance as decimal 0-1.
    pub atk_crit: f64,
    /// Pixels / 100 frames.
    pub spd: f64,
    /// Cooldown reduction.
    pub tenacity: f64,
    /// Chance to kill vs capture.
    pub brutality: f64,
}

impl Creature {
    /// A creature with the given identity and zeroed combat stats.
    #[must_use]
    pub fn new(id: Uuid, sex: bool, fertility: f64) -> Self {
        Self {
            id,
            sex,
            fertility,
            hp_max: 0.0,
            def: 0.0,
            atk_dmg: 0.0,
            atk_range: 0.0,
            atk_cd: 0.0,
            atk_crit: 0.0,
            spd: 0.0,
            tenacity: 0.0,
            brutality: 0.0,
        }
    }

    /// Value of one combat stat.
    #[must_use]
    pub fn stat(&self, stat: Stat) -> f64 {
        match stat {
            Stat::HpMax => self.hp_max,
            Stat::Def => self.def,
            Stat::AtkDmg => self.atk_dmg,
            Stat::AtkRange => self.atk_range,
            Stat::AtkCd => self.atk_cd,
            Stat::AtkCrit => self.atk_crit,
            Stat::Spd => self.spd,
            Stat::Tenacity => self.tenacity,
            Stat::Brutality => self.brutality,
        }
    }

    /// Overwrites one combat stat.
    pub fn set_stat(&mut self, stat: Stat, value: f64) {
        match stat {
            Stat::HpMax => self.hp_max = value,
            Stat::Def => self.def = value,
            Stat::AtkDmg => self.atk_dmg = value,
            Stat::AtkRange => self.atk_range = value,
            Stat::AtkCd => self.atk_cd = value,
            Stat::AtkCrit => self.atk_crit = value,
            Stat::Spd => self.spd = value,
            Stat::Tenacity => self.tenacity = value,
            Stat::Brutality => self.brutality = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_accessors_cover_every_field() {
        let mut creature = Creature::new(Uuid::nil(), false, 0.0);
        for (i, stat) in Stat::ALL.iter().enumerate() {
            creature.set_stat(*stat, (i + 1) as f64);
        }
        for (i, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(creature.stat(*stat), (i + 1) as f64);
        }
        // Non-stat fields stay untouched by the stat loop.
        assert_eq!(creature.fertility, 0.0);
        assert!(!creature.sex);
    }
}
