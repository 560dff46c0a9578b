//! Trait crossover and the mutation jitter.
//!
//! A child's stats are a per-stat weighted average of its parents'
//! values, each followed by a small jitter. Fertility inherits
//! differently: it is sex-linked, with the father contributing a third
//! of his share and a male child tripling the blend.

use progeny_data::{Creature, Stat};
use rand::Rng;
use uuid::Uuid;

/// Jitter amount applied after every crossover blend.
pub const DEFAULT_MUTATION_AMOUNT: f64 = 0.1;

/// Applies the post-crossover jitter to a blended value.
///
/// Returns exactly `n * (r * 2 * amount) + (1 - amount)` for a fresh
/// uniform `r` in `[0, 1)`. The formula is asymmetric rather than a
/// centered band; it is a balance contract inherited from the game's
/// tuning and must not be reshaped without re-balancing.
pub fn vary_with_rng<R: Rng>(n: f64, amount: f64, rng: &mut R) -> f64 {
    let r = rng.gen_range(0.0..1.0);
    n * (r * 2.0 * amount) + (1.0 - amount)
}

/// Derives a child trait vector from two opposite-sex parents.
///
/// Draw order is fixed: id, sex, then one `(weight, jitter)` pair per
/// stat in [`Stat::ALL`] order, then the fertility `(weight, jitter)`
/// pair. Callers guarantee `a.sex != b.sex`.
pub fn crossover_with_rng<R: Rng>(
    a: &Creature,
    b: &Creature,
    mutation_amount: f64,
    rng: &mut R,
) -> Creature {
    let id = Uuid::from_u128(rng.gen::<u128>());
    let sex = rng.gen_bool(0.5);
    let mut child = Creature::new(id, sex, 0.0);

    for stat in Stat::ALL {
        let weight = rng.gen_range(0.0..1.0);
        let raw = weight * a.stat(stat) + (1.0 - weight) * b.stat(stat);
        child.set_stat(stat, vary_with_rng(raw, mutation_amount, rng));
    }

    // Sex-linked fertility: the heritable capacity blends from the
    // parents' trait vectors, not from their remaining session counters.
    let (father, mother) = if a.sex { (a, b) } else { (b, a) };
    let weight = rng.gen_range(0.0..1.0);
    let mut balanced = (weight / 3.0) * father.fertility + (1.0 - weight) * mother.fertility;
    if child.sex {
        balanced *= 3.0;
    }
    child.fertility = vary_with_rng(balanced, mutation_amount, rng);

    child
}
