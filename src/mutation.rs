//! Crop mutation table and the weighted selection roll.

use rand::Rng;

use crate::events::EventEffect;

/// A named value-multiplying mutation with its base roll chance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationDef {
    pub name: &'static str,
    pub value_multiplier: f64,
    pub chance: f64,
}

/// The static mutation table shared by every event.
///
/// The table intentionally carries two "Chocolate" rows; value lookup
/// takes the first match and both rows contribute weight to the roll walk.
pub const MUTATIONS: &[MutationDef] = &[
    MutationDef { name: "Wet", value_multiplier: 2.0, chance: 0.1 },
    MutationDef { name: "Gold", value_multiplier: 1.5, chance: 0.05 },
    MutationDef { name: "Disco", value_multiplier: 2.25, chance: 0.02 },
    MutationDef { name: "Shocked", value_multiplier: 1.8, chance: 0.15 },
    MutationDef { name: "Chilled", value_multiplier: 1.6, chance: 0.1 },
    MutationDef { name: "Bloodlit", value_multiplier: 2.5, chance: 0.05 },
    MutationDef { name: "Chocolate", value_multiplier: 2.2, chance: 0.08 },
    MutationDef { name: "Angry", value_multiplier: 1.9, chance: 0.12 },
    MutationDef { name: "Moonlit", value_multiplier: 2.3, chance: 0.06 },
    MutationDef { name: "Celestial", value_multiplier: 2.4, chance: 0.04 },
    MutationDef { name: "Chocolate", value_multiplier: 2.1, chance: 0.07 },
];

/// Value multiplier for a mutation name; unknown names multiply by 1.
pub fn mutation_multiplier(name: &str) -> f64 {
    MUTATIONS
        .iter()
        .find(|m| m.name == name)
        .map(|m| m.value_multiplier)
        .unwrap_or(1.0)
}

/// Roll a mutation for a freshly planted (or regrown) crop.
///
/// One uniform draw walks the candidate list accumulating
/// `chance * (1 + event bonus + tool bonus)`. When the active event biases
/// a mutation, its rows move to the front of the walk; otherwise the table
/// order is used as-is. Returns `None` when no candidate triggers.
pub fn roll_mutation(
    effect: &EventEffect,
    tool_bonus: f64,
    rng: &mut impl Rng,
) -> Option<&'static str> {
    let bonus = 1.0 + effect.mutation_chance + tool_bonus;
    let roll: f64 = rng.gen();
    let biased = effect.mutation_type.as_deref();

    let front = MUTATIONS.iter().filter(|m| Some(m.name) == biased);
    let rest = MUTATIONS.iter().filter(|m| Some(m.name) != biased);

    let mut cumulative = 0.0;
    for candidate in front.chain(rest) {
        cumulative += candidate.chance * bonus;
        if roll <= cumulative {
            return Some(candidate.name);
        }
    }
    None
}
