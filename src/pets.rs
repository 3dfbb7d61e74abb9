//! Pet management and the passive seed-collection scheduler.

use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;

use crate::config::GardenConfig;
use crate::shop::GardenShop;
use crate::types::{ActivePet, GardenItem, GardenProfile};

/// Result of trying to uncage a pet from the inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum UncageOutcome {
    /// No caged pet with that key in the inventory.
    NotCaged,
    /// A pet with this key is already active; duplicates are not allowed.
    AlreadyActive,
    /// The equip limit is already reached.
    EquipLimitReached { limit: usize },
    /// The active-pet limit is already reached.
    PetLimitReached { limit: usize },
    /// The pet is now active; `equipped` tells whether it was auto-equipped.
    Uncaged { pet: ActivePet },
}

/// Result of an explicit equip/unequip request.
#[derive(Debug, Clone, PartialEq)]
pub enum EquipOutcome {
    NotFound,
    EquipLimitReached { limit: usize },
    Updated { equipped: bool },
}

/// What one pet produced during a collection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PetCollection {
    pub pet_key: String,
    pub pet_name: String,
    /// Collection events owed for the elapsed interval.
    pub ticks_owed: u32,
    /// Items actually materialized (ticks can be dropped by capacity or
    /// by seeds the catalog no longer lists).
    pub collected: Vec<GardenItem>,
}

/// Release a caged pet from the inventory into the active roster.
///
/// The cage item is consumed. While fewer than the auto-equip threshold
/// pets are equipped, the new pet starts equipped and collecting.
pub fn uncage_pet(
    profile: &mut GardenProfile,
    pet_key: &str,
    cfg: &GardenConfig,
    now: DateTime<Utc>,
) -> UncageOutcome {
    let equipped = profile.equipped_pet_count();
    if equipped >= cfg.pet_equip_limit {
        return UncageOutcome::EquipLimitReached {
            limit: cfg.pet_equip_limit,
        };
    }
    if profile.pets.len() >= cfg.pet_limit {
        return UncageOutcome::PetLimitReached {
            limit: cfg.pet_limit,
        };
    }

    let Some(idx) = profile
        .inventory
        .iter()
        .position(|item| item.key == pet_key && item.as_pet_cage().is_some())
    else {
        return UncageOutcome::NotCaged;
    };
    if profile.has_active_pet(pet_key) {
        return UncageOutcome::AlreadyActive;
    }

    let cage = profile.inventory.remove(idx);
    let spec = cage
        .as_pet_cage()
        .expect("position() matched a pet cage")
        .clone();
    let pet = ActivePet {
        key: cage.key,
        name: spec.pet_name.clone(),
        icon: cage.icon,
        last_collect: now,
        pet: spec,
        is_equipped: equipped < cfg.auto_equip_threshold,
    };
    profile.pets.push(pet.clone());
    UncageOutcome::Uncaged { pet }
}

/// Equip or unequip an active pet.
pub fn set_pet_equipped(
    profile: &mut GardenProfile,
    pet_key: &str,
    equipped: bool,
    cfg: &GardenConfig,
) -> EquipOutcome {
    if equipped && profile.equipped_pet_count() >= cfg.pet_equip_limit {
        return EquipOutcome::EquipLimitReached {
            limit: cfg.pet_equip_limit,
        };
    }
    match profile.pets.iter_mut().find(|pet| pet.key == pet_key) {
        Some(pet) => {
            pet.is_equipped = equipped;
            EquipOutcome::Updated { equipped }
        }
        None => EquipOutcome::NotFound,
    }
}

/// Run the passive collection scheduler over every equipped pet.
///
/// Each pet owes `round(floor(elapsed minutes) * collection_rate)` ticks
/// since its `last_collect`; negative elapsed time (clock skew) owes zero.
/// Ticks are processed one at a time: draw a seed key uniformly from the
/// pet's list, and materialize it only when the catalog currently lists
/// the key and the inventory is below capacity; otherwise the tick is
/// silently dropped. `last_collect` advances only when at least one tick
/// was owed, so fractional progress survives frequent polling.
pub fn collect_from_pets(
    profile: &mut GardenProfile,
    shop: &GardenShop,
    cfg: &GardenConfig,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Vec<PetCollection> {
    let mut results = Vec::new();
    let inventory = &mut profile.inventory;

    for pet in profile.pets.iter_mut() {
        if !pet.is_equipped {
            continue;
        }
        let elapsed_ms = now
            .signed_duration_since(pet.last_collect)
            .num_milliseconds()
            .max(0);
        let minutes = elapsed_ms / 60_000;
        let ticks = (minutes as f64 * pet.pet.collection_rate).round() as u32;
        if ticks < 1 {
            continue;
        }
        pet.last_collect = now;

        let mut collected = Vec::new();
        for _ in 0..ticks {
            if pet.pet.seed_keys.is_empty() {
                break;
            }
            let seed_key = &pet.pet.seed_keys[rng.gen_range(0..pet.pet.seed_keys.len())];
            if let Some(entry) = shop.entry(seed_key) {
                if inventory.len() < cfg.inventory_limit {
                    collected.push(entry.produce(inventory));
                }
            }
        }
        debug!(
            "pet {} owed {} ticks, collected {} items",
            pet.key,
            ticks,
            collected.len()
        );
        results.push(PetCollection {
            pet_key: pet.key.clone(),
            pet_name: pet.name.clone(),
            ticks_owed: ticks,
            collected,
        });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GardenItem, ItemKind, PetSpec};
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn caged_pet(key: &str, rate: f64, seeds: &[&str]) -> GardenItem {
        GardenItem {
            key: key.into(),
            name: "Dog".into(),
            icon: "🐶".into(),
            flavor: "Caged pet.".into(),
            sell_price: 50,
            kind: ItemKind::PetCage(PetSpec {
                pet_name: "Dog".into(),
                collection_rate: rate,
                seed_keys: seeds.iter().map(|s| s.to_string()).collect(),
            }),
            is_favorite: false,
        }
    }

    fn profile_with_caged_dog() -> GardenProfile {
        let mut profile = GardenProfile::new("farmer");
        profile
            .inventory
            .push(caged_pet("gpDog", 0.1, &["gsCarrot"]));
        profile
    }

    #[test]
    fn uncage_consumes_the_cage_and_auto_equips() {
        let cfg = GardenConfig::default();
        let mut profile = profile_with_caged_dog();
        let now = Utc::now();

        match uncage_pet(&mut profile, "gpDog", &cfg, now) {
            UncageOutcome::Uncaged { pet } => {
                assert!(pet.is_equipped);
                assert_eq!(pet.last_collect, now);
            }
            other => panic!("expected Uncaged, got {:?}", other),
        }
        assert!(profile.inventory.is_empty());
        assert_eq!(profile.pets.len(), 1);
    }

    #[test]
    fn uncage_rejects_duplicates_and_unknown_keys() {
        let cfg = GardenConfig::default();
        let mut profile = profile_with_caged_dog();
        let now = Utc::now();

        uncage_pet(&mut profile, "gpDog", &cfg, now);
        profile.inventory.push(caged_pet("gpDog", 0.1, &["gsCarrot"]));
        assert_eq!(
            uncage_pet(&mut profile, "gpDog", &cfg, now),
            UncageOutcome::AlreadyActive
        );
        assert_eq!(
            uncage_pet(&mut profile, "gpCat", &cfg, now),
            UncageOutcome::NotCaged
        );
    }

    #[test]
    fn uncage_past_the_auto_equip_threshold_is_unequipped() {
        let cfg = GardenConfig::default();
        let mut profile = GardenProfile::new("farmer");
        let now = Utc::now();

        for i in 0..5 {
            let key = format!("gpDog{}", i);
            profile.inventory.push(caged_pet(&key, 0.1, &["gsCarrot"]));
            match uncage_pet(&mut profile, &key, &cfg, now) {
                UncageOutcome::Uncaged { pet } => {
                    // First three auto-equip, the rest stay benched.
                    assert_eq!(pet.is_equipped, i < cfg.auto_equip_threshold);
                }
                other => panic!("expected Uncaged, got {:?}", other),
            }
        }
        assert_eq!(profile.equipped_pet_count(), 3);
    }

    #[test]
    fn uncage_blocked_at_equip_limit() {
        let cfg = GardenConfig::default();
        let mut profile = GardenProfile::new("farmer");
        let now = Utc::now();

        for i in 0..cfg.pet_equip_limit {
            let key = format!("gpDog{}", i);
            profile.inventory.push(caged_pet(&key, 0.1, &["gsCarrot"]));
            uncage_pet(&mut profile, &key, &cfg, now);
            set_pet_equipped(&mut profile, &key, true, &cfg);
        }
        assert_eq!(profile.equipped_pet_count(), cfg.pet_equip_limit);

        profile.inventory.push(caged_pet("gpExtra", 0.1, &["gsCarrot"]));
        assert_eq!(
            uncage_pet(&mut profile, "gpExtra", &cfg, now),
            UncageOutcome::EquipLimitReached { limit: 8 }
        );
    }

    #[test]
    fn equip_respects_the_limit() {
        let cfg = GardenConfig::default();
        let mut profile = GardenProfile::new("farmer");
        let now = Utc::now();

        for i in 0..9 {
            let key = format!("gpDog{}", i);
            profile.inventory.push(caged_pet(&key, 0.1, &["gsCarrot"]));
            uncage_pet(&mut profile, &key, &cfg, now);
        }
        // Three auto-equipped; equip five more to hit the limit of eight.
        for i in 3..8 {
            let key = format!("gpDog{}", i);
            assert_eq!(
                set_pet_equipped(&mut profile, &key, true, &cfg),
                EquipOutcome::Updated { equipped: true }
            );
        }
        assert_eq!(
            set_pet_equipped(&mut profile, "gpDog8", true, &cfg),
            EquipOutcome::EquipLimitReached { limit: 8 }
        );
        assert_eq!(
            set_pet_equipped(&mut profile, "gpDog0", false, &cfg),
            EquipOutcome::Updated { equipped: false }
        );
        assert_eq!(
            set_pet_equipped(&mut profile, "gpMissing", false, &cfg),
            EquipOutcome::NotFound
        );
    }

    #[test]
    fn fifty_minutes_at_rate_point_one_owes_five_ticks() {
        let cfg = GardenConfig::default();
        let shop = GardenShop::with_base_catalog();
        let mut profile = profile_with_caged_dog();
        let now = Utc::now();
        uncage_pet(&mut profile, "gpDog", &cfg, now);

        let later = now + Duration::minutes(50);
        let mut rng = StdRng::seed_from_u64(1);
        let results = collect_from_pets(&mut profile, &shop, &cfg, later, &mut rng);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticks_owed, 5);
        assert_eq!(results[0].collected.len(), 5);
        assert_eq!(profile.inventory.len(), 5);
        assert!(profile.inventory.iter().all(|item| item.key == "gsCarrot"));
        assert_eq!(profile.pets[0].last_collect, later);
    }

    #[test]
    fn sub_tick_progress_is_not_lost_to_polling() {
        let cfg = GardenConfig::default();
        let shop = GardenShop::with_base_catalog();
        let mut profile = profile_with_caged_dog();
        let now = Utc::now();
        uncage_pet(&mut profile, "gpDog", &cfg, now);

        // Rate 0.1: four minutes owes zero ticks, so last_collect stays put.
        let mut rng = StdRng::seed_from_u64(1);
        let soon = now + Duration::minutes(4);
        let results = collect_from_pets(&mut profile, &shop, &cfg, soon, &mut rng);
        assert!(results.is_empty());
        assert_eq!(profile.pets[0].last_collect, now);

        // The accrued minutes still count once a full tick is owed.
        let later = now + Duration::minutes(10);
        let results = collect_from_pets(&mut profile, &shop, &cfg, later, &mut rng);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticks_owed, 1);
    }

    #[test]
    fn unequipped_pets_accrue_nothing() {
        let cfg = GardenConfig::default();
        let shop = GardenShop::with_base_catalog();
        let mut profile = profile_with_caged_dog();
        let now = Utc::now();
        uncage_pet(&mut profile, "gpDog", &cfg, now);
        set_pet_equipped(&mut profile, "gpDog", false, &cfg);

        let mut rng = StdRng::seed_from_u64(1);
        let later = now + Duration::hours(5);
        let results = collect_from_pets(&mut profile, &shop, &cfg, later, &mut rng);
        assert!(results.is_empty());
        assert_eq!(profile.pets[0].last_collect, now);
    }

    #[test]
    fn negative_elapsed_time_owes_zero_ticks() {
        let cfg = GardenConfig::default();
        let shop = GardenShop::with_base_catalog();
        let mut profile = profile_with_caged_dog();
        let now = Utc::now();
        uncage_pet(&mut profile, "gpDog", &cfg, now);

        let mut rng = StdRng::seed_from_u64(1);
        let past = now - Duration::hours(2);
        let results = collect_from_pets(&mut profile, &shop, &cfg, past, &mut rng);
        assert!(results.is_empty());
        assert_eq!(profile.pets[0].last_collect, now);
    }

    #[test]
    fn full_inventory_silently_drops_ticks() {
        let mut cfg = GardenConfig::default();
        cfg.inventory_limit = 2;
        let shop = GardenShop::with_base_catalog();
        let mut profile = profile_with_caged_dog();
        let now = Utc::now();
        uncage_pet(&mut profile, "gpDog", &cfg, now);

        let mut rng = StdRng::seed_from_u64(1);
        let later = now + Duration::minutes(50);
        let results = collect_from_pets(&mut profile, &shop, &cfg, later, &mut rng);
        assert_eq!(results[0].ticks_owed, 5);
        assert_eq!(results[0].collected.len(), 2);
        assert_eq!(profile.inventory.len(), 2);
        // The dropped ticks are gone; time was still consumed.
        assert_eq!(profile.pets[0].last_collect, later);
    }

    #[test]
    fn seeds_missing_from_the_catalog_drop_their_ticks() {
        let cfg = GardenConfig::default();
        let shop = GardenShop::with_base_catalog();
        let mut profile = GardenProfile::new("farmer");
        let now = Utc::now();
        // This pet collects an event seed the base catalog does not list.
        profile
            .inventory
            .push(caged_pet("gpMole", 0.1, &["gsMoonflower"]));
        uncage_pet(&mut profile, "gpMole", &cfg, now);

        let mut rng = StdRng::seed_from_u64(1);
        let later = now + Duration::minutes(50);
        let results = collect_from_pets(&mut profile, &shop, &cfg, later, &mut rng);
        assert_eq!(results[0].ticks_owed, 5);
        assert!(results[0].collected.is_empty());
        assert!(profile.inventory.is_empty());
    }
}
