//! Garden operations: planting, harvesting, instant growth, stealing,
//! and plot expansion.
//!
//! Every operation mutates a loaded [`GardenProfile`] in place and reports
//! what happened through a plain-data outcome the host renders. Expected
//! edge conditions (nothing to harvest, not enough gems) are outcome
//! variants, not errors.

use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;
use uuid::Uuid;

use crate::config::GardenConfig;
use crate::economy::crop_value;
use crate::events::WorldEvent;
use crate::growth::{is_ready, modifiers_from_inventory, ready_at};
use crate::mutation::roll_mutation;
use crate::shop::GardenShop;
use crate::types::{GardenItem, GardenPlot, GardenProfile};

/// One crop created by a planting pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantedCrop {
    pub plot_key: String,
    pub name: String,
    pub icon: String,
    pub mutation: Option<String>,
}

/// Result of a planting request.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantOutcome {
    /// Every plot slot is occupied.
    NoPlotsFree { used: usize, limit: usize },
    /// The inventory holds no seed with the requested key.
    NoSeed,
    Planted {
        planted: Vec<PlantedCrop>,
        plots_used: usize,
        plot_limit: usize,
        first_ready_at: Option<DateTime<Utc>>,
    },
}

/// One crop collected by a harvest pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestedCrop {
    pub plot_key: String,
    pub name: String,
    pub icon: String,
    pub mutation: Option<String>,
    pub value: i64,
    pub base_value: i64,
}

/// Result of a harvest pass. An empty `harvested` means nothing was ready.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HarvestOutcome {
    pub harvested: Vec<HarvestedCrop>,
    /// Seeds returned by lucky harvests.
    pub lucky_seeds: Vec<GardenItem>,
    pub money_earned: i64,
}

/// Result of paying gems to ripen every plot instantly.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowAllOutcome {
    InsufficientGems { needed: i64, available: i64 },
    NoPlots,
    Ripened { plots: usize, cost: i64 },
}

/// Result of a steal attempt against another player's garden.
#[derive(Debug, Clone, PartialEq)]
pub enum StealOutcome {
    InsufficientGems { needed: i64, available: i64 },
    /// The victim has no ready, unprotected crop.
    NothingToSteal,
    /// The roll failed; the thief keeps the gems and gets consolation Money.
    Failed { compensation: i64 },
    Stolen {
        crop_name: String,
        icon: String,
        mutation: Option<String>,
        /// The seed item added to the thief's inventory, when the catalog
        /// still lists it and the inventory had room.
        item: Option<GardenItem>,
        cost: i64,
    },
}

/// The three purchasable garden expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionTier {
    Side,
    RearOne,
    RearTwo,
}

/// Result of an expansion purchase.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpandOutcome {
    /// The hard plot ceiling is already reached.
    LimitReached { limit: usize },
    InsufficientFunds { needed: i64, available: i64 },
    OnCooldown { ready_in_ms: i64 },
    Expanded {
        added_plots: usize,
        new_limit: usize,
        cost: i64,
    },
}

/// Plant up to `quantity` seeds of `seed_key` into free plots.
///
/// The quantity is clamped to the free plot count and to how many of the
/// seed the player owns; each planting consumes one seed and rolls the
/// crop's mutation once, at creation.
pub fn plant_seeds(
    profile: &mut GardenProfile,
    seed_key: &str,
    quantity: usize,
    event: &WorldEvent,
    _cfg: &GardenConfig,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> PlantOutcome {
    let free = profile.free_plots();
    if free == 0 {
        return PlantOutcome::NoPlotsFree {
            used: profile.plots.len(),
            limit: profile.plot_limit,
        };
    }
    let owned = profile.item_count(seed_key);
    let is_seed = profile
        .inventory
        .iter()
        .any(|item| item.key == seed_key && item.as_seed().is_some());
    if owned == 0 || !is_seed {
        return PlantOutcome::NoSeed;
    }

    let count = quantity.max(1).min(free).min(owned);
    let mut planted = Vec::with_capacity(count);
    let mut first_ready_at = None;
    for _ in 0..count {
        let Some(seed) = profile.take_item(seed_key) else {
            break;
        };
        let crop = seed.as_seed().expect("only seed items are planted");

        let modifiers = modifiers_from_inventory(&profile.inventory);
        let mut plot = GardenPlot {
            key: format!("plot_{}", Uuid::new_v4()),
            seed_key: seed.key.clone(),
            name: seed.name.clone(),
            icon: seed.icon.clone(),
            planted_at: now,
            growth_time_ms: crop.growth_time_ms,
            harvests_left: crop.harvests,
            base_value: crop.base_value,
            mutation: None,
            is_favorite: false,
        };
        plot.mutation = roll_mutation(&event.effect, modifiers.mutation_bonus, rng)
            .map(String::from);
        if plot.mutation.is_some() {
            profile.stats.mutations_found += 1;
        }
        if first_ready_at.is_none() {
            first_ready_at = Some(ready_at(&plot, &modifiers, &event.effect));
        }
        planted.push(PlantedCrop {
            plot_key: plot.key.clone(),
            name: plot.name.clone(),
            icon: plot.icon.clone(),
            mutation: plot.mutation.clone(),
        });
        profile.plots.push(plot);
    }

    PlantOutcome::Planted {
        planted,
        plots_used: profile.plots.len(),
        plot_limit: profile.plot_limit,
        first_ready_at,
    }
}

/// Harvest every ready, unprotected plot.
///
/// Values are computed with the running lifetime earnings, so earlier
/// harvests in the same pass raise later crops' wealth multiplier.
/// Each harvest has a lucky chance of returning the crop's seed.
/// Exhausted plots are removed; surviving plots replant at `now` and
/// re-roll their mutation.
pub fn harvest_ready(
    profile: &mut GardenProfile,
    shop: &GardenShop,
    event: &WorldEvent,
    cfg: &GardenConfig,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> HarvestOutcome {
    let modifiers = modifiers_from_inventory(&profile.inventory);
    let ready_keys: Vec<String> = profile
        .plots
        .iter()
        .filter(|plot| is_ready(plot, &modifiers, &event.effect, now))
        .map(|plot| plot.key.clone())
        .collect();

    let mut outcome = HarvestOutcome::default();
    for key in ready_keys {
        let Some(idx) = profile.plots.iter().position(|plot| plot.key == key) else {
            continue;
        };
        let planted_count = profile.plots.len();
        let value = {
            let plot = &profile.plots[idx];
            crop_value(
                plot,
                planted_count,
                profile.stats.expansions,
                profile.garden_earns,
            )
        };

        let plot = &mut profile.plots[idx];
        outcome.money_earned += value;
        profile.garden_earns += value - plot.base_value;
        plot.harvests_left = plot.harvests_left.saturating_sub(1);
        profile.stats.plots_harvested += 1;
        outcome.harvested.push(HarvestedCrop {
            plot_key: plot.key.clone(),
            name: plot.name.clone(),
            icon: plot.icon.clone(),
            mutation: plot.mutation.clone(),
            value,
            base_value: plot.base_value,
        });

        let seed_key = plot.seed_key.clone();
        let exhausted = plot.harvests_left == 0;
        if exhausted {
            profile.plots.remove(idx);
        } else {
            let plot = &mut profile.plots[idx];
            plot.planted_at = now;
            plot.mutation = roll_mutation(&event.effect, modifiers.mutation_bonus, rng)
                .map(String::from);
        }

        if rng.gen::<f64>() < cfg.lucky_harvest_chance {
            if let Some(entry) = shop.entry(&seed_key) {
                if profile.inventory.len() < cfg.inventory_limit {
                    outcome.lucky_seeds.push(entry.produce(&mut profile.inventory));
                }
            }
        }
    }

    profile.balance += outcome.money_earned;
    outcome
}

/// Spend gems to make every plot ready immediately.
pub fn grow_all(profile: &mut GardenProfile, cfg: &GardenConfig) -> GrowAllOutcome {
    let cost = cfg.grow_all_cost_gems;
    if profile.gems < cost {
        return GrowAllOutcome::InsufficientGems {
            needed: cost,
            available: profile.gems,
        };
    }
    if profile.plots.is_empty() {
        return GrowAllOutcome::NoPlots;
    }

    for plot in &mut profile.plots {
        plot.planted_at = DateTime::UNIX_EPOCH;
    }
    profile.gems -= cost;
    GrowAllOutcome::Ripened {
        plots: profile.plots.len(),
        cost,
    }
}

/// Attempt to steal a ready crop from another player's garden.
///
/// Gem funds are validated before any roll or state change. On success the
/// thief is mutated here and the stolen plot's key is returned; the host
/// applies the victim's side with [`remove_stolen_plot`] and persists the
/// two records separately. A failure between the two writes can duplicate
/// or lose the item; that window is accepted unless the host's store
/// offers multi-key transactions.
pub fn steal_crop(
    thief: &mut GardenProfile,
    victim: &GardenProfile,
    shop: &GardenShop,
    event: &WorldEvent,
    cfg: &GardenConfig,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> (StealOutcome, Option<String>) {
    let cost = cfg.steal.cost_gems;
    if thief.gems < cost {
        return (
            StealOutcome::InsufficientGems {
                needed: cost,
                available: thief.gems,
            },
            None,
        );
    }

    let victim_modifiers = modifiers_from_inventory(&victim.inventory);
    let stealable: Vec<usize> = victim
        .plots
        .iter()
        .enumerate()
        .filter(|(_, plot)| is_ready(plot, &victim_modifiers, &event.effect, now))
        .map(|(idx, _)| idx)
        .collect();
    if stealable.is_empty() {
        return (StealOutcome::NothingToSteal, None);
    }

    let success = rng.gen::<f64>() > cfg.steal.fail_chance;
    if !success {
        thief.balance += cfg.steal.compensation;
        debug!("steal by {} failed, compensated {}", thief.username, cfg.steal.compensation);
        return (
            StealOutcome::Failed {
                compensation: cfg.steal.compensation,
            },
            None,
        );
    }

    let target_idx = stealable[rng.gen_range(0..stealable.len())];
    let target = &victim.plots[target_idx];
    let item = shop.entry(&target.seed_key).and_then(|entry| {
        (thief.inventory.len() < cfg.inventory_limit)
            .then(|| entry.produce(&mut thief.inventory))
    });
    thief.gems -= cost;
    debug!(
        "{} stole {} from {}",
        thief.username, target.name, victim.username
    );
    (
        StealOutcome::Stolen {
            crop_name: target.name.clone(),
            icon: target.icon.clone(),
            mutation: target.mutation.clone(),
            item,
            cost,
        },
        Some(target.key.clone()),
    )
}

/// Remove a plot stolen by [`steal_crop`] from the victim's garden.
///
/// Split from the attempt so the host can run its own two-phase write:
/// persist the thief, then apply and persist the victim.
pub fn remove_stolen_plot(victim: &mut GardenProfile, plot_key: &str) -> bool {
    let before = victim.plots.len();
    victim.plots.retain(|plot| plot.key != plot_key);
    victim.plots.len() < before
}

/// Purchase a garden expansion.
pub fn expand_plot(
    profile: &mut GardenProfile,
    tier: ExpansionTier,
    cfg: &GardenConfig,
    now: DateTime<Utc>,
) -> ExpandOutcome {
    if profile.plot_limit >= cfg.plot_expansion_limit {
        return ExpandOutcome::LimitReached {
            limit: cfg.plot_expansion_limit,
        };
    }

    let (tier_cfg, last_purchase) = match tier {
        ExpansionTier::Side => (cfg.expansions.side, profile.expansions.side),
        ExpansionTier::RearOne => (cfg.expansions.rear_one, profile.expansions.rear_one),
        ExpansionTier::RearTwo => (cfg.expansions.rear_two, profile.expansions.rear_two),
    };

    if profile.balance < tier_cfg.cost {
        return ExpandOutcome::InsufficientFunds {
            needed: tier_cfg.cost,
            available: profile.balance,
        };
    }
    if let Some(last) = last_purchase {
        let elapsed = now.signed_duration_since(last).num_milliseconds();
        if elapsed < tier_cfg.cooldown_ms {
            return ExpandOutcome::OnCooldown {
                ready_in_ms: tier_cfg.cooldown_ms - elapsed,
            };
        }
    }

    profile.balance -= tier_cfg.cost;
    profile.plot_limit += tier_cfg.plots;
    profile.stats.expansions += 1;
    match tier {
        ExpansionTier::Side => profile.expansions.side = Some(now),
        ExpansionTier::RearOne => profile.expansions.rear_one = Some(now),
        ExpansionTier::RearTwo => profile.expansions.rear_two = Some(now),
    }
    ExpandOutcome::Expanded {
        added_plots: tier_cfg.plots,
        new_limit: profile.plot_limit,
        cost: tier_cfg.cost,
    }
}
