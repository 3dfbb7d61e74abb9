//! Canonical game constants and the tunable [`GardenConfig`].
//!
//! The constants below define the canonical balance of the game and must
//! stay stable across releases: persisted profiles and host-side messaging
//! both assume them. `GardenConfig::default()` reproduces them exactly;
//! hosts that want a rebalanced deployment can load overrides from TOML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Plot slots every garden starts with.
pub const PLOT_LIMIT: usize = 36;
/// Hard ceiling on plot slots, all expansions included.
pub const PLOT_EXPANSION_LIMIT: usize = 56;
/// Maximum active (uncaged) pets.
pub const PET_LIMIT: usize = 60;
/// Maximum pets equipped (collecting) at once.
pub const PET_EQUIP_LIMIT: usize = 8;
/// Uncaging auto-equips while fewer than this many pets are equipped.
pub const AUTO_EQUIP_THRESHOLD: usize = 3;
/// Maximum items a player inventory holds.
pub const INVENTORY_LIMIT: usize = 36;

/// Base growth unit for crop data: 5 minutes.
pub const GROWTH_BASE_MS: i64 = 5 * 60 * 1000;
/// Growth-time penalty on mutated crops with repeat harvests remaining.
pub const OVERGROWTH_PENALTY: f64 = 1.5;
/// Chance that a harvest also yields the crop's seed back.
pub const LUCKY_HARVEST_CHANCE: f64 = 0.05;

/// World events rotate on a fixed 4-hour cycle.
pub const EVENT_CYCLE_MS: i64 = 4 * 60 * 60 * 1000;
/// Shop stock re-rolls at most once per 5 minutes.
pub const STOCK_REFRESH_INTERVAL_MS: i64 = 5 * 60 * 1000;

/// Gem cost of a steal attempt.
pub const STEAL_COST_GEMS: i64 = 5;
/// Probability a steal attempt fails (success chance is the complement, 70%).
pub const STEAL_FAIL_CHANCE: f64 = 0.3;
/// Money paid to the thief as consolation on a failed steal.
pub const STEAL_COMPENSATION: i64 = 100;
/// Gem cost of instantly ripening every plot.
pub const GROW_ALL_COST_GEMS: i64 = 100;

/// One expansion tier: what it costs, what it grants, how often it can fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExpansionTierConfig {
    pub cost: i64,
    pub plots: usize,
    pub cooldown_ms: i64,
}

/// The three purchasable garden expansions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExpansionConfig {
    pub side: ExpansionTierConfig,
    pub rear_one: ExpansionTierConfig,
    pub rear_two: ExpansionTierConfig,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            side: ExpansionTierConfig {
                cost: 250_000_000,
                plots: 8,
                cooldown_ms: 0,
            },
            rear_one: ExpansionTierConfig {
                cost: 500_000_000,
                plots: 12,
                cooldown_ms: 24 * 60 * 60 * 1000,
            },
            rear_two: ExpansionTierConfig {
                cost: 1_000_000_000,
                plots: 12,
                cooldown_ms: 3 * 24 * 60 * 60 * 1000,
            },
        }
    }
}

/// Steal mechanics tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StealConfig {
    pub cost_gems: i64,
    /// Probability the attempt fails; the roll must exceed this to succeed.
    pub fail_chance: f64,
    pub compensation: i64,
}

impl Default for StealConfig {
    fn default() -> Self {
        Self {
            cost_gems: STEAL_COST_GEMS,
            fail_chance: STEAL_FAIL_CHANCE,
            compensation: STEAL_COMPENSATION,
        }
    }
}

/// All engine tunables in one place.
///
/// Every field has a serde default so hosts can override a subset in TOML
/// and inherit the canonical values for the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GardenConfig {
    pub plot_limit: usize,
    pub plot_expansion_limit: usize,
    pub pet_limit: usize,
    pub pet_equip_limit: usize,
    pub auto_equip_threshold: usize,
    pub inventory_limit: usize,
    pub overgrowth_penalty: f64,
    pub lucky_harvest_chance: f64,
    pub event_cycle_ms: i64,
    pub stock_refresh_interval_ms: i64,
    pub grow_all_cost_gems: i64,
    pub steal: StealConfig,
    pub expansions: ExpansionConfig,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            plot_limit: PLOT_LIMIT,
            plot_expansion_limit: PLOT_EXPANSION_LIMIT,
            pet_limit: PET_LIMIT,
            pet_equip_limit: PET_EQUIP_LIMIT,
            auto_equip_threshold: AUTO_EQUIP_THRESHOLD,
            inventory_limit: INVENTORY_LIMIT,
            overgrowth_penalty: OVERGROWTH_PENALTY,
            lucky_harvest_chance: LUCKY_HARVEST_CHANCE,
            event_cycle_ms: EVENT_CYCLE_MS,
            stock_refresh_interval_ms: STOCK_REFRESH_INTERVAL_MS,
            grow_all_cost_gems: GROW_ALL_COST_GEMS,
            steal: StealConfig::default(),
            expansions: ExpansionConfig::default(),
        }
    }
}

impl GardenConfig {
    /// Load a configuration from a TOML file, filling unspecified fields
    /// with the canonical defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: GardenConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_canonical_constants() {
        let cfg = GardenConfig::default();
        assert_eq!(cfg.plot_limit, 36);
        assert_eq!(cfg.plot_expansion_limit, 56);
        assert_eq!(cfg.pet_limit, 60);
        assert_eq!(cfg.pet_equip_limit, 8);
        assert_eq!(cfg.event_cycle_ms, 14_400_000);
        assert_eq!(cfg.stock_refresh_interval_ms, 300_000);
        assert_eq!(cfg.steal.cost_gems, 5);
        assert_eq!(cfg.steal.compensation, 100);
        assert_eq!(cfg.grow_all_cost_gems, 100);
        assert_eq!(cfg.expansions.side.cost, 250_000_000);
        assert_eq!(cfg.expansions.rear_one.cost, 500_000_000);
        assert_eq!(cfg.expansions.rear_two.cost, 1_000_000_000);
        assert_eq!(cfg.expansions.side.plots, 8);
        assert_eq!(cfg.expansions.rear_one.plots, 12);
        assert_eq!(cfg.expansions.rear_one.cooldown_ms, 86_400_000);
        assert_eq!(cfg.expansions.rear_two.cooldown_ms, 259_200_000);
    }

    #[test]
    fn load_partial_toml_inherits_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plot_limit = 10\n\n[steal]\ncost_gems = 9\nfail_chance = 0.5\ncompensation = 50").unwrap();

        let cfg = GardenConfig::load(file.path()).unwrap();
        assert_eq!(cfg.plot_limit, 10);
        assert_eq!(cfg.steal.cost_gems, 9);
        // Untouched sections keep their canonical values.
        assert_eq!(cfg.pet_limit, PET_LIMIT);
        assert_eq!(cfg.grow_all_cost_gems, GROW_ALL_COST_GEMS);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(GardenConfig::load("/nonexistent/garden.toml").is_err());
    }
}
