use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::PLOT_LIMIT;
use crate::errors::GardenError;

pub const PROFILE_SCHEMA_VERSION: u8 = 1;

/// Shop rarity tiers, lowest to highest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythical,
    Divine,
    Prismatic,
}

/// Crop template carried by a seed item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropSpec {
    pub base_value: i64,
    pub growth_time_ms: i64,
    pub harvests: u32,
}

/// Pet template carried by a caged-pet item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetSpec {
    pub pet_name: String,
    /// Collection events accrued per real-time minute while equipped.
    pub collection_rate: f64,
    /// Catalog keys of the seeds this pet can dig up.
    pub seed_keys: Vec<String>,
}

/// Passive effect carried by a tool item. Any tool present in the
/// inventory contributes; there is no separate equip step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ToolSpec {
    #[serde(default)]
    pub growth_multiplier: Option<f64>,
    /// Mutation-chance bonus keyed by mutation name.
    #[serde(default)]
    pub mutation_boosts: HashMap<String, f64>,
}

impl ToolSpec {
    pub fn with_growth(multiplier: f64) -> Self {
        Self {
            growth_multiplier: Some(multiplier),
            mutation_boosts: HashMap::new(),
        }
    }

    pub fn boost(mut self, mutation: &str, bonus: f64) -> Self {
        self.mutation_boosts.insert(mutation.to_string(), bonus);
        self
    }
}

/// The three concrete item families a catalog entry can yield.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Seed(CropSpec),
    PetCage(PetSpec),
    Tool(ToolSpec),
}

/// One inventory item instance. Inventories hold one element per instance,
/// so owning three carrot seeds means three entries with the same key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenItem {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub flavor: String,
    pub sell_price: i64,
    pub kind: ItemKind,
    /// Favorited items are protected from bulk sale by the host.
    #[serde(default)]
    pub is_favorite: bool,
}

impl GardenItem {
    pub fn as_seed(&self) -> Option<&CropSpec> {
        match &self.kind {
            ItemKind::Seed(crop) => Some(crop),
            _ => None,
        }
    }

    pub fn as_pet_cage(&self) -> Option<&PetSpec> {
        match &self.kind {
            ItemKind::PetCage(pet) => Some(pet),
            _ => None,
        }
    }

    pub fn as_tool(&self) -> Option<&ToolSpec> {
        match &self.kind {
            ItemKind::Tool(tool) => Some(tool),
            _ => None,
        }
    }
}

/// A planted crop occupying one plot slot.
///
/// `growth_time_ms` stores the seed's original growth time; the effective
/// duration under tools and the active event is re-derived on every read
/// (see [`crate::growth`]), never written back here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenPlot {
    pub key: String,
    pub seed_key: String,
    pub name: String,
    pub icon: String,
    pub planted_at: DateTime<Utc>,
    pub growth_time_ms: i64,
    pub harvests_left: u32,
    pub base_value: i64,
    #[serde(default)]
    pub mutation: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// An uncaged pet. Only equipped pets accrue collection ticks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivePet {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub last_collect: DateTime<Utc>,
    pub pet: PetSpec,
    pub is_equipped: bool,
}

/// Cumulative garden counters. Monotone outside of admin resets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GardenStats {
    #[serde(default)]
    pub plots_harvested: u64,
    #[serde(default)]
    pub mutations_found: u64,
    #[serde(default)]
    pub expansions: u32,
    /// Keys of achievements already granted, exactly once each.
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Per-tier timestamps of the last purchased expansion, for cooldowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ExpansionHistory {
    #[serde(default)]
    pub side: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rear_one: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rear_two: Option<DateTime<Utc>>,
}

/// The full per-player garden record the host persists.
///
/// The engine mutates a loaded profile in place; the host writes it back
/// under its own key with whatever atomicity its store provides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenProfile {
    pub username: String,
    /// Money balance.
    pub balance: i64,
    /// Premium currency spent on steals and instant growth.
    #[serde(default)]
    pub gems: i64,
    #[serde(default)]
    pub plots: Vec<GardenPlot>,
    #[serde(default)]
    pub pets: Vec<ActivePet>,
    #[serde(default)]
    pub inventory: Vec<GardenItem>,
    #[serde(default)]
    pub stats: GardenStats,
    #[serde(default = "default_plot_limit")]
    pub plot_limit: usize,
    #[serde(default)]
    pub expansions: ExpansionHistory,
    /// Lifetime profit earned from harvests; drives the wealth multiplier.
    #[serde(default)]
    pub garden_earns: i64,
    pub schema_version: u8,
}

fn default_plot_limit() -> usize {
    PLOT_LIMIT
}

impl GardenProfile {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            balance: 0,
            gems: 0,
            plots: Vec::new(),
            pets: Vec::new(),
            inventory: Vec::new(),
            stats: GardenStats::default(),
            plot_limit: PLOT_LIMIT,
            expansions: ExpansionHistory::default(),
            garden_earns: 0,
            schema_version: PROFILE_SCHEMA_VERSION,
        }
    }

    /// Plot slots still open for planting.
    pub fn free_plots(&self) -> usize {
        self.plot_limit.saturating_sub(self.plots.len())
    }

    /// Count of inventory items with the given catalog key.
    pub fn item_count(&self, key: &str) -> usize {
        self.inventory.iter().filter(|item| item.key == key).count()
    }

    /// Remove and return one inventory item with the given key.
    pub fn take_item(&mut self, key: &str) -> Option<GardenItem> {
        let idx = self.inventory.iter().position(|item| item.key == key)?;
        Some(self.inventory.remove(idx))
    }

    /// Snapshot of every tool currently in the inventory.
    pub fn tools(&self) -> Vec<&GardenItem> {
        self.inventory
            .iter()
            .filter(|item| matches!(item.kind, ItemKind::Tool(_)))
            .collect()
    }

    pub fn equipped_pet_count(&self) -> usize {
        self.pets.iter().filter(|pet| pet.is_equipped).count()
    }

    pub fn has_active_pet(&self, key: &str) -> bool {
        self.pets.iter().any(|pet| pet.key == key)
    }

    /// Decode a profile from the host's JSON record, rejecting records
    /// written by an incompatible schema.
    pub fn from_json(raw: &str) -> Result<Self, GardenError> {
        let profile: GardenProfile = serde_json::from_str(raw)?;
        if profile.schema_version != PROFILE_SCHEMA_VERSION {
            return Err(GardenError::SchemaMismatch {
                entity: "garden_profile",
                expected: PROFILE_SCHEMA_VERSION,
                found: profile.schema_version,
            });
        }
        Ok(profile)
    }

    /// Encode the profile for the host's storage layer.
    pub fn to_json(&self) -> Result<String, GardenError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_has_canonical_limits() {
        let profile = GardenProfile::new("farmer");
        assert_eq!(profile.plot_limit, PLOT_LIMIT);
        assert_eq!(profile.free_plots(), PLOT_LIMIT);
        assert_eq!(profile.schema_version, PROFILE_SCHEMA_VERSION);
    }

    #[test]
    fn item_count_and_take_item_track_instances() {
        let mut profile = GardenProfile::new("farmer");
        for _ in 0..3 {
            profile.inventory.push(GardenItem {
                key: "gsCarrot".into(),
                name: "Carrot Seed".into(),
                icon: "🥕".into(),
                flavor: "A basic crop for quick profits.".into(),
                sell_price: 5,
                kind: ItemKind::Seed(CropSpec {
                    base_value: 20,
                    growth_time_ms: 300_000,
                    harvests: 1,
                }),
                is_favorite: false,
            });
        }

        assert_eq!(profile.item_count("gsCarrot"), 3);
        let taken = profile.take_item("gsCarrot").unwrap();
        assert_eq!(taken.key, "gsCarrot");
        assert_eq!(profile.item_count("gsCarrot"), 2);
        assert!(profile.take_item("gsMissing").is_none());
    }

    #[test]
    fn profile_round_trips_through_json_with_defaults() {
        let profile = GardenProfile::new("farmer");
        let json = serde_json::to_string(&profile).unwrap();
        let back: GardenProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);

        // Minimal record from an older host version deserializes with defaults.
        let minimal = r#"{"username":"old","balance":50,"schema_version":1}"#;
        let old: GardenProfile = serde_json::from_str(minimal).unwrap();
        assert_eq!(old.plot_limit, PLOT_LIMIT);
        assert!(old.plots.is_empty());
        assert_eq!(old.garden_earns, 0);
    }

    #[test]
    fn from_json_rejects_unknown_schema_versions() {
        let record = r#"{"username":"future","balance":0,"schema_version":9}"#;
        match GardenProfile::from_json(record) {
            Err(GardenError::SchemaMismatch { expected, found, .. }) => {
                assert_eq!(expected, PROFILE_SCHEMA_VERSION);
                assert_eq!(found, 9);
            }
            other => panic!("expected a schema mismatch, got {:?}", other),
        }

        let good = GardenProfile::new("farmer").to_json().unwrap();
        assert!(GardenProfile::from_json(&good).is_ok());
    }
}
