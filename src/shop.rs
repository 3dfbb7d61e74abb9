//! Garden shop: the purchasable catalog and its stock rotation.
//!
//! This module provides:
//! - [`CatalogEntry`], a purchasable template that yields one concrete item
//! - [`GardenShop`], the catalog plus stock state
//! - Explicit, idempotent synchronization with the active world event
//! - Rate-limited stochastic stock refresh

use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GardenConfig;
use crate::errors::GardenError;
use crate::events::WorldEvent;
use crate::types::{CropSpec, GardenItem, ItemKind, PetSpec, Rarity, ToolSpec};

/// A purchasable template: seed, caged pet, or tool.
///
/// Immutable catalog data except for `in_stock`, which the stock refresh
/// flips, and `event_item`, which marks entries that exist only while their
/// event is active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub flavor: String,
    pub price: i64,
    pub rarity: Rarity,
    /// Probability this entry is in stock after a refresh roll.
    pub stock_chance: f64,
    pub in_stock: bool,
    #[serde(default)]
    pub event_item: bool,
    /// The concrete item one purchase appends to an inventory.
    pub yields: GardenItem,
}

impl CatalogEntry {
    fn new(
        key: &str,
        name: &str,
        icon: &str,
        flavor: &str,
        price: i64,
        rarity: Rarity,
        stock_chance: f64,
        sell_price: i64,
        kind: ItemKind,
    ) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            flavor: flavor.to_string(),
            price,
            rarity,
            stock_chance,
            in_stock: true,
            event_item: false,
            yields: GardenItem {
                key: key.to_string(),
                name: name.to_string(),
                icon: icon.to_string(),
                flavor: flavor.to_string(),
                sell_price,
                kind,
                is_favorite: false,
            },
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn seed(
        key: &str,
        name: &str,
        icon: &str,
        flavor: &str,
        price: i64,
        rarity: Rarity,
        stock_chance: f64,
        sell_price: i64,
        crop: CropSpec,
    ) -> Self {
        Self::new(key, name, icon, flavor, price, rarity, stock_chance, sell_price, ItemKind::Seed(crop))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pet_cage(
        key: &str,
        name: &str,
        icon: &str,
        flavor: &str,
        price: i64,
        rarity: Rarity,
        stock_chance: f64,
        sell_price: i64,
        collection_rate: f64,
        seed_keys: &[&str],
    ) -> Self {
        let pet = PetSpec {
            pet_name: name.to_string(),
            collection_rate,
            seed_keys: seed_keys.iter().map(|k| k.to_string()).collect(),
        };
        Self::new(key, name, icon, flavor, price, rarity, stock_chance, sell_price, ItemKind::PetCage(pet))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tool(
        key: &str,
        name: &str,
        icon: &str,
        flavor: &str,
        price: i64,
        rarity: Rarity,
        stock_chance: f64,
        sell_price: i64,
        spec: ToolSpec,
    ) -> Self {
        Self::new(key, name, icon, flavor, price, rarity, stock_chance, sell_price, ItemKind::Tool(spec))
    }

    /// Mark this entry as exclusive to a world event.
    pub fn event_exclusive(mut self) -> Self {
        self.event_item = true;
        self
    }

    /// Append one concrete item to the inventory and return a copy of it.
    ///
    /// Capacity checks are the caller's responsibility.
    pub fn produce(&self, inventory: &mut Vec<GardenItem>) -> GardenItem {
        inventory.push(self.yields.clone());
        self.yields.clone()
    }
}

/// The shop: catalog entries plus the last stock-refresh instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenShop {
    pub entries: Vec<CatalogEntry>,
    pub last_restock: Option<DateTime<Utc>>,
}

impl GardenShop {
    /// A shop seeded with the full base (non-event) catalog.
    pub fn with_base_catalog() -> Self {
        Self {
            entries: crate::catalog::base_catalog(),
            last_restock: None,
        }
    }

    pub fn entry(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Entries currently purchasable.
    pub fn in_stock_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| entry.in_stock)
    }

    /// Align the catalog with the active event.
    ///
    /// Event-exclusive entries belonging to any other event are removed;
    /// the active event's exclusives are inserted if absent, in stock.
    /// Idempotent: repeated calls with the same event change nothing.
    pub fn sync_event(&mut self, event: &WorldEvent) {
        self.entries.retain(|entry| {
            !entry.event_item || event.shop_items.iter().any(|item| item.key == entry.key)
        });

        for item in &event.shop_items {
            if self.entry(&item.key).is_none() {
                let mut entry = item.clone();
                entry.event_item = true;
                entry.in_stock = true;
                self.entries.push(entry);
            }
        }
    }

    /// Re-roll which entries are in stock, at most once per refresh interval.
    ///
    /// Within the interval this is a no-op that performs zero RNG draws.
    /// On refresh the catalog is synced to the event first; event entries
    /// are always stocked, every other entry independently with its
    /// configured probability. Returns whether a refresh happened.
    pub fn refresh_stock(
        &mut self,
        event: &WorldEvent,
        cfg: &GardenConfig,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> bool {
        if let Some(last) = self.last_restock {
            let elapsed = now.signed_duration_since(last).num_milliseconds();
            if elapsed < cfg.stock_refresh_interval_ms {
                return false;
            }
        }
        self.last_restock = Some(now);

        self.sync_event(event);
        for entry in &mut self.entries {
            entry.in_stock = entry.event_item || rng.gen::<f64>() < entry.stock_chance;
        }
        debug!(
            "shop stock refreshed under {}: {}/{} entries in stock",
            event.name,
            self.entries.iter().filter(|e| e.in_stock).count(),
            self.entries.len()
        );
        true
    }

    /// Purchase by key: append exactly one concrete item to the inventory.
    ///
    /// Errors when the key is absent from the catalog; the caller is
    /// expected to have validated price and inventory capacity.
    pub fn purchase(
        &self,
        key: &str,
        inventory: &mut Vec<GardenItem>,
    ) -> Result<GardenItem, GardenError> {
        let entry = self
            .entry(key)
            .ok_or_else(|| GardenError::UnknownCatalogEntry(key.to_string()))?;
        Ok(entry.produce(inventory))
    }
}
