//! # Growgarden - Idle Garden Engine for Chat Hosts
//!
//! Growgarden is the economy and progression core of a chat-hosted idle
//! garden game: players grow crops on a limited set of plots, collect
//! randomly mutated variants with multiplied value, keep pets that
//! passively dig up seeds, and spend their earnings on capacity.
//!
//! The crate owns the simulation only. A host application (a chat bot, a
//! BBS, anything with a command surface) parses player input, loads the
//! player's [`types::GardenProfile`] from its own storage, calls the
//! operations here with plain data plus the current wall-clock time, and
//! renders the returned outcome values however it likes. No messaging,
//! persistence, or session handling happens in this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use growgarden::config::GardenConfig;
//! use growgarden::events::current_event;
//! use growgarden::garden::plant_seeds;
//! use growgarden::shop::GardenShop;
//! use growgarden::types::GardenProfile;
//!
//! let cfg = GardenConfig::default();
//! let mut shop = GardenShop::with_base_catalog();
//! let mut profile = GardenProfile::new("alice");
//! let now = Utc::now();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! // Once per request: align the catalog with the active event and
//! // re-roll stock if the refresh interval has elapsed.
//! let event = current_event(now);
//! shop.refresh_stock(&event, &cfg, now, &mut rng);
//!
//! // Buy and plant a seed.
//! profile.balance = 100;
//! let item = shop.purchase("gsCarrot", &mut profile.inventory).unwrap();
//! profile.balance -= shop.entry("gsCarrot").unwrap().price;
//! plant_seeds(&mut profile, &item.key, 1, &event, &cfg, now, &mut rng);
//! ```
//!
//! ## Module Organization
//!
//! - [`events`] - The fixed world-event rotation and deterministic clock
//! - [`shop`] - Catalog entries, event sync, and stochastic stock refresh
//! - [`catalog`] - The base (non-event) item data
//! - [`growth`] - Tool modifiers, effective growth time, readiness
//! - [`mutation`] - The mutation table and weighted roll
//! - [`economy`] - Crop valuation and the wealth multiplier
//! - [`garden`] - Plant, harvest, grow-all, steal, and expand operations
//! - [`pets`] - Pet management and the passive collection scheduler
//! - [`achievements`] - Threshold achievements with one-time rewards
//! - [`config`] - Canonical constants and host-tunable configuration
//!
//! ## Concurrency
//!
//! Operations are synchronous, single-threaded, read-modify-write over one
//! profile at a time. The engine assumes the host serializes requests per
//! player or tolerates last-write-wins; concurrent requests for the same
//! player are not serialized here. The shop is per-process shared state
//! whose refresh is idempotent enough to tolerate lost updates.

pub mod achievements;
pub mod catalog;
pub mod config;
pub mod economy;
pub mod errors;
pub mod events;
pub mod garden;
pub mod growth;
pub mod mutation;
pub mod pets;
pub mod shop;
pub mod types;

pub use achievements::{evaluate as evaluate_achievements, UnlockedAchievement, ACHIEVEMENTS};
pub use config::GardenConfig;
pub use errors::GardenError;
pub use events::{current_event, time_until_next_event, world_events, EventEffect, WorldEvent};
pub use garden::{
    expand_plot, grow_all, harvest_ready, plant_seeds, remove_stolen_plot, steal_crop,
    ExpandOutcome, ExpansionTier, GrowAllOutcome, HarvestOutcome, PlantOutcome, StealOutcome,
};
pub use growth::{effective_growth_ms, is_ready, modifiers_from_inventory, ready_at};
pub use pets::{
    collect_from_pets, set_pet_equipped, uncage_pet, EquipOutcome, PetCollection, UncageOutcome,
};
pub use shop::{CatalogEntry, GardenShop};
pub use types::{ActivePet, GardenItem, GardenPlot, GardenProfile, GardenStats, ItemKind};
