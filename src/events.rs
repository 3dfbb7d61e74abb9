//! World events and the deterministic event clock.
//!
//! Events rotate on a fixed cycle as a pure function of wall-clock time:
//! no randomness, no stored state. Each event carries multiplicative
//! effects on growth and mutation odds plus its exclusive shop entries;
//! the first event in the rotation is the zero-effect baseline.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{EVENT_CYCLE_MS, GROWTH_BASE_MS};
use crate::shop::CatalogEntry;
use crate::types::{CropSpec, Rarity, ToolSpec};

/// Multiplicative effects of a world event. Fields default to neutral
/// values so "no event" is just `EventEffect::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventEffect {
    /// Added to the mutation-chance bonus factor.
    #[serde(default)]
    pub mutation_chance: f64,
    /// Divides stored growth times; above 1 grows faster.
    #[serde(default = "default_growth_multiplier")]
    pub growth_multiplier: f64,
    /// Mutation moved to the front of the roll order while active.
    #[serde(default)]
    pub mutation_type: Option<String>,
}

fn default_growth_multiplier() -> f64 {
    1.0
}

impl Default for EventEffect {
    fn default() -> Self {
        Self {
            mutation_chance: 0.0,
            growth_multiplier: 1.0,
            mutation_type: None,
        }
    }
}

/// One entry in the fixed event rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldEvent {
    pub name: &'static str,
    pub icon: &'static str,
    pub effect: EventEffect,
    /// Catalog entries that exist only while this event is active.
    pub shop_items: Vec<CatalogEntry>,
}

impl WorldEvent {
    /// True for the zero-effect baseline slot.
    pub fn is_no_event(&self) -> bool {
        self.effect == EventEffect::default() && self.shop_items.is_empty()
    }
}

fn effect(mutation_chance: f64, growth_multiplier: f64, mutation_type: &str) -> EventEffect {
    EventEffect {
        mutation_chance,
        growth_multiplier,
        mutation_type: Some(mutation_type.to_string()),
    }
}

/// The full event rotation, in cycle order.
pub fn world_events() -> Vec<WorldEvent> {
    vec![
        WorldEvent {
            name: "No Event",
            icon: "🌱",
            effect: EventEffect::default(),
            shop_items: Vec::new(),
        },
        WorldEvent {
            name: "Frost",
            icon: "❄️",
            effect: effect(0.2, 0.9, "Chilled"),
            shop_items: Vec::new(),
        },
        WorldEvent {
            name: "Thunderstorm",
            icon: "⛈️",
            effect: effect(0.25, 1.5, "Shocked"),
            shop_items: vec![CatalogEntry::seed(
                "gsLotus",
                "Lotus Seed",
                "🪷",
                "A rare seed available during Thunderstorm!",
                500,
                Rarity::Divine,
                0.1,
                250,
                CropSpec { base_value: 1000, growth_time_ms: GROWTH_BASE_MS * 3, harvests: 1 },
            )
            .event_exclusive()],
        },
        WorldEvent {
            name: "Easter Event 2025",
            icon: "🐣",
            effect: effect(0.2, 1.2, "Chocolate"),
            shop_items: easter_items(),
        },
        WorldEvent {
            name: "Angry Plant Event",
            icon: "🌿😣",
            effect: effect(0.25, 1.1, "Angry"),
            shop_items: angry_plant_items(),
        },
        WorldEvent {
            name: "Lunar Glow Event",
            icon: "🌙",
            effect: effect(0.3, 1.3, "Moonlit"),
            shop_items: lunar_glow_items(),
        },
        WorldEvent {
            name: "Blood Moon",
            icon: "🌑",
            effect: effect(0.2, 0.8, "Bloodlit"),
            shop_items: vec![CatalogEntry::seed(
                "gsBloodRose",
                "Blood Rose Seed",
                "🌹",
                "A rare seed available during Blood Moon!",
                250,
                Rarity::Divine,
                0.1,
                125,
                CropSpec { base_value: 500, growth_time_ms: GROWTH_BASE_MS * 3, harvests: 1 },
            )
            .event_exclusive()],
        },
        WorldEvent {
            name: "Rainy Days",
            icon: "☔",
            effect: effect(0.3, 1.5, "Wet"),
            shop_items: Vec::new(),
        },
    ]
}

fn easter_items() -> Vec<CatalogEntry> {
    let b = GROWTH_BASE_MS as f64;
    vec![
        CatalogEntry::seed(
            "gsChocoCarrot", "Chocolate Carrot Seed", "🍫",
            "A sweet carrot from the Easter Event!",
            200, Rarity::Common, 1.0, 100,
            CropSpec { base_value: 400, growth_time_ms: (b * 1.5) as i64, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsRedLollipop", "Red Lollipop Seed", "🍭",
            "A sugary treat from the Easter Event.",
            500, Rarity::Uncommon, 0.8, 250,
            CropSpec { base_value: 1000, growth_time_ms: GROWTH_BASE_MS * 2, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsCandySunflower", "Candy Sunflower Seed", "🌻",
            "A radiant flower from the Easter Event.",
            1200, Rarity::Rare, 0.5, 600,
            CropSpec { base_value: 2400, growth_time_ms: (b * 2.5) as i64, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsEasterEgg", "Easter Egg Seed", "🥚",
            "A festive egg from the Easter Event.",
            3000, Rarity::Legendary, 0.3, 1500,
            CropSpec { base_value: 6000, growth_time_ms: GROWTH_BASE_MS * 3, harvests: 1 },
        ),
        CatalogEntry::seed(
            "gsCandyBlossom", "Candy Blossom Seed", "🌸",
            "A divine bloom from the Easter Event.",
            6000, Rarity::Divine, 0.1, 3000,
            CropSpec { base_value: 12_000, growth_time_ms: GROWTH_BASE_MS * 4, harvests: 1 },
        ),
        CatalogEntry::tool(
            "gtChocoSprinkler", "Chocolate Sprinkler", "🍫💦",
            "Boosts Chocolate mutations for Easter crops.",
            1000, Rarity::Rare, 0.4, 500,
            ToolSpec::with_growth(1.2).boost("Chocolate", 0.3),
        ),
    ]
    .into_iter()
    .map(CatalogEntry::event_exclusive)
    .collect()
}

fn angry_plant_items() -> Vec<CatalogEntry> {
    let b = GROWTH_BASE_MS as f64;
    vec![
        CatalogEntry::seed(
            "gsCranberry", "Cranberry Seed", "🍒",
            "A tart fruit from the Angry Plant Event.",
            3500, Rarity::Legendary, 0.3, 1750,
            CropSpec { base_value: 7000, growth_time_ms: (b * 3.5) as i64, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsDurian", "Durian Seed", "🥭",
            "A pungent fruit from the Angry Plant Event.",
            4000, Rarity::Legendary, 0.25, 2000,
            CropSpec { base_value: 8000, growth_time_ms: (b * 3.5) as i64, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsEggplant", "Eggplant Seed", "🍆",
            "A versatile veggie from the Angry Plant Event.",
            5000, Rarity::Mythical, 0.2, 2500,
            CropSpec { base_value: 10_000, growth_time_ms: GROWTH_BASE_MS * 4, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsLotus", "Lotus Seed", "🪷",
            "A serene flower from the Angry Plant Event.",
            6000, Rarity::Divine, 0.15, 3000,
            CropSpec { base_value: 12_000, growth_time_ms: GROWTH_BASE_MS * 4, harvests: 1 },
        ),
        CatalogEntry::seed(
            "gsVenusFlyTrap", "Venus Fly Trap Seed", "🪴",
            "A carnivorous plant from the Angry Plant Event.",
            6500, Rarity::Divine, 0.1, 3250,
            CropSpec { base_value: 13_000, growth_time_ms: (b * 4.5) as i64, harvests: 1 },
        ),
    ]
    .into_iter()
    .map(CatalogEntry::event_exclusive)
    .collect()
}

fn lunar_glow_items() -> Vec<CatalogEntry> {
    let b = GROWTH_BASE_MS as f64;
    vec![
        CatalogEntry::seed(
            "gsMoonflower", "Moonflower Seed", "🌙",
            "Rare flower blooming under moonlight.",
            8000, Rarity::Legendary, 0.2, 4000,
            CropSpec { base_value: 16_000, growth_time_ms: (b * 4.5) as i64, harvests: 1 },
        ),
        CatalogEntry::seed(
            "gsMint", "Mint Seed", "🍃",
            "Refreshing herb with culinary uses.",
            2200, Rarity::Rare, 0.5, 1100,
            CropSpec { base_value: 4400, growth_time_ms: GROWTH_BASE_MS * 2, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsGlowshroom", "Glowshroom Seed", "🍄",
            "Bioluminescent mushroom with unique glow.",
            3000, Rarity::Rare, 0.4, 1500,
            CropSpec { base_value: 6000, growth_time_ms: GROWTH_BASE_MS * 3, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsStarfruit", "Starfruit Seed", "🌟",
            "A radiant fruit from the Lunar Glow Event.",
            3500, Rarity::Legendary, 0.3, 1750,
            CropSpec { base_value: 7000, growth_time_ms: (b * 3.5) as i64, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsMoonglow", "Moonglow Seed", "🌼",
            "A glowing flower from the Lunar Glow Event.",
            4000, Rarity::Legendary, 0.25, 2000,
            CropSpec { base_value: 8000, growth_time_ms: (b * 3.5) as i64, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsMoonBlossom", "Moon Blossom Seed", "🌸",
            "A divine bloom from the Lunar Glow Event.",
            6000, Rarity::Divine, 0.15, 3000,
            CropSpec { base_value: 12_000, growth_time_ms: GROWTH_BASE_MS * 4, harvests: 1 },
        ),
        CatalogEntry::seed(
            "gsBloodBanana", "Blood Banana Seed", "🍌",
            "A rare fruit from the Lunar Glow Event.",
            5500, Rarity::Mythical, 0.2, 2750,
            CropSpec { base_value: 11_000, growth_time_ms: GROWTH_BASE_MS * 4, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsMoonMelon", "Moon Melon Seed", "🍈",
            "A juicy melon from the Lunar Glow Event.",
            5200, Rarity::Mythical, 0.2, 2600,
            CropSpec { base_value: 10_400, growth_time_ms: GROWTH_BASE_MS * 4, harvests: 1 },
        ),
        CatalogEntry::seed(
            "gsCelestiberry", "Celestiberry Seed", "🫐",
            "A celestial berry from the Lunar Glow Event.",
            5000, Rarity::Mythical, 0.2, 2500,
            CropSpec { base_value: 10_000, growth_time_ms: GROWTH_BASE_MS * 4, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsMoonMango", "Moon Mango Seed", "🥭",
            "A tropical fruit from the Lunar Glow Event.",
            5500, Rarity::Mythical, 0.2, 2750,
            CropSpec { base_value: 11_000, growth_time_ms: (b * 4.5) as i64, harvests: 2 },
        ),
        CatalogEntry::seed(
            "gsNightshade", "Nightshade Seed", "🌑",
            "A mysterious crop from the Lunar Glow Event.",
            4500, Rarity::Legendary, 0.25, 2250,
            CropSpec { base_value: 9000, growth_time_ms: (b * 3.5) as i64, harvests: 2 },
        ),
        CatalogEntry::pet_cage(
            "gpHedgehog", "Hedgehog", "🦔",
            "Caged pet. Uncage to dig up Lunar seeds!",
            2_000_000, Rarity::Uncommon, 0.6, 1_000_000,
            0.1, &["gsMoonflower", "gsMint", "gsGlowshroom"],
        ),
        CatalogEntry::pet_cage(
            "gpMole", "Mole", "🐹",
            "Caged pet. Uncage to dig up Lunar seeds!",
            2_500_000, Rarity::Uncommon, 0.5, 1_250_000,
            0.1, &["gsStarfruit", "gsMoonglow", "gsNightshade"],
        ),
        CatalogEntry::pet_cage(
            "gpFrog", "Frog", "🐸",
            "Caged pet. Uncage to dig up Lunar seeds!",
            2_000_000, Rarity::Uncommon, 0.6, 1_000_000,
            0.1, &["gsMoonBlossom", "gsBloodBanana", "gsMoonMelon"],
        ),
        CatalogEntry::pet_cage(
            "gpEchoFrog", "Echo Frog", "🐸🌙",
            "Caged pet. Uncage to dig up Lunar seeds!",
            3_000_000, Rarity::Rare, 0.4, 1_500_000,
            0.15, &["gsCelestiberry", "gsMoonMango"],
        ),
        CatalogEntry::pet_cage(
            "gpNightOwl", "Night Owl", "🦇",
            "Caged pet. Uncage to dig up Lunar seeds!",
            3_500_000, Rarity::Rare, 0.3, 1_750_000,
            0.15, &["gsMoonflower", "gsMoonglow", "gsMoonBlossom"],
        ),
        CatalogEntry::pet_cage(
            "gpRaccoon", "Raccoon", "🦝",
            "Caged pet. Uncage to dig up Lunar seeds!",
            3_000_000, Rarity::Rare, 0.4, 1_500_000,
            0.15, &["gsBloodBanana", "gsMoonMelon", "gsCelestiberry"],
        ),
        CatalogEntry::pet_cage(
            "gpKiwi", "Kiwi", "🥝",
            "Caged pet. Uncage to dig up Lunar seeds!",
            4_000_000, Rarity::Legendary, 0.2, 2_000_000,
            0.2, &["gsMoonMango", "gsNightshade"],
        ),
        CatalogEntry::pet_cage(
            "gpOwl", "Owl", "🦉",
            "Caged pet. Uncage to dig up Lunar seeds!",
            5_000_000, Rarity::Legendary, 0.15, 2_500_000,
            0.2, &["gsMoonflower", "gsStarfruit", "gsMoonglow"],
        ),
        CatalogEntry::pet_cage(
            "gpBloodKiwi", "Blood Kiwi", "🥝🌑",
            "Caged pet. Uncage to dig up Lunar seeds!",
            6_000_000, Rarity::Mythical, 0.1, 3_000_000,
            0.25, &["gsBloodBanana", "gsMoonMelon"],
        ),
        CatalogEntry::pet_cage(
            "gpBloodHedgehog", "Blood Hedgehog", "🦔🌑",
            "Caged pet. Uncage to dig up Lunar seeds!",
            6_000_000, Rarity::Mythical, 0.1, 3_000_000,
            0.25, &["gsCelestiberry", "gsMoonMango"],
        ),
        CatalogEntry::pet_cage(
            "gpBloodOwl", "Blood Owl", "🦉🌑",
            "Caged pet. Uncage to dig up Lunar seeds!",
            6_500_000, Rarity::Mythical, 0.1, 3_250_000,
            0.25, &["gsMoonflower", "gsMoonglow"],
        ),
        CatalogEntry::pet_cage(
            "gpChickenZombie", "Chicken Zombie", "🐔💀",
            "Caged pet. Uncage to dig up Lunar seeds!",
            7_000_000, Rarity::Divine, 0.05, 3500,
            0.3, &["gsNightshade", "gsMoonBlossom"],
        ),
        CatalogEntry::tool(
            "gtNightStaff", "Night Staff", "🌟",
            "Channels moonlight into faster, stranger growth.",
            1500, Rarity::Rare, 0.4, 750,
            ToolSpec::with_growth(1.3).boost("Moonlit", 0.3),
        ),
        CatalogEntry::tool(
            "gtNightEgg", "Night Egg", "🥚🌙",
            "A faintly warm egg that hurries crops along.",
            1000, Rarity::Uncommon, 0.5, 500,
            ToolSpec::with_growth(1.1),
        ),
        CatalogEntry::tool(
            "gtStarCaller", "Star Caller", "📡",
            "Draws celestial influence down onto the garden.",
            2000, Rarity::Rare, 0.3, 1000,
            ToolSpec::with_growth(1.2).boost("Celestial", 0.2),
        ),
    ]
    .into_iter()
    .map(CatalogEntry::event_exclusive)
    .collect()
}

/// The event active at `now`.
pub fn current_event(now: DateTime<Utc>) -> WorldEvent {
    let events = world_events();
    let index = (now.timestamp_millis().div_euclid(EVENT_CYCLE_MS))
        .rem_euclid(events.len() as i64) as usize;
    events.into_iter().nth(index).expect("rotation is non-empty")
}

/// Time remaining until the rotation advances.
pub fn time_until_next_event(now: DateTime<Utc>) -> Duration {
    let into_cycle = now.timestamp_millis().rem_euclid(EVENT_CYCLE_MS);
    Duration::milliseconds(EVENT_CYCLE_MS - into_cycle)
}
