//! The base (non-event) shop catalog.
//!
//! Literal item data: prices, sell prices, crop templates and stock odds.
//! Mint and Glowshroom are retired from open sale (stock chance 0) but stay
//! listed so pet collection can still materialize them.

use crate::config::GROWTH_BASE_MS;
use crate::shop::CatalogEntry;
use crate::types::{CropSpec, Rarity, ToolSpec};

fn seed(
    key: &str,
    name: &str,
    icon: &str,
    flavor: &str,
    price: i64,
    rarity: Rarity,
    stock_chance: f64,
    growth_units: f64,
    harvests: u32,
) -> CatalogEntry {
    // Base-catalog seeds follow fixed ratios: sell for half the purchase
    // price, crops are worth double the purchase price.
    CatalogEntry::seed(
        key,
        name,
        icon,
        flavor,
        price,
        rarity,
        stock_chance,
        price / 2,
        CropSpec {
            base_value: price * 2,
            growth_time_ms: (GROWTH_BASE_MS as f64 * growth_units) as i64,
            harvests,
        },
    )
}

fn seed_valued(
    key: &str,
    name: &str,
    icon: &str,
    flavor: &str,
    price: i64,
    rarity: Rarity,
    stock_chance: f64,
    base_value: i64,
    growth_units: f64,
    harvests: u32,
) -> CatalogEntry {
    CatalogEntry::seed(
        key,
        name,
        icon,
        flavor,
        price,
        rarity,
        stock_chance,
        price / 2,
        CropSpec {
            base_value,
            growth_time_ms: (GROWTH_BASE_MS as f64 * growth_units) as i64,
            harvests,
        },
    )
}

/// Every entry the shop stocks outside of world events.
pub fn base_catalog() -> Vec<CatalogEntry> {
    vec![
        seed("gsCarrot", "Carrot Seed", "🥕", "A basic crop for quick profits.",
            10, Rarity::Common, 1.0, 1.0, 1),
        seed("gsStrawberry", "Strawberry Seed", "🍓", "Sweet berries with multiple harvests.",
            50, Rarity::Common, 1.0, 2.0, 3),
        seed("gsBlueberry", "Blueberry Seed", "🫐", "Tasty berries with multiple harvests.",
            400, Rarity::Uncommon, 0.5, 2.5, 3),
        seed("gsTomato", "Tomato Seed", "🍅", "Juicy tomatoes for big profits.",
            800, Rarity::Rare, 0.3, 3.0, 3),
        seed("gsWatermelon", "Watermelon Seed", "🍉", "A refreshing summer crop.",
            2500, Rarity::Legendary, 0.14, 4.0, 1),
        seed("gsOrangeTulip", "Orange Tulip Seed", "🌷", "A vibrant flower with steady returns.",
            500, Rarity::Uncommon, 0.6, 2.0, 2),
        seed("gsCorn", "Corn Seed", "🌽", "Golden kernels for hearty profits.",
            1200, Rarity::Rare, 0.4, 3.0, 2),
        seed("gsDaffodil", "Daffodil Seed", "🌼", "A cheerful bloom with good value.",
            1000, Rarity::Rare, 0.35, 2.5, 2),
        seed("gsRaspberry", "Raspberry Seed", "🍇", "Tart berries with repeat harvests.",
            1400, Rarity::Rare, 0.3, 2.5, 3),
        seed("gsPear", "Pear Seed", "🍐", "A mellow orchard staple.",
            1500, Rarity::Rare, 0.25, 3.0, 2),
        seed("gsPumpkin", "Pumpkin Seed", "🎃", "A hefty gourd for big sales.",
            3000, Rarity::Legendary, 0.15, 4.0, 1),
        seed_valued("gsApple", "Apple Seed", "🍎", "An orchard classic with many pickings.",
            3500, Rarity::Legendary, 0.12, 3500, 3.5, 4),
        seed("gsBamboo", "Bamboo Seed", "🎍", "Fast-growing stalks, fast profits.",
            4000, Rarity::Legendary, 0.1, 2.0, 3),
        seed("gsCoconut", "Coconut Seed", "🥥", "A tropical prize worth the wait.",
            5000, Rarity::Mythical, 0.07, 4.0, 2),
        seed("gsCactus", "Cactus Seed", "🌵", "Thrives on neglect, sells high.",
            5200, Rarity::Mythical, 0.06, 3.5, 1),
        seed_valued("gsDragonFruit", "Dragon Fruit Seed", "🐉", "An exotic fruit with endless harvests.",
            6000, Rarity::Mythical, 0.05, 3000, 5.0, 10),
        seed("gsMango", "Mango Seed", "🥭", "A sweet tropical delight.",
            5500, Rarity::Mythical, 0.06, 4.5, 2),
        seed("gsPeach", "Peach Seed", "🍑", "A fuzzy fruit with a soft spot for profit.",
            5000, Rarity::Mythical, 0.07, 4.0, 2),
        seed("gsPineapple", "Pineapple Seed", "🍍", "A spiky crown of tropical value.",
            5200, Rarity::Mythical, 0.06, 4.0, 1),
        seed("gsGrape", "Grape Seed", "🍇", "A divine vine with clustered returns.",
            4500, Rarity::Divine, 0.08, 3.5, 3),
        seed("gsMushroom", "Mushroom Seed", "🍄", "A shade-loving delicacy.",
            4000, Rarity::Divine, 0.09, 2.5, 3),
        seed("gsPepper", "Pepper Seed", "🌶️", "A fiery pod with hot margins.",
            4200, Rarity::Divine, 0.07, 3.0, 2),
        seed("gsCacao", "Cacao Seed", "🍫", "The raw stuff of chocolate fortunes.",
            4800, Rarity::Divine, 0.06, 3.5, 2),
        seed_valued("gsBeanstalk", "Beanstalk Seed", "🌿", "A towering stalk that keeps on giving.",
            7000, Rarity::Prismatic, 0.04, 3000, 5.0, 20),
        // Retired from open sale; pets still dig these up.
        seed("gsMint", "Mint Seed", "🍃", "Refreshing herb with culinary uses.",
            2200, Rarity::Rare, 0.0, 2.0, 2),
        seed("gsGlowshroom", "Glowshroom Seed", "🍄", "Bioluminescent mushroom with unique glow.",
            3000, Rarity::Rare, 0.0, 3.0, 2),
        CatalogEntry::pet_cage(
            "gpDog", "Dog", "🐶",
            "Caged pet. Uncage to dig up basic seeds!",
            100_000, Rarity::Common, 0.8, 50_000_000,
            0.05, &["gsCarrot", "gsStrawberry", "gsBlueberry", "gsTomato"],
        ),
        CatalogEntry::tool(
            "gtSprinkler", "Sprinkler", "💦",
            "Speeds up growth and encourages Wet mutations. You only need one of these in your inventory to work.",
            200, Rarity::Common, 0.7, 100,
            ToolSpec::with_growth(1.2).boost("Wet", 0.2),
        ),
        CatalogEntry::tool(
            "gtFertilizer", "Fertilizer", "🌿",
            "Increases Gold and Disco mutations. You only need one of these in your inventory to work.",
            500, Rarity::Uncommon, 0.5, 250,
            ToolSpec::with_growth(1.0).boost("Gold", 0.1).boost("Disco", 0.05),
        ),
    ]
}
