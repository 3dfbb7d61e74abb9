//! Growth timing: tool modifiers, effective growth time, readiness.
//!
//! A plot stores its seed's original growth time; everything here is
//! re-derived from that stored value plus the current inventory snapshot
//! and active event. Nothing is written back, so reading a plot's timing
//! any number of times never compounds the modifiers.

use chrono::{DateTime, Duration, Utc};

use crate::config::OVERGROWTH_PENALTY;
use crate::events::EventEffect;
use crate::types::{GardenItem, GardenPlot};

/// Passive modifiers contributed by the tools currently in an inventory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolModifiers {
    /// Product of every tool's growth multiplier; divides growth times.
    pub growth_multiplier: f64,
    /// Sum of every tool's mutation-boost values, across all mutation
    /// names. Added to the mutation roll's bonus factor.
    pub mutation_bonus: f64,
}

impl Default for ToolModifiers {
    fn default() -> Self {
        Self {
            growth_multiplier: 1.0,
            mutation_bonus: 0.0,
        }
    }
}

/// Derive the active modifiers from an inventory snapshot.
///
/// Pure and cheap; call it fresh per operation rather than caching, since
/// any purchase or sale changes the answer.
pub fn modifiers_from_inventory(inventory: &[GardenItem]) -> ToolModifiers {
    let mut modifiers = ToolModifiers::default();
    for item in inventory {
        if let Some(tool) = item.as_tool() {
            if let Some(multiplier) = tool.growth_multiplier {
                modifiers.growth_multiplier *= multiplier;
            }
            for bonus in tool.mutation_boosts.values() {
                modifiers.mutation_bonus += bonus;
            }
        }
    }
    modifiers
}

/// Effective growth duration for a plot under the given modifiers.
///
/// The stored time is divided by the combined growth multiplier, then the
/// overgrowth penalty applies to mutated crops with repeat harvests left.
pub fn effective_growth_ms(
    plot: &GardenPlot,
    modifiers: &ToolModifiers,
    effect: &EventEffect,
) -> i64 {
    let combined = effect.growth_multiplier * modifiers.growth_multiplier;
    let mut ms = if combined > 0.0 {
        (plot.growth_time_ms as f64 / combined).floor() as i64
    } else {
        plot.growth_time_ms
    };
    if plot.mutation.is_some() && plot.harvests_left > 1 {
        ms = (ms as f64 * OVERGROWTH_PENALTY).floor() as i64;
    }
    ms.max(0)
}

/// The instant this plot becomes harvestable.
pub fn ready_at(
    plot: &GardenPlot,
    modifiers: &ToolModifiers,
    effect: &EventEffect,
) -> DateTime<Utc> {
    plot.planted_at + Duration::milliseconds(effective_growth_ms(plot, modifiers, effect))
}

/// Whether the plot can be harvested (or stolen) right now.
///
/// Favorited plots are never ready, regardless of elapsed time.
pub fn is_ready(
    plot: &GardenPlot,
    modifiers: &ToolModifiers,
    effect: &EventEffect,
    now: DateTime<Utc>,
) -> bool {
    !plot.is_favorite && now >= ready_at(plot, modifiers, effect)
}
