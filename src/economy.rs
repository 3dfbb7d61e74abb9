//! Crop valuation: the reward curve of the whole game.
//!
//! The formula and its floor/clamp order define game balance; change
//! nothing here without a rebalance pass.

use crate::mutation::mutation_multiplier;
use crate::types::GardenPlot;

/// Ceiling on the wealth multiplier, preventing runaway scaling.
const WEALTH_MULTIPLIER_CAP: f64 = 1_000_000_000.0;

/// Diminishing-returns scale-up driven by lifetime garden profit.
///
/// `clamp((earnings / 100_000)^0.2, 1, 1e9)`: a fifth-root curve with a
/// floor of 1 so it never reduces value. Non-positive earnings (and the
/// NaN a negative base would produce) clamp to 1.
pub fn wealth_multiplier(lifetime_earnings: i64) -> f64 {
    let scaled = (lifetime_earnings as f64 / 100_000.0).powf(0.2);
    if !scaled.is_finite() {
        return 1.0;
    }
    scaled.clamp(1.0, WEALTH_MULTIPLIER_CAP)
}

/// Money yielded by harvesting `plot` right now.
///
/// `floor(base * mutation * (1 + planting bonus + expansion bonus) * wealth)`
/// where the planting bonus adds 10% per ten planted slots (capped at
/// +100%) and each purchased expansion adds an uncapped 5%.
pub fn crop_value(
    plot: &GardenPlot,
    planted_count: usize,
    expansions: u32,
    lifetime_earnings: i64,
) -> i64 {
    let mutation_mult = plot
        .mutation
        .as_deref()
        .map(mutation_multiplier)
        .unwrap_or(1.0);
    let planting_bonus = (0.1 * (planted_count / 10) as f64).min(1.0);
    let expansion_bonus = 0.05 * expansions as f64;

    (plot.base_value as f64
        * mutation_mult
        * (1.0 + planting_bonus + expansion_bonus)
        * wealth_multiplier(lifetime_earnings))
    .floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn plot(base_value: i64, mutation: Option<&str>) -> GardenPlot {
        GardenPlot {
            key: "plot_test".into(),
            seed_key: "gsCarrot".into(),
            name: "Carrot Seed".into(),
            icon: "🥕".into(),
            planted_at: Utc::now(),
            growth_time_ms: 300_000,
            harvests_left: 1,
            base_value,
            mutation: mutation.map(String::from),
            is_favorite: false,
        }
    }

    #[test]
    fn baseline_carrot_is_worth_its_base_value() {
        // base 20, no mutation, no bonuses, no earnings history.
        assert_eq!(crop_value(&plot(20, None), 0, 0, 0), 20);
    }

    #[test]
    fn bonuses_stack_additively_then_floor() {
        // base 20 * 2.0 mutation * (1 + 0.1 + 0.05) = 46.0 → 46
        assert_eq!(crop_value(&plot(20, Some("Wet")), 10, 1, 0), 46);
    }

    #[test]
    fn planting_bonus_steps_per_ten_plots_and_caps() {
        let p = plot(100, None);
        assert_eq!(crop_value(&p, 9, 0, 0), 100);
        assert_eq!(crop_value(&p, 10, 0, 0), 110);
        assert_eq!(crop_value(&p, 19, 0, 0), 110);
        assert_eq!(crop_value(&p, 20, 0, 0), 120);
        // +100% cap no matter how many plots.
        assert_eq!(crop_value(&p, 1000, 0, 0), 200);
    }

    #[test]
    fn expansion_bonus_is_uncapped() {
        let p = plot(100, None);
        assert_eq!(crop_value(&p, 0, 1, 0), 105);
        assert_eq!(crop_value(&p, 0, 40, 0), 300);
    }

    #[test]
    fn wealth_multiplier_floors_at_one() {
        assert_eq!(wealth_multiplier(0), 1.0);
        assert_eq!(wealth_multiplier(-5_000), 1.0);
        assert_eq!(wealth_multiplier(100_000), 1.0);
    }

    #[test]
    fn wealth_multiplier_grows_sublinearly_and_caps() {
        // (1e7 / 1e5)^0.2 = 100^0.2 ≈ 2.512
        let m = wealth_multiplier(10_000_000);
        assert!(m > 2.5 && m < 2.52);

        let huge = wealth_multiplier(i64::MAX);
        assert!(huge <= 1_000_000_000.0);
        assert!(huge >= 1.0);
    }

    #[test]
    fn value_is_monotone_in_each_factor() {
        let base = crop_value(&plot(500, None), 0, 0, 0);
        assert!(crop_value(&plot(500, Some("Bloodlit")), 0, 0, 0) >= base);
        assert!(crop_value(&plot(500, None), 30, 0, 0) >= base);
        assert!(crop_value(&plot(500, None), 0, 3, 0) >= base);
        assert!(crop_value(&plot(500, None), 0, 0, 50_000_000) >= base);
    }

    #[test]
    fn unknown_mutation_names_multiply_by_one() {
        assert_eq!(
            crop_value(&plot(20, Some("Imaginary")), 0, 0, 0),
            crop_value(&plot(20, None), 0, 0, 0)
        );
    }
}
