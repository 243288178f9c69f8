use serde::{Deserialize, Serialize};

use crate::constants::QUARTERS_PER_YEAR;

/// Share of the annual target expected in each quarter. Q3 carries the most
/// weight to match the storm-season close pattern.
pub const PLAN_QUARTER_WEIGHTS: [f64; QUARTERS_PER_YEAR] = [0.20, 0.25, 0.30, 0.25];

/// Risk paths and their deal-count multipliers. More deals at a smaller
/// average size is the conservative end; fewer, larger commercial deals the
/// aggressive end. Total volume is identical on every path.
pub const PLAN_PATHS: [(&str, f64); 3] = [
    ("Conservative", 1.3),
    ("Balanced", 1.0),
    ("Commercial Heavy", 0.7),
];

/// User-editable plan inputs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanInputs {
    pub target_revenue: f64,
    pub target_deals: i32,
    pub avg_fee_percent: f64,
    pub commission_percent: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuarterPlan {
    pub quarter: u32,
    pub volume: f64,
    pub deals: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPath {
    pub name: String,
    pub deal_multiplier: f64,
    pub deal_count: i32,
    pub avg_deal_size: f64,
    pub total_volume: f64,
    pub projected_fees: f64,
    pub projected_commission: f64,
    pub quarters: Vec<QuarterPlan>,
}

/// Derives the three named risk paths from the plan inputs.
///
/// Every path carries the full `target_revenue`; only the deal count (and
/// with it the average deal size) varies with the path multiplier.
pub fn generate_plan_scenarios(inputs: &PlanInputs) -> Vec<ScenarioPath> {
    PLAN_PATHS
        .iter()
        .map(|(name, multiplier)| {
            let deal_count = (inputs.target_deals as f64 * multiplier).round() as i32;
            let avg_deal_size = if deal_count > 0 {
                inputs.target_revenue / deal_count as f64
            } else {
                0.0
            };
            let projected_fees = inputs.target_revenue * inputs.avg_fee_percent / 100.0;
            let projected_commission = projected_fees * inputs.commission_percent / 100.0;

            let quarters = PLAN_QUARTER_WEIGHTS
                .iter()
                .enumerate()
                .map(|(i, weight)| QuarterPlan {
                    quarter: i as u32 + 1,
                    volume: inputs.target_revenue * weight,
                    deals: (deal_count as f64 * weight).round() as i32,
                })
                .collect();

            ScenarioPath {
                name: name.to_string(),
                deal_multiplier: *multiplier,
                deal_count,
                avg_deal_size,
                total_volume: inputs.target_revenue,
                projected_fees,
                projected_commission,
                quarters,
            }
        })
        .collect()
}

/// Quarterly volumes for a path, in the shape the pacing calculator takes.
pub fn quarterly_volumes(path: &ScenarioPath) -> [f64; 4] {
    let mut volumes = [0.0; 4];
    for q in &path.quarters {
        if (1..=4).contains(&q.quarter) {
            volumes[(q.quarter - 1) as usize] = q.volume;
        }
    }
    volumes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs(target_revenue: f64, target_deals: i32) -> PlanInputs {
        PlanInputs {
            target_revenue,
            target_deals,
            avg_fee_percent: 10.0,
            commission_percent: 20.0,
        }
    }

    #[test]
    fn three_paths_share_the_target_volume() {
        let paths = generate_plan_scenarios(&inputs(10_000_000.0, 40));
        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert_eq!(path.total_volume, 10_000_000.0);
        }
    }

    #[test]
    fn deal_counts_strictly_decrease_across_paths() {
        let paths = generate_plan_scenarios(&inputs(10_000_000.0, 40));
        assert!(paths[0].deal_count > paths[1].deal_count);
        assert!(paths[1].deal_count > paths[2].deal_count);
    }

    #[test]
    fn ten_million_forty_deal_plan() {
        let paths = generate_plan_scenarios(&inputs(10_000_000.0, 40));

        let conservative = &paths[0];
        assert_eq!(conservative.deal_count, 52);
        assert!((conservative.avg_deal_size - 192_307.69).abs() < 0.01);

        let commercial = &paths[2];
        assert_eq!(commercial.deal_count, 28);
        assert!((commercial.avg_deal_size - 357_142.86).abs() < 0.01);

        assert_eq!(conservative.total_volume, 10_000_000.0);
        assert_eq!(commercial.total_volume, 10_000_000.0);
    }

    #[test]
    fn quarters_sum_to_the_target() {
        let paths = generate_plan_scenarios(&inputs(8_400_000.0, 30));
        for path in &paths {
            let sum: f64 = path.quarters.iter().map(|q| q.volume).sum();
            assert!((sum - 8_400_000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn third_quarter_carries_the_heaviest_weight() {
        let paths = generate_plan_scenarios(&inputs(1_000_000.0, 10));
        let balanced = &paths[1];
        assert_eq!(balanced.quarters[2].volume, 300_000.0);
        assert_eq!(balanced.quarters[0].volume, 200_000.0);
    }

    #[test]
    fn zero_deal_count_guards_average_size() {
        let paths = generate_plan_scenarios(&inputs(1_000_000.0, 0));
        for path in &paths {
            assert_eq!(path.avg_deal_size, 0.0);
        }
    }

    proptest! {
        #[test]
        fn volume_invariant_holds_for_any_positive_target(
            target in 1.0f64..1.0e12,
            deals in 0i32..10_000,
        ) {
            let paths = generate_plan_scenarios(&inputs(target, deals));
            for path in &paths {
                prop_assert_eq!(path.total_volume, target);
            }
        }

        #[test]
        fn deal_ordering_holds_for_any_base_count(deals in 2i32..10_000) {
            let paths = generate_plan_scenarios(&inputs(5_000_000.0, deals));
            prop_assert!(paths[0].deal_count > paths[1].deal_count);
            prop_assert!(paths[1].deal_count > paths[2].deal_count);
        }
    }
}
