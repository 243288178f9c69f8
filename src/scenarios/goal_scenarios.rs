use serde::{Deserialize, Serialize};

/// Average value of a large (jumbo commercial) deal in the goal planner.
pub const GOAL_LARGE_DEAL_VALUE: f64 = 7_000_000.0;
/// Average value of a medium commercial deal in the goal planner.
pub const GOAL_MEDIUM_DEAL_VALUE: f64 = 1_500_000.0;
/// Average value of a small residential deal in the goal planner.
pub const GOAL_SMALL_DEAL_VALUE: f64 = 550_000.0;

/// Counts of large/medium/small deals assigned to one quarter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DealMix {
    pub large: u32,
    pub medium: u32,
    pub small: u32,
}

impl DealMix {
    pub fn new(large: u32, medium: u32, small: u32) -> Self {
        Self {
            large,
            medium,
            small,
        }
    }

    pub fn volume(&self) -> f64 {
        self.large as f64 * GOAL_LARGE_DEAL_VALUE
            + self.medium as f64 * GOAL_MEDIUM_DEAL_VALUE
            + self.small as f64 * GOAL_SMALL_DEAL_VALUE
    }

    pub fn deals(&self) -> u32 {
        self.large + self.medium + self.small
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTotals {
    pub total_volume: f64,
    pub total_deals: u32,
}

/// Totals are always recomputed from the mix; nothing stored can drift.
pub fn compute_scenario_totals(quarterly_mix: &[DealMix; 4]) -> ScenarioTotals {
    let mut totals = ScenarioTotals::default();
    for mix in quarterly_mix {
        totals.total_volume += mix.volume();
        totals.total_deals += mix.deals();
    }
    totals
}

/// Spreads each quarter's volume evenly over its three months.
pub fn monthly_volume(quarterly_mix: &[DealMix; 4]) -> [f64; 12] {
    let mut months = [0.0; 12];
    for (q, mix) in quarterly_mix.iter().enumerate() {
        let per_month = mix.volume() / 3.0;
        for m in 0..3 {
            months[q * 3 + m] = per_month;
        }
    }
    months
}

/// A named goal template assigning a deal mix to each of the four quarters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealMixScenario {
    pub name: String,
    pub quarters: [DealMix; 4],
}

impl DealMixScenario {
    pub fn totals(&self) -> ScenarioTotals {
        compute_scenario_totals(&self.quarters)
    }
}

/// Built-in goal templates offered before the user customizes their own.
pub fn preset_scenarios() -> Vec<DealMixScenario> {
    vec![
        DealMixScenario {
            name: "Steady Volume".to_string(),
            quarters: [
                DealMix::new(0, 2, 4),
                DealMix::new(0, 2, 5),
                DealMix::new(1, 2, 5),
                DealMix::new(0, 2, 4),
            ],
        },
        DealMixScenario {
            name: "Big Case Focus".to_string(),
            quarters: [
                DealMix::new(1, 1, 1),
                DealMix::new(1, 1, 2),
                DealMix::new(1, 2, 2),
                DealMix::new(1, 1, 1),
            ],
        },
        DealMixScenario {
            name: "Residential Push".to_string(),
            quarters: [
                DealMix::new(0, 1, 8),
                DealMix::new(0, 1, 9),
                DealMix::new(0, 2, 10),
                DealMix::new(0, 1, 8),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_a_pure_function_of_the_mix() {
        let quarters = [
            DealMix::new(1, 2, 3),
            DealMix::new(0, 1, 4),
            DealMix::new(2, 0, 0),
            DealMix::new(0, 0, 0),
        ];
        let totals = compute_scenario_totals(&quarters);

        let expected_volume = 3.0 * GOAL_LARGE_DEAL_VALUE
            + 3.0 * GOAL_MEDIUM_DEAL_VALUE
            + 7.0 * GOAL_SMALL_DEAL_VALUE;
        assert_eq!(totals.total_volume, expected_volume);
        assert_eq!(totals.total_deals, 13);
    }

    #[test]
    fn empty_mix_yields_zero_totals() {
        let totals = compute_scenario_totals(&[DealMix::default(); 4]);
        assert_eq!(totals.total_volume, 0.0);
        assert_eq!(totals.total_deals, 0);
    }

    #[test]
    fn monthly_breakdown_splits_quarters_in_three() {
        let quarters = [
            DealMix::new(0, 2, 0), // 3.0M in Q1
            DealMix::default(),
            DealMix::default(),
            DealMix::default(),
        ];
        let months = monthly_volume(&quarters);
        assert_eq!(months[0], 1_000_000.0);
        assert_eq!(months[1], 1_000_000.0);
        assert_eq!(months[2], 1_000_000.0);
        assert_eq!(months[3], 0.0);

        let total: f64 = months.iter().sum();
        let expected = compute_scenario_totals(&quarters).total_volume;
        assert!((total - expected).abs() < 1e-6);
    }

    #[test]
    fn presets_have_nonzero_totals() {
        for scenario in preset_scenarios() {
            let totals = scenario.totals();
            assert!(totals.total_volume > 0.0, "{}", scenario.name);
            assert!(totals.total_deals > 0, "{}", scenario.name);
        }
    }
}
