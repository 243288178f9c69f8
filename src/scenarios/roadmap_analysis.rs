use serde::{Deserialize, Serialize};

// The roadmap view predates the goal planner and kept its own average deal
// values when the planner's were retuned. Deliberately separate tables.
pub const ROADMAP_LARGE_DEAL_VALUE: f64 = 6_500_000.0;
pub const ROADMAP_MEDIUM_DEAL_VALUE: f64 = 1_250_000.0;
pub const ROADMAP_SMALL_DEAL_VALUE: f64 = 500_000.0;

/// How the remaining volume is spread across size classes when suggesting a
/// catch-up mix: half large, the rest split between medium and small.
pub const ROADMAP_MIX_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapInputs {
    pub target_revenue: f64,
    pub actual_volume: f64,
    pub months_elapsed: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedMix {
    pub large: u32,
    pub medium: u32,
    pub small: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapAnalysis {
    pub remaining_volume: f64,
    pub months_remaining: u32,
    pub required_monthly_rate: f64,
    pub achieved_percent: f64,
    pub suggested_mix: SuggestedMix,
}

/// Turns a goal and the year-to-date actuals into the remaining-work view:
/// what is left, the run rate needed, and a deal mix that would close the gap.
pub fn analyze_roadmap(inputs: &RoadmapInputs) -> RoadmapAnalysis {
    let remaining_volume = (inputs.target_revenue - inputs.actual_volume).max(0.0);
    let months_remaining = 12u32.saturating_sub(inputs.months_elapsed);

    let required_monthly_rate = if months_remaining > 0 {
        remaining_volume / months_remaining as f64
    } else {
        0.0
    };

    let achieved_percent = if inputs.target_revenue > 0.0 {
        inputs.actual_volume / inputs.target_revenue * 100.0
    } else {
        0.0
    };

    RoadmapAnalysis {
        remaining_volume,
        months_remaining,
        required_monthly_rate,
        achieved_percent,
        suggested_mix: suggest_mix(remaining_volume),
    }
}

fn suggest_mix(remaining_volume: f64) -> SuggestedMix {
    if remaining_volume <= 0.0 {
        return SuggestedMix::default();
    }

    let count = |weight: f64, avg_value: f64| -> u32 {
        (remaining_volume * weight / avg_value).ceil() as u32
    };

    SuggestedMix {
        large: count(ROADMAP_MIX_WEIGHTS[0], ROADMAP_LARGE_DEAL_VALUE),
        medium: count(ROADMAP_MIX_WEIGHTS[1], ROADMAP_MEDIUM_DEAL_VALUE),
        small: count(ROADMAP_MIX_WEIGHTS[2], ROADMAP_SMALL_DEAL_VALUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_volume_never_goes_negative() {
        let analysis = analyze_roadmap(&RoadmapInputs {
            target_revenue: 5_000_000.0,
            actual_volume: 7_000_000.0,
            months_elapsed: 6,
        });
        assert_eq!(analysis.remaining_volume, 0.0);
        assert_eq!(analysis.suggested_mix, SuggestedMix::default());
        assert_eq!(analysis.achieved_percent, 140.0);
    }

    #[test]
    fn run_rate_spreads_the_gap_over_remaining_months() {
        let analysis = analyze_roadmap(&RoadmapInputs {
            target_revenue: 12_000_000.0,
            actual_volume: 4_000_000.0,
            months_elapsed: 8,
        });
        assert_eq!(analysis.months_remaining, 4);
        assert_eq!(analysis.required_monthly_rate, 2_000_000.0);
    }

    #[test]
    fn elapsed_year_guards_division() {
        let analysis = analyze_roadmap(&RoadmapInputs {
            target_revenue: 12_000_000.0,
            actual_volume: 4_000_000.0,
            months_elapsed: 14,
        });
        assert_eq!(analysis.months_remaining, 0);
        assert_eq!(analysis.required_monthly_rate, 0.0);
    }

    #[test]
    fn zero_target_guards_percent() {
        let analysis = analyze_roadmap(&RoadmapInputs {
            target_revenue: 0.0,
            actual_volume: 100.0,
            months_elapsed: 2,
        });
        assert_eq!(analysis.achieved_percent, 0.0);
    }

    #[test]
    fn suggested_mix_covers_the_gap() {
        let analysis = analyze_roadmap(&RoadmapInputs {
            target_revenue: 13_000_000.0,
            actual_volume: 0.0,
            months_elapsed: 0,
        });
        let mix = analysis.suggested_mix;
        // 6.5M large share -> 1 deal, 3.9M medium share -> 4 deals (ceil of 3.12),
        // 2.6M small share -> 6 deals (ceil of 5.2)
        assert_eq!(mix.large, 1);
        assert_eq!(mix.medium, 4);
        assert_eq!(mix.small, 6);

        let covered = mix.large as f64 * ROADMAP_LARGE_DEAL_VALUE
            + mix.medium as f64 * ROADMAP_MEDIUM_DEAL_VALUE
            + mix.small as f64 * ROADMAP_SMALL_DEAL_VALUE;
        assert!(covered >= analysis.remaining_volume);
    }
}
