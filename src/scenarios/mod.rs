//! Revenue projection and pacing math.
//!
//! Each submodule keeps its own constant table. The average deal values used
//! by goal scenarios, roadmap analysis and deal-size estimation grew apart in
//! the product and are intentionally kept as separate named tables per
//! feature area.

pub mod deal_size_analysis;
pub mod goal_scenarios;
pub mod pacing;
pub mod plan_scenarios;
pub mod roadmap_analysis;

pub use deal_size_analysis::{
    analyze_deal_sizes, estimate_mix_for_target, MixEstimate, SizeBucket, SizeClass,
};
pub use goal_scenarios::{
    compute_scenario_totals, monthly_volume, DealMix, DealMixScenario, ScenarioTotals,
};
pub use pacing::{
    classify_pace, expected_to_date, pacing_report, variance_percent, PaceStatus, PacingReport,
};
pub use plan_scenarios::{generate_plan_scenarios, PlanInputs, QuarterPlan, ScenarioPath};
pub use roadmap_analysis::{analyze_roadmap, RoadmapAnalysis, RoadmapInputs, SuggestedMix};
