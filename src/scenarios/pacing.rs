use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// Classification thresholds are presentation policy, tuned for the dashboard
// status chips. Not invariants.
pub const AHEAD_THRESHOLD_PERCENT: f64 = 5.0;
pub const BEHIND_THRESHOLD_PERCENT: f64 = -5.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PaceStatus {
    Ahead,
    OnPace,
    Behind,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PacingReport {
    pub expected_to_date: f64,
    pub actual_to_date: f64,
    pub variance_percent: f64,
    pub status: PaceStatus,
}

fn quarter_start(year: i32, quarter_index: usize) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, quarter_index as u32 * 3 + 1, 1)
}

/// Volume a plan expects to have produced by `as_of`: every fully elapsed
/// quarter in full, plus a linear day-proration of the current quarter.
pub fn expected_to_date(quarterly_volume: &[f64; 4], year: i32, as_of: NaiveDate) -> f64 {
    if as_of.year() < year {
        return 0.0;
    }
    if as_of.year() > year {
        return quarterly_volume.iter().sum();
    }

    let current = (as_of.month0() / 3) as usize;
    let elapsed: f64 = quarterly_volume[..current].iter().sum();

    let start = match quarter_start(year, current) {
        Some(d) => d,
        None => return elapsed,
    };
    let next_start = if current == 3 {
        quarter_start(year + 1, 0)
    } else {
        quarter_start(year, current + 1)
    };
    let end = match next_start {
        Some(d) => d,
        None => return elapsed,
    };

    let days_in_quarter = (end - start).num_days() as f64;
    let days_elapsed = ((as_of - start).num_days() + 1) as f64;

    elapsed + quarterly_volume[current] * (days_elapsed / days_in_quarter)
}

/// Actual progress against the expectation, as a percentage of the
/// expectation. Zero expectation yields zero variance, not a division error.
pub fn variance_percent(actual: f64, expected: f64) -> f64 {
    if expected > 0.0 {
        (actual - expected) / expected * 100.0
    } else {
        0.0
    }
}

pub fn classify_pace(variance: f64) -> PaceStatus {
    if variance >= AHEAD_THRESHOLD_PERCENT {
        PaceStatus::Ahead
    } else if variance >= BEHIND_THRESHOLD_PERCENT {
        PaceStatus::OnPace
    } else {
        PaceStatus::Behind
    }
}

pub fn pacing_report(
    quarterly_volume: &[f64; 4],
    year: i32,
    as_of: NaiveDate,
    actual_to_date: f64,
) -> PacingReport {
    let expected = expected_to_date(quarterly_volume, year, as_of);
    let variance = variance_percent(actual_to_date, expected);
    PacingReport {
        expected_to_date: expected,
        actual_to_date,
        variance_percent: variance,
        status: classify_pace(variance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: [f64; 4] = [100.0, 100.0, 100.0, 100.0];

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn full_quarters_plus_prorated_current() {
        // July 1st: Q1 and Q2 in full, one day of Q3 (92 days long).
        let expected = expected_to_date(&PLAN, 2025, date(2025, 7, 1));
        assert!((expected - (200.0 + 100.0 / 92.0)).abs() < 1e-9);
    }

    #[test]
    fn mid_quarter_is_linear_in_days() {
        // Feb 1st is day 32 of the 90-day Q1.
        let expected = expected_to_date(&PLAN, 2025, date(2025, 2, 1));
        assert!((expected - 100.0 * 32.0 / 90.0).abs() < 1e-9);
    }

    #[test]
    fn year_end_expects_the_full_plan() {
        let expected = expected_to_date(&PLAN, 2025, date(2025, 12, 31));
        assert!((expected - 400.0).abs() < 1e-9);
    }

    #[test]
    fn dates_outside_the_plan_year_clamp() {
        assert_eq!(expected_to_date(&PLAN, 2025, date(2024, 12, 31)), 0.0);
        assert_eq!(expected_to_date(&PLAN, 2025, date(2026, 1, 1)), 400.0);
    }

    #[test]
    fn zero_expectation_guards_variance() {
        assert_eq!(variance_percent(1_000.0, 0.0), 0.0);
        assert_eq!(variance_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn variance_is_relative_to_expectation() {
        assert_eq!(variance_percent(110.0, 100.0), 10.0);
        assert_eq!(variance_percent(90.0, 100.0), -10.0);
    }

    #[test]
    fn classification_tiers() {
        assert_eq!(classify_pace(5.0), PaceStatus::Ahead);
        assert_eq!(classify_pace(12.5), PaceStatus::Ahead);
        assert_eq!(classify_pace(4.9), PaceStatus::OnPace);
        assert_eq!(classify_pace(-5.0), PaceStatus::OnPace);
        assert_eq!(classify_pace(-5.1), PaceStatus::Behind);
    }

    #[test]
    fn plan_scenario_quarters_feed_the_pacing_report() {
        use crate::scenarios::plan_scenarios::{
            generate_plan_scenarios, quarterly_volumes, PlanInputs,
        };

        let paths = generate_plan_scenarios(&PlanInputs {
            target_revenue: 1_200_000.0,
            target_deals: 12,
            avg_fee_percent: 10.0,
            commission_percent: 20.0,
        });
        let volumes = quarterly_volumes(&paths[1]);
        assert!((volumes[0] - 240_000.0).abs() < 1e-6);
        assert!((volumes[2] - 360_000.0).abs() < 1e-6);

        // Jun 30: Q1 and Q2 fully elapsed, exactly on the planned 540k.
        let report = pacing_report(&volumes, 2025, date(2025, 6, 30), 540_000.0);
        assert!((report.expected_to_date - 540_000.0).abs() < 1e-6);
        assert_eq!(report.status, PaceStatus::OnPace);
    }

    #[test]
    fn report_ties_the_pieces_together() {
        let report = pacing_report(&PLAN, 2025, date(2025, 7, 1), 150.0);
        assert!(report.variance_percent < 0.0);
        assert_eq!(report.status, PaceStatus::Behind);
        assert_eq!(report.actual_to_date, 150.0);
    }
}
