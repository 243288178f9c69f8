use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::commissions::commissions_model::CommissionRecord;
use crate::constants::{MONTHS_PER_YEAR, RECORD_STATUS_CLOSED, RECORD_STATUS_OPEN};

/// Change between two estimates as a percentage of the first.
///
/// A zero or negative initial estimate yields 0 rather than NaN/Infinity.
pub fn percent_change(initial: f64, revised: f64) -> f64 {
    if initial > 0.0 {
        (revised - initial) / initial * 100.0
    } else {
        0.0
    }
}

/// Roll-up over a set of commission records. All fields are plain sums or
/// counts; `avg_percent_change` is the mean of per-record percent changes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSummary {
    pub record_count: usize,
    pub total_initial: f64,
    pub total_revised: f64,
    pub total_commission: f64,
    pub total_paid: f64,
    pub total_received: f64,
    pub avg_percent_change: f64,
    pub increased_count: usize,
    pub decreased_count: usize,
    pub unchanged_count: usize,
    pub open_count: usize,
    pub closed_count: usize,
}

/// Summarizes a slice of records. Empty input yields the all-zero summary.
pub fn summarize(records: &[CommissionRecord]) -> CommissionSummary {
    let mut summary = CommissionSummary::default();
    if records.is_empty() {
        return summary;
    }

    let mut change_sum = 0.0;
    for record in records {
        summary.record_count += 1;
        summary.total_initial += record.initial_estimate;
        summary.total_revised += record.revised_estimate;
        summary.total_commission += record.commission_due();
        summary.total_paid += record.amount_paid;
        summary.total_received += record.amount_received;

        let delta = record.revised_estimate - record.initial_estimate;
        if delta > 0.0 {
            summary.increased_count += 1;
        } else if delta < 0.0 {
            summary.decreased_count += 1;
        } else {
            summary.unchanged_count += 1;
        }

        match record.status.as_str() {
            s if s == RECORD_STATUS_OPEN => summary.open_count += 1,
            s if s == RECORD_STATUS_CLOSED => summary.closed_count += 1,
            _ => {}
        }

        change_sum += record.percent_change();
    }

    summary.avg_percent_change = change_sum / summary.record_count as f64;
    summary
}

/// Per-adjuster roll-up, derived on demand and never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdjusterSummary {
    pub adjuster_name: String,
    pub record_count: usize,
    pub total_initial: f64,
    pub total_revised: f64,
    pub avg_percent_change: f64,
}

/// Per-office roll-up, derived on demand and never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSummary {
    pub office: String,
    pub record_count: usize,
    pub total_initial: f64,
    pub total_revised: f64,
}

struct GroupAccumulator {
    display_name: String,
    record_count: usize,
    total_initial: f64,
    total_revised: f64,
    change_sum: f64,
}

/// Groups records by adjuster. The grouping key is the trimmed, lower-cased
/// adjuster name so that "J. Smith" and "j. smith " fold together; the
/// first-seen casing is kept for display. Output sorted by revised volume
/// descending.
pub fn summarize_by_adjuster(records: &[CommissionRecord]) -> Vec<AdjusterSummary> {
    let mut groups: HashMap<String, GroupAccumulator> = HashMap::new();

    for record in records {
        let display = record.adjuster_name.trim().to_string();
        if display.is_empty() {
            continue;
        }
        let key = display.to_lowercase();
        let entry = groups.entry(key).or_insert_with(|| GroupAccumulator {
            display_name: display,
            record_count: 0,
            total_initial: 0.0,
            total_revised: 0.0,
            change_sum: 0.0,
        });
        entry.record_count += 1;
        entry.total_initial += record.initial_estimate;
        entry.total_revised += record.revised_estimate;
        entry.change_sum += record.percent_change();
    }

    let mut summaries: Vec<AdjusterSummary> = groups
        .into_values()
        .map(|g| AdjusterSummary {
            adjuster_name: g.display_name,
            record_count: g.record_count,
            total_initial: g.total_initial,
            total_revised: g.total_revised,
            avg_percent_change: g.change_sum / g.record_count as f64,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.total_revised
            .partial_cmp(&a.total_revised)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    summaries
}

/// Groups records by office; records without an office land in "Unassigned".
pub fn summarize_by_office(records: &[CommissionRecord]) -> Vec<OfficeSummary> {
    let mut groups: HashMap<String, GroupAccumulator> = HashMap::new();

    for record in records {
        let display = record
            .office
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or("Unassigned")
            .to_string();
        let key = display.to_lowercase();
        let entry = groups.entry(key).or_insert_with(|| GroupAccumulator {
            display_name: display,
            record_count: 0,
            total_initial: 0.0,
            total_revised: 0.0,
            change_sum: 0.0,
        });
        entry.record_count += 1;
        entry.total_initial += record.initial_estimate;
        entry.total_revised += record.revised_estimate;
    }

    let mut summaries: Vec<OfficeSummary> = groups
        .into_values()
        .map(|g| OfficeSummary {
            office: g.display_name,
            record_count: g.record_count,
            total_initial: g.total_initial,
            total_revised: g.total_revised,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.total_revised
            .partial_cmp(&a.total_revised)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    summaries
}

/// Actual results for one calendar year, in the shape the pacing calculator
/// consumes: total volume, deal count and a per-month volume breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearActuals {
    pub year: i32,
    pub total_volume: f64,
    pub deal_count: usize,
    pub monthly_volume: Vec<f64>,
}

/// Folds the records signed in `year` into a [`YearActuals`]. Volume is the
/// revised estimate; records from other years are ignored.
pub fn year_actuals(records: &[CommissionRecord], year: i32) -> YearActuals {
    let mut monthly_volume = vec![0.0; MONTHS_PER_YEAR];
    let mut total_volume = 0.0;
    let mut deal_count = 0;

    for record in records {
        if record.signed_date.year() != year {
            continue;
        }
        let month_index = record.signed_date.month0() as usize;
        monthly_volume[month_index] += record.revised_estimate;
        total_volume += record.revised_estimate;
        deal_count += 1;
    }

    YearActuals {
        year,
        total_volume,
        deal_count,
        monthly_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(initial: f64, revised: f64, adjuster: &str, office: Option<&str>) -> CommissionRecord {
        let now = NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        CommissionRecord {
            id: "test".to_string(),
            client_name: "Acme Restoration".to_string(),
            adjuster_name: adjuster.to_string(),
            office: office.map(|o| o.to_string()),
            salesperson_id: None,
            signed_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            initial_estimate: initial,
            revised_estimate: revised,
            fee_percent: 10.0,
            split_percent: 100.0,
            commission_percent: 20.0,
            amount_paid: 0.0,
            amount_received: 0.0,
            status: "open".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn percent_change_guards_zero_denominator() {
        assert_eq!(percent_change(0.0, 1_000_000.0), 0.0);
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert_eq!(percent_change(100.0, 150.0), 50.0);
        assert_eq!(percent_change(200.0, 100.0), -50.0);
    }

    #[test]
    fn empty_input_yields_zero_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary, CommissionSummary::default());
    }

    #[test]
    fn summary_totals_are_exact_sums() {
        let records = vec![
            record(100_000.0, 150_000.0, "Jane Doe", Some("Tampa")),
            record(200_000.0, 180_000.0, "Bob Roe", Some("Miami")),
            record(50_000.0, 50_000.0, "Jane Doe", None),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.total_initial, 350_000.0);
        assert_eq!(summary.total_revised, 380_000.0);
        assert_eq!(summary.increased_count, 1);
        assert_eq!(summary.decreased_count, 1);
        assert_eq!(summary.unchanged_count, 1);
        assert_eq!(summary.open_count, 3);
        // (50 + -10 + 0) / 3
        assert!((summary.avg_percent_change - (40.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn adjuster_grouping_normalizes_and_keeps_first_casing() {
        let records = vec![
            record(100.0, 110.0, "Jane Doe", None),
            record(100.0, 120.0, "  jane doe ", None),
            record(100.0, 90.0, "Bob Roe", None),
        ];
        let summaries = summarize_by_adjuster(&records);
        assert_eq!(summaries.len(), 2);
        let jane = summaries
            .iter()
            .find(|s| s.adjuster_name == "Jane Doe")
            .expect("first-seen casing preserved");
        assert_eq!(jane.record_count, 2);
        assert_eq!(jane.total_revised, 230.0);
    }

    #[test]
    fn office_grouping_defaults_missing_office() {
        let records = vec![
            record(100.0, 110.0, "A", Some("Tampa")),
            record(100.0, 100.0, "B", None),
        ];
        let summaries = summarize_by_office(&records);
        assert!(summaries.iter().any(|s| s.office == "Unassigned"));
    }

    #[test]
    fn year_actuals_buckets_by_month() {
        let mut jan = record(0.0, 1_000_000.0, "A", None);
        jan.signed_date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut mar = record(0.0, 2_000_000.0, "B", None);
        mar.signed_date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let mut other_year = record(0.0, 5_000_000.0, "C", None);
        other_year.signed_date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        let actuals = year_actuals(&[jan, mar, other_year], 2025);
        assert_eq!(actuals.deal_count, 2);
        assert_eq!(actuals.total_volume, 3_000_000.0);
        assert_eq!(actuals.monthly_volume[0], 1_000_000.0);
        assert_eq!(actuals.monthly_volume[2], 2_000_000.0);
        assert_eq!(actuals.monthly_volume[5], 0.0);
    }
}
