use serde::{Deserialize, Serialize};

use crate::commissions::commissions_model::CommissionRecord;

/// Deals at or above this revised estimate count as large.
pub const LARGE_DEAL_THRESHOLD: f64 = 5_000_000.0;
/// Deals at or above this revised estimate (and below the large threshold)
/// count as medium.
pub const MEDIUM_DEAL_THRESHOLD: f64 = 1_000_000.0;

// Fallback averages used when a size class has no history to learn from.
pub const DEFAULT_LARGE_AVG: f64 = 6_000_000.0;
pub const DEFAULT_MEDIUM_AVG: f64 = 2_000_000.0;
pub const DEFAULT_SMALL_AVG: f64 = 400_000.0;

/// Share of a target allocated to each size class when estimating the mix
/// needed to reach it.
pub const SIZE_MIX_WEIGHTS: [f64; 3] = [0.45, 0.35, 0.20];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    pub fn classify(value: f64) -> Self {
        if value >= LARGE_DEAL_THRESHOLD {
            SizeClass::Large
        } else if value >= MEDIUM_DEAL_THRESHOLD {
            SizeClass::Medium
        } else {
            SizeClass::Small
        }
    }

    fn default_average(&self) -> f64 {
        match self {
            SizeClass::Large => DEFAULT_LARGE_AVG,
            SizeClass::Medium => DEFAULT_MEDIUM_AVG,
            SizeClass::Small => DEFAULT_SMALL_AVG,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeBucket {
    pub class: SizeClass,
    pub deal_count: usize,
    pub total_volume: f64,
    pub avg_value: f64,
    pub volume_share: f64,
}

/// Buckets historical records by revised-estimate size. Always returns the
/// three buckets in large/medium/small order; empty buckets carry zeros.
pub fn analyze_deal_sizes(records: &[CommissionRecord]) -> Vec<SizeBucket> {
    let classes = [SizeClass::Large, SizeClass::Medium, SizeClass::Small];
    let mut counts = [0usize; 3];
    let mut volumes = [0.0f64; 3];

    for record in records {
        let idx = match SizeClass::classify(record.revised_estimate) {
            SizeClass::Large => 0,
            SizeClass::Medium => 1,
            SizeClass::Small => 2,
        };
        counts[idx] += 1;
        volumes[idx] += record.revised_estimate;
    }

    let grand_total: f64 = volumes.iter().sum();

    classes
        .iter()
        .enumerate()
        .map(|(i, class)| SizeBucket {
            class: *class,
            deal_count: counts[i],
            total_volume: volumes[i],
            avg_value: if counts[i] > 0 {
                volumes[i] / counts[i] as f64
            } else {
                0.0
            },
            volume_share: if grand_total > 0.0 {
                volumes[i] / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MixEstimate {
    pub large: u32,
    pub medium: u32,
    pub small: u32,
    pub projected_volume: f64,
}

/// Estimates how many deals of each size it takes to reach `target_volume`,
/// using the historical average per bucket and falling back to the static
/// table for classes with no history.
pub fn estimate_mix_for_target(target_volume: f64, buckets: &[SizeBucket]) -> MixEstimate {
    if target_volume <= 0.0 {
        return MixEstimate::default();
    }

    let avg_for = |class: SizeClass| -> f64 {
        buckets
            .iter()
            .find(|b| b.class == class && b.deal_count > 0)
            .map(|b| b.avg_value)
            .unwrap_or_else(|| class.default_average())
    };

    let large_avg = avg_for(SizeClass::Large);
    let medium_avg = avg_for(SizeClass::Medium);
    let small_avg = avg_for(SizeClass::Small);

    let large = (target_volume * SIZE_MIX_WEIGHTS[0] / large_avg).round() as u32;
    let medium = (target_volume * SIZE_MIX_WEIGHTS[1] / medium_avg).round() as u32;
    let small = (target_volume * SIZE_MIX_WEIGHTS[2] / small_avg).round() as u32;

    MixEstimate {
        large,
        medium,
        small,
        projected_volume: large as f64 * large_avg
            + medium as f64 * medium_avg
            + small as f64 * small_avg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(revised: f64) -> CommissionRecord {
        let now = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        CommissionRecord {
            id: "r".to_string(),
            client_name: "Client".to_string(),
            adjuster_name: "Adjuster".to_string(),
            office: None,
            salesperson_id: None,
            signed_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            initial_estimate: revised,
            revised_estimate: revised,
            fee_percent: 10.0,
            split_percent: 100.0,
            commission_percent: 20.0,
            amount_paid: 0.0,
            amount_received: 0.0,
            status: "closed".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn classification_respects_thresholds() {
        assert_eq!(SizeClass::classify(5_000_000.0), SizeClass::Large);
        assert_eq!(SizeClass::classify(4_999_999.0), SizeClass::Medium);
        assert_eq!(SizeClass::classify(1_000_000.0), SizeClass::Medium);
        assert_eq!(SizeClass::classify(999_999.0), SizeClass::Small);
    }

    #[test]
    fn buckets_always_come_back_in_order_with_zero_guards() {
        let buckets = analyze_deal_sizes(&[]);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].class, SizeClass::Large);
        assert_eq!(buckets[2].class, SizeClass::Small);
        for bucket in &buckets {
            assert_eq!(bucket.avg_value, 0.0);
            assert_eq!(bucket.volume_share, 0.0);
        }
    }

    #[test]
    fn bucket_shares_sum_to_one_hundred() {
        let records = vec![
            record(6_000_000.0),
            record(2_000_000.0),
            record(2_000_000.0),
            record(500_000.0),
        ];
        let buckets = analyze_deal_sizes(&records);
        let share_sum: f64 = buckets.iter().map(|b| b.volume_share).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
        assert_eq!(buckets[1].deal_count, 2);
        assert_eq!(buckets[1].avg_value, 2_000_000.0);
    }

    #[test]
    fn mix_estimate_uses_history_then_falls_back() {
        // History only for medium deals; large/small use the static table.
        let buckets = analyze_deal_sizes(&[record(2_500_000.0), record(1_500_000.0)]);
        let estimate = estimate_mix_for_target(10_000_000.0, &buckets);

        // medium share 3.5M at historical avg 2.0M -> 2 deals
        assert_eq!(estimate.medium, 2);
        // large share 4.5M at default 6.0M -> 1 deal
        assert_eq!(estimate.large, 1);
        // small share 2.0M at default 400K -> 5 deals
        assert_eq!(estimate.small, 5);
    }

    #[test]
    fn zero_target_yields_empty_estimate() {
        let estimate = estimate_mix_for_target(0.0, &analyze_deal_sizes(&[]));
        assert_eq!(estimate, MixEstimate::default());
    }
}
