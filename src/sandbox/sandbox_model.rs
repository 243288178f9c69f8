use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A what-if deal that exists only in local storage. Never written to the
/// database; it exists to overlay hypothetical volume on the projections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HypotheticalDeal {
    pub id: String,
    pub label: String,
    pub category: String,
    pub amount: f64,
    pub probability: i32,
    pub expected_close_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHypotheticalDeal {
    pub label: String,
    pub category: String,
    pub amount: f64,
    pub probability: i32,
    pub expected_close_date: NaiveDate,
}

/// The persisted shape of the sandbox: the deal list plus whether the
/// overlay is currently switched on.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SandboxState {
    pub deals: Vec<HypotheticalDeal>,
    pub is_active: bool,
}

impl SandboxState {
    /// Probability-weighted volume the overlay adds to projections.
    /// Zero while the sandbox is switched off.
    pub fn overlay_value(&self) -> f64 {
        if !self.is_active {
            return 0.0;
        }
        self.deals
            .iter()
            .map(|d| d.amount * d.probability as f64 / 100.0)
            .sum()
    }
}
