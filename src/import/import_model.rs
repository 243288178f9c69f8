use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One spreadsheet row as exported by the office admins. Header names vary
/// between exports, so every field accepts the spellings seen in the wild.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImportRow {
    #[serde(
        alias = "client",
        alias = "clientName",
        alias = "Client",
        alias = "Client Name",
        default
    )]
    pub client_name: Option<String>,
    #[serde(
        alias = "adjuster",
        alias = "adjusterName",
        alias = "Adjuster",
        alias = "Adjuster Name",
        default
    )]
    pub adjuster_name: Option<String>,
    #[serde(alias = "Office", default)]
    pub office: Option<String>,
    #[serde(
        alias = "signedDate",
        alias = "Signed Date",
        alias = "Date Signed",
        default
    )]
    pub signed_date: Option<String>,
    #[serde(
        alias = "initialEstimate",
        alias = "Initial Estimate",
        default
    )]
    pub initial_estimate: Option<String>,
    #[serde(
        alias = "revisedEstimate",
        alias = "Revised Estimate",
        default
    )]
    pub revised_estimate: Option<String>,
    #[serde(alias = "feePercent", alias = "Fee %", default)]
    pub fee_percent: Option<String>,
    #[serde(
        alias = "splitPercent",
        alias = "Split %",
        default
    )]
    pub split_percent: Option<String>,
    #[serde(
        alias = "commissionPercent",
        alias = "Commission %",
        default
    )]
    pub commission_percent: Option<String>,
}

/// A checked import row. Rows that fail coercion are kept, flagged invalid
/// and carry the reason, so the review screen can show every line of the
/// file (valid or not) before anything is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionImport {
    pub client_name: String,
    pub adjuster_name: String,
    pub office: Option<String>,
    pub signed_date: Option<NaiveDate>,
    pub initial_estimate: f64,
    pub revised_estimate: f64,
    pub fee_percent: f64,
    pub split_percent: f64,
    pub commission_percent: f64,
    pub is_valid: bool,
    pub error: Option<String>,
    pub line_number: Option<i32>,
}
