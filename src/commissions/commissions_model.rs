use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{RECORD_STATUS_CLOSED, RECORD_STATUS_OPEN};
use crate::errors::{Error, Result, ValidationError};

/// A closed or pending commission deal tied to an insurance claim.
///
/// The initial and revised estimates are independently supplied by the user;
/// no relationship between them is enforced.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::commission_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CommissionRecord {
    pub id: String,
    pub client_name: String,
    pub adjuster_name: String,
    pub office: Option<String>,
    pub salesperson_id: Option<String>,
    pub signed_date: NaiveDate,
    pub initial_estimate: f64,
    pub revised_estimate: f64,
    pub fee_percent: f64,
    pub split_percent: f64,
    pub commission_percent: f64,
    pub amount_paid: f64,
    pub amount_received: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CommissionRecord {
    /// Change between the initial and revised estimates, as a percentage of
    /// the initial estimate. Zero when the initial estimate is zero.
    pub fn percent_change(&self) -> f64 {
        super::commissions_aggregator::percent_change(self.initial_estimate, self.revised_estimate)
    }

    /// Commission due on the revised estimate after fee, split and
    /// commission percentages are applied in sequence.
    pub fn commission_due(&self) -> f64 {
        self.revised_estimate
            * (self.fee_percent / 100.0)
            * (self.split_percent / 100.0)
            * (self.commission_percent / 100.0)
    }

    pub fn is_closed(&self) -> bool {
        self.status == RECORD_STATUS_CLOSED
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::commission_records)]
#[serde(rename_all = "camelCase")]
pub struct NewCommissionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client_name: String,
    pub adjuster_name: String,
    pub office: Option<String>,
    pub salesperson_id: Option<String>,
    pub signed_date: NaiveDate,
    pub initial_estimate: f64,
    pub revised_estimate: f64,
    pub fee_percent: f64,
    pub split_percent: f64,
    pub commission_percent: f64,
    pub amount_paid: f64,
    pub amount_received: f64,
    pub status: String,
}

impl NewCommissionRecord {
    /// Validates the new record before any write is attempted
    pub fn validate(&self) -> Result<()> {
        if self.client_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "clientName".to_string(),
            )));
        }
        if self.adjuster_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "adjusterName".to_string(),
            )));
        }
        if self.initial_estimate < 0.0 || self.revised_estimate < 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Estimates cannot be negative".to_string(),
            )));
        }
        for (label, value) in [
            ("feePercent", self.fee_percent),
            ("splitPercent", self.split_percent),
            ("commissionPercent", self.commission_percent),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{} must be between 0 and 100",
                    label
                ))));
            }
        }
        RecordStatus::from_str(&self.status)
            .map_err(|e| Error::Validation(ValidationError::InvalidInput(e)))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Open,
    Closed,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Open => RECORD_STATUS_OPEN,
            RecordStatus::Closed => RECORD_STATUS_CLOSED,
        }
    }
}

impl FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == RECORD_STATUS_OPEN => Ok(RecordStatus::Open),
            s if s == RECORD_STATUS_CLOSED => Ok(RecordStatus::Closed),
            _ => Err(format!("Unknown record status: {}", s)),
        }
    }
}
