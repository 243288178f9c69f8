use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::pipeline::pipeline_errors::PipelineError;

pub const STAGE_PROSPECT: &str = "prospect";
pub const STAGE_QUALIFIED: &str = "qualified";
pub const STAGE_PROPOSAL: &str = "proposal";
pub const STAGE_NEGOTIATION: &str = "negotiation";
pub const STAGE_CLOSING: &str = "closing";

/// Funnel stage of an open opportunity. Each stage carries a default win
/// probability the user can override per deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStage {
    Prospect,
    Qualified,
    Proposal,
    Negotiation,
    Closing,
}

impl DealStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Prospect => STAGE_PROSPECT,
            DealStage::Qualified => STAGE_QUALIFIED,
            DealStage::Proposal => STAGE_PROPOSAL,
            DealStage::Negotiation => STAGE_NEGOTIATION,
            DealStage::Closing => STAGE_CLOSING,
        }
    }

    pub fn default_probability(&self) -> i32 {
        match self {
            DealStage::Prospect => 10,
            DealStage::Qualified => 25,
            DealStage::Proposal => 50,
            DealStage::Negotiation => 75,
            DealStage::Closing => 90,
        }
    }
}

impl FromStr for DealStage {
    type Err = PipelineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == STAGE_PROSPECT => Ok(DealStage::Prospect),
            s if s == STAGE_QUALIFIED => Ok(DealStage::Qualified),
            s if s == STAGE_PROPOSAL => Ok(DealStage::Proposal),
            s if s == STAGE_NEGOTIATION => Ok(DealStage::Negotiation),
            s if s == STAGE_CLOSING => Ok(DealStage::Closing),
            _ => Err(PipelineError::UnknownStage(s.to_string())),
        }
    }
}

/// An open, unclosed sales opportunity. Converting it produces a commission
/// record and removes the deal; there is no way back.
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
#[diesel(table_name = crate::schema::pipeline_deals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PipelineDeal {
    pub id: String,
    pub client_name: String,
    pub expected_value: f64,
    pub expected_close_date: NaiveDate,
    pub stage: String,
    pub probability: i32,
    pub notes: Option<String>,
    pub salesperson_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PipelineDeal {
    /// Expected value weighted by the win probability.
    pub fn weighted_value(&self) -> f64 {
        self.expected_value * self.probability as f64 / 100.0
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::pipeline_deals)]
#[serde(rename_all = "camelCase")]
pub struct NewPipelineDeal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client_name: String,
    pub expected_value: f64,
    pub expected_close_date: NaiveDate,
    pub stage: String,
    pub probability: Option<i32>,
    pub notes: Option<String>,
    pub salesperson_id: Option<String>,
}

impl NewPipelineDeal {
    pub fn validate(&self) -> Result<()> {
        if self.client_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "clientName".to_string(),
            )));
        }
        if self.expected_value < 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expected value cannot be negative".to_string(),
            )));
        }
        if let Some(p) = self.probability {
            if !(0..=100).contains(&p) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Probability must be between 0 and 100".to_string(),
                )));
            }
        }
        DealStage::from_str(&self.stage).map_err(Error::Pipeline)?;
        Ok(())
    }
}

/// Everything the user fills in on the "mark closed" dialog. Fields the
/// pipeline deal already knows are carried over automatically.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConvertDealInput {
    pub deal_id: String,
    pub adjuster_name: String,
    pub office: Option<String>,
    pub signed_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_estimate: Option<f64>,
    pub fee_percent: f64,
    pub split_percent: f64,
    pub commission_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_defaults_step_up_the_funnel() {
        assert_eq!(DealStage::Prospect.default_probability(), 10);
        assert_eq!(DealStage::Qualified.default_probability(), 25);
        assert_eq!(DealStage::Proposal.default_probability(), 50);
        assert_eq!(DealStage::Negotiation.default_probability(), 75);
        assert_eq!(DealStage::Closing.default_probability(), 90);
    }

    #[test]
    fn stage_round_trips_through_strings() {
        for stage in [
            DealStage::Prospect,
            DealStage::Qualified,
            DealStage::Proposal,
            DealStage::Negotiation,
            DealStage::Closing,
        ] {
            assert_eq!(DealStage::from_str(stage.as_str()).unwrap(), stage);
        }
        assert!(DealStage::from_str("won").is_err());
    }
}
