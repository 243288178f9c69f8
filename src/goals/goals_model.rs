use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Annual revenue target for one salesperson. One row per
/// (salesperson, year); writes go through an upsert on that key.
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
#[diesel(table_name = crate::schema::sales_goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SalesGoal {
    pub id: String,
    pub salesperson_id: String,
    pub year: i32,
    pub target_revenue: f64,
    pub target_deals: i32,
    pub avg_fee_percent: f64,
    pub commission_percent: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::sales_goals)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub salesperson_id: String,
    pub year: i32,
    pub target_revenue: f64,
    pub target_deals: i32,
    pub avg_fee_percent: f64,
    pub commission_percent: f64,
}

impl NewSalesGoal {
    pub fn validate(&self) -> Result<()> {
        if self.salesperson_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "salespersonId".to_string(),
            )));
        }
        if self.target_revenue < 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target revenue cannot be negative".to_string(),
            )));
        }
        if self.target_deals < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target deal count cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
