use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::plans::plans_constants::*;
use crate::plans::plans_errors::PlanError;

/// Approval lifecycle of a sales plan.
///
/// ```text
/// draft -> pending_approval -> approved
///                           -> rejected -> draft (re-edit)
/// ```
///
/// A rejected plan can only reach `approved` by going back through
/// `draft` and `pending_approval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Draft => APPROVAL_STATUS_DRAFT,
            ApprovalStatus::PendingApproval => APPROVAL_STATUS_PENDING,
            ApprovalStatus::Approved => APPROVAL_STATUS_APPROVED,
            ApprovalStatus::Rejected => APPROVAL_STATUS_REJECTED,
        }
    }

    pub fn can_transition(&self, next: ApprovalStatus) -> bool {
        matches!(
            (self, next),
            (ApprovalStatus::Draft, ApprovalStatus::PendingApproval)
                | (ApprovalStatus::PendingApproval, ApprovalStatus::Approved)
                | (ApprovalStatus::PendingApproval, ApprovalStatus::Rejected)
                | (ApprovalStatus::Rejected, ApprovalStatus::Draft)
        )
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, ApprovalStatus::Draft | ApprovalStatus::Rejected)
    }
}

impl FromStr for ApprovalStatus {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == APPROVAL_STATUS_DRAFT => Ok(ApprovalStatus::Draft),
            s if s == APPROVAL_STATUS_PENDING => Ok(ApprovalStatus::PendingApproval),
            s if s == APPROVAL_STATUS_APPROVED => Ok(ApprovalStatus::Approved),
            s if s == APPROVAL_STATUS_REJECTED => Ok(ApprovalStatus::Rejected),
            _ => Err(PlanError::UnknownStatus(s.to_string())),
        }
    }
}

/// A year-scoped sales plan awaiting director sign-off.
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
#[diesel(table_name = crate::schema::sales_plans)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
// Review fields are cleared on resubmission, so None must write NULL.
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct SalesPlan {
    pub id: String,
    pub salesperson_id: String,
    pub year: i32,
    pub target_revenue: f64,
    pub target_deals: i32,
    pub avg_fee_percent: f64,
    pub commission_percent: f64,
    pub approval_status: String,
    pub submitted_at: Option<NaiveDateTime>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub reviewer_id: Option<String>,
    pub rejection_note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl SalesPlan {
    pub fn status(&self) -> std::result::Result<ApprovalStatus, PlanError> {
        ApprovalStatus::from_str(&self.approval_status)
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::sales_plans)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub salesperson_id: String,
    pub year: i32,
    pub target_revenue: f64,
    pub target_deals: i32,
    pub avg_fee_percent: f64,
    pub commission_percent: f64,
    pub approval_status: String,
}

impl NewSalesPlan {
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_is_reachable_from_draft() {
        let draft = ApprovalStatus::Draft;
        assert!(draft.can_transition(ApprovalStatus::PendingApproval));
        assert!(!draft.can_transition(ApprovalStatus::Approved));
        assert!(!draft.can_transition(ApprovalStatus::Rejected));
        assert!(!draft.can_transition(ApprovalStatus::Draft));
    }

    #[test]
    fn pending_resolves_to_approved_or_rejected() {
        let pending = ApprovalStatus::PendingApproval;
        assert!(pending.can_transition(ApprovalStatus::Approved));
        assert!(pending.can_transition(ApprovalStatus::Rejected));
        assert!(!pending.can_transition(ApprovalStatus::Draft));
    }

    #[test]
    fn rejected_only_returns_to_draft() {
        let rejected = ApprovalStatus::Rejected;
        assert!(rejected.can_transition(ApprovalStatus::Draft));
        assert!(!rejected.can_transition(ApprovalStatus::Approved));
        assert!(!rejected.can_transition(ApprovalStatus::PendingApproval));
    }

    #[test]
    fn approved_is_terminal() {
        let approved = ApprovalStatus::Approved;
        for next in [
            ApprovalStatus::Draft,
            ApprovalStatus::PendingApproval,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
        ] {
            assert!(!approved.can_transition(next));
        }
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            ApprovalStatus::Draft,
            ApprovalStatus::PendingApproval,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
        ] {
            assert_eq!(ApprovalStatus::from_str(status.as_str()).unwrap(), status);
        }
        assert!(ApprovalStatus::from_str("shipped").is_err());
    }
}
