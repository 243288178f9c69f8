use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use std::sync::Arc;

use crate::errors::{DatabaseError, Error, Result};
use crate::notifications::notifications_model::NewNotification;
use crate::notifications::notifications_traits::NotificationServiceTrait;
use crate::plans::plans_constants::*;
use crate::plans::plans_errors::PlanError;
use crate::plans::plans_model::{ApprovalStatus, NewSalesPlan, SalesPlan};
use crate::plans::plans_traits::{PlanRepositoryTrait, PlanServiceTrait};

/// Service driving the sales plan approval workflow.
///
/// Status updates and the notification that follows them are two separate
/// writes. A notification failure after a successful status update is logged
/// and swallowed; there is no compensation step.
pub struct PlanService {
    plan_repository: Arc<dyn PlanRepositoryTrait>,
    notification_service: Arc<dyn NotificationServiceTrait>,
}

impl PlanService {
    pub fn new(
        plan_repository: Arc<dyn PlanRepositoryTrait>,
        notification_service: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        Self {
            plan_repository,
            notification_service,
        }
    }

    fn find_plan(&self, plan_id: &str) -> Result<SalesPlan> {
        self.plan_repository.get_by_id(plan_id).map_err(|e| match e {
            Error::Database(DatabaseError::QueryFailed(diesel::result::Error::NotFound)) => {
                Error::Plan(PlanError::NotFound(plan_id.to_string()))
            }
            other => other,
        })
    }

    fn guard_transition(plan: &SalesPlan, next: ApprovalStatus) -> Result<()> {
        let current = plan.status().map_err(Error::Plan)?;
        if !current.can_transition(next) {
            return Err(Error::Plan(PlanError::InvalidTransition {
                from: current.as_str().to_string(),
                to: next.as_str().to_string(),
            }));
        }
        Ok(())
    }

    async fn notify_quietly(&self, notification: NewNotification) {
        if let Err(e) = self.notification_service.notify(notification).await {
            error!("Plan status changed but notification insert failed: {}", e);
        }
    }
}

#[async_trait]
impl PlanServiceTrait for PlanService {
    fn get_plans(&self) -> Result<Vec<SalesPlan>> {
        self.plan_repository.load_plans()
    }

    fn get_plans_for_salesperson(&self, salesperson_id: &str) -> Result<Vec<SalesPlan>> {
        self.plan_repository.list_for_salesperson(salesperson_id)
    }

    fn get_pending_plans(&self) -> Result<Vec<SalesPlan>> {
        self.plan_repository.list_pending()
    }

    fn get_plan(&self, plan_id: &str) -> Result<SalesPlan> {
        self.find_plan(plan_id)
    }

    async fn create_plan(&self, mut new_plan: NewSalesPlan) -> Result<SalesPlan> {
        new_plan.validate()?;
        new_plan.approval_status = APPROVAL_STATUS_DRAFT.to_string();
        self.plan_repository.insert(new_plan)
    }

    /// Edits are allowed in `draft` and `rejected`; editing a rejected plan
    /// moves it back to `draft` so it can be resubmitted.
    async fn update_plan(&self, mut plan: SalesPlan) -> Result<SalesPlan> {
        let existing = self.find_plan(&plan.id)?;
        let current = existing.status().map_err(Error::Plan)?;
        if !current.is_editable() {
            return Err(Error::Plan(PlanError::NotEditable(
                current.as_str().to_string(),
            )));
        }

        if current == ApprovalStatus::Rejected {
            debug!("Reopening rejected plan {} as draft", plan.id);
            plan.approval_status = APPROVAL_STATUS_DRAFT.to_string();
        } else {
            plan.approval_status = existing.approval_status.clone();
        }
        plan.submitted_at = existing.submitted_at;
        plan.reviewed_at = existing.reviewed_at;
        plan.reviewer_id = existing.reviewer_id.clone();
        plan.rejection_note = existing.rejection_note.clone();
        plan.created_at = existing.created_at;

        self.plan_repository.update(plan)
    }

    async fn submit_plan(&self, plan_id: &str, director_id: &str) -> Result<SalesPlan> {
        let mut plan = self.find_plan(plan_id)?;
        Self::guard_transition(&plan, ApprovalStatus::PendingApproval)?;

        plan.approval_status = APPROVAL_STATUS_PENDING.to_string();
        plan.submitted_at = Some(Utc::now().naive_utc());
        plan.reviewed_at = None;
        plan.reviewer_id = None;
        plan.rejection_note = None;
        let updated = self.plan_repository.update(plan)?;

        self.notify_quietly(NewNotification::new(
            director_id,
            NOTIFY_PLAN_SUBMITTED,
            format!(
                "Sales plan for {} ({}) is awaiting your review",
                updated.salesperson_id, updated.year
            ),
        ))
        .await;

        Ok(updated)
    }

    async fn approve_plan(&self, plan_id: &str, reviewer: &str) -> Result<SalesPlan> {
        let mut plan = self.find_plan(plan_id)?;
        Self::guard_transition(&plan, ApprovalStatus::Approved)?;

        plan.approval_status = APPROVAL_STATUS_APPROVED.to_string();
        plan.reviewed_at = Some(Utc::now().naive_utc());
        plan.reviewer_id = Some(reviewer.to_string());
        let updated = self.plan_repository.update(plan)?;

        self.notify_quietly(NewNotification::new(
            &updated.salesperson_id,
            NOTIFY_PLAN_APPROVED,
            format!("Your {} sales plan was approved", updated.year),
        ))
        .await;

        Ok(updated)
    }

    async fn reject_plan(&self, plan_id: &str, reviewer: &str, note: &str) -> Result<SalesPlan> {
        let mut plan = self.find_plan(plan_id)?;
        Self::guard_transition(&plan, ApprovalStatus::Rejected)?;

        plan.approval_status = APPROVAL_STATUS_REJECTED.to_string();
        plan.reviewed_at = Some(Utc::now().naive_utc());
        plan.reviewer_id = Some(reviewer.to_string());
        plan.rejection_note = Some(note.to_string());
        let updated = self.plan_repository.update(plan)?;

        self.notify_quietly(NewNotification::new(
            &updated.salesperson_id,
            NOTIFY_PLAN_REJECTED,
            format!("Your {} sales plan was sent back: {}", updated.year, note),
        ))
        .await;

        Ok(updated)
    }

    async fn delete_plan(&self, plan_id: &str) -> Result<usize> {
        self.plan_repository.delete(plan_id)
    }
}
