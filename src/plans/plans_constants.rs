pub const APPROVAL_STATUS_DRAFT: &str = "draft";
pub const APPROVAL_STATUS_PENDING: &str = "pending_approval";
pub const APPROVAL_STATUS_APPROVED: &str = "approved";
pub const APPROVAL_STATUS_REJECTED: &str = "rejected";

pub const NOTIFY_PLAN_SUBMITTED: &str = "plan_submitted";
pub const NOTIFY_PLAN_APPROVED: &str = "plan_approved";
pub const NOTIFY_PLAN_REJECTED: &str = "plan_rejected";
