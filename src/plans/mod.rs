pub mod plans_constants;
pub mod plans_errors;
pub mod plans_model;
pub mod plans_repository;
pub mod plans_service;
pub mod plans_traits;

pub use plans_errors::PlanError;
pub use plans_model::{ApprovalStatus, NewSalesPlan, SalesPlan};
pub use plans_repository::PlanRepository;
pub use plans_service::PlanService;
pub use plans_traits::{PlanRepositoryTrait, PlanServiceTrait};
