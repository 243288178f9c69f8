pub mod commissions_aggregator;
pub mod commissions_model;
pub mod commissions_repository;
pub mod commissions_service;
pub mod commissions_traits;

pub use commissions_aggregator::{
    percent_change, summarize, summarize_by_adjuster, summarize_by_office, year_actuals,
    AdjusterSummary, CommissionSummary, OfficeSummary, YearActuals,
};
pub use commissions_model::{CommissionRecord, NewCommissionRecord, RecordStatus};
pub use commissions_repository::CommissionRepository;
pub use commissions_service::CommissionService;
pub use commissions_traits::{CommissionRepositoryTrait, CommissionServiceTrait};
