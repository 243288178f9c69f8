use async_trait::async_trait;

use crate::commissions::commissions_aggregator::{
    AdjusterSummary, CommissionSummary, OfficeSummary, YearActuals,
};
use crate::commissions::commissions_model::{CommissionRecord, NewCommissionRecord};
use crate::errors::Result;

/// Trait for commission record repository operations
pub trait CommissionRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<CommissionRecord>>;
    fn list_for_year(&self, year: i32) -> Result<Vec<CommissionRecord>>;
    fn list_for_salesperson(&self, salesperson_id: &str) -> Result<Vec<CommissionRecord>>;
    fn get_by_id(&self, record_id: &str) -> Result<CommissionRecord>;
    fn insert(&self, new_record: NewCommissionRecord) -> Result<CommissionRecord>;
    fn insert_many(&self, new_records: Vec<NewCommissionRecord>) -> Result<usize>;
    fn update(&self, record: CommissionRecord) -> Result<CommissionRecord>;
    fn delete(&self, record_id: &str) -> Result<usize>;
}

/// Trait for commission service operations
#[async_trait]
pub trait CommissionServiceTrait: Send + Sync {
    fn get_records(&self) -> Result<Vec<CommissionRecord>>;
    fn get_records_for_salesperson(&self, salesperson_id: &str) -> Result<Vec<CommissionRecord>>;
    fn get_record(&self, record_id: &str) -> Result<CommissionRecord>;
    async fn create_record(&self, new_record: NewCommissionRecord) -> Result<CommissionRecord>;
    async fn update_record(&self, record: CommissionRecord) -> Result<CommissionRecord>;
    async fn delete_record(&self, record_id: &str) -> Result<usize>;
    fn get_summary(&self) -> Result<CommissionSummary>;
    fn get_summary_for_year(&self, year: i32) -> Result<CommissionSummary>;
    fn get_adjuster_summaries(&self) -> Result<Vec<AdjusterSummary>>;
    fn get_office_summaries(&self) -> Result<Vec<OfficeSummary>>;
    fn get_year_actuals(&self, year: i32) -> Result<YearActuals>;
}
