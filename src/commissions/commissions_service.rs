use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::commissions::commissions_aggregator::{
    self, AdjusterSummary, CommissionSummary, OfficeSummary, YearActuals,
};
use crate::commissions::commissions_model::{CommissionRecord, NewCommissionRecord};
use crate::commissions::commissions_traits::{CommissionRepositoryTrait, CommissionServiceTrait};
use crate::errors::Result;

/// Service for managing commission records and their derived summaries
pub struct CommissionService {
    commission_repository: Arc<dyn CommissionRepositoryTrait>,
}

impl CommissionService {
    pub fn new(commission_repository: Arc<dyn CommissionRepositoryTrait>) -> Self {
        Self {
            commission_repository,
        }
    }
}

#[async_trait]
impl CommissionServiceTrait for CommissionService {
    fn get_records(&self) -> Result<Vec<CommissionRecord>> {
        self.commission_repository.list()
    }

    fn get_records_for_salesperson(&self, salesperson_id: &str) -> Result<Vec<CommissionRecord>> {
        self.commission_repository
            .list_for_salesperson(salesperson_id)
    }

    fn get_record(&self, record_id: &str) -> Result<CommissionRecord> {
        self.commission_repository.get_by_id(record_id)
    }

    async fn create_record(&self, new_record: NewCommissionRecord) -> Result<CommissionRecord> {
        new_record.validate()?;
        debug!("Creating commission record for {}", new_record.client_name);
        self.commission_repository.insert(new_record)
    }

    async fn update_record(&self, record: CommissionRecord) -> Result<CommissionRecord> {
        self.commission_repository.update(record)
    }

    async fn delete_record(&self, record_id: &str) -> Result<usize> {
        self.commission_repository.delete(record_id)
    }

    fn get_summary(&self) -> Result<CommissionSummary> {
        let records = self.commission_repository.list()?;
        Ok(commissions_aggregator::summarize(&records))
    }

    fn get_summary_for_year(&self, year: i32) -> Result<CommissionSummary> {
        let records = self.commission_repository.list_for_year(year)?;
        Ok(commissions_aggregator::summarize(&records))
    }

    fn get_adjuster_summaries(&self) -> Result<Vec<AdjusterSummary>> {
        let records = self.commission_repository.list()?;
        Ok(commissions_aggregator::summarize_by_adjuster(&records))
    }

    fn get_office_summaries(&self) -> Result<Vec<OfficeSummary>> {
        let records = self.commission_repository.list()?;
        Ok(commissions_aggregator::summarize_by_office(&records))
    }

    fn get_year_actuals(&self, year: i32) -> Result<YearActuals> {
        let records = self.commission_repository.list_for_year(year)?;
        Ok(commissions_aggregator::year_actuals(&records, year))
    }
}
