use async_trait::async_trait;

use crate::commissions::commissions_model::{CommissionRecord, NewCommissionRecord};
use crate::errors::Result;
use crate::pipeline::pipeline_model::{ConvertDealInput, NewPipelineDeal, PipelineDeal};

/// Trait for pipeline deal repository operations
pub trait PipelineRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<PipelineDeal>>;
    fn get_by_id(&self, deal_id: &str) -> Result<PipelineDeal>;
    fn insert(&self, new_deal: NewPipelineDeal) -> Result<PipelineDeal>;
    fn update(&self, deal: PipelineDeal) -> Result<PipelineDeal>;
    fn delete(&self, deal_id: &str) -> Result<usize>;

    /// Inserts the commission record and removes the deal as one transaction.
    fn convert_to_commission(
        &self,
        deal_id: &str,
        new_record: NewCommissionRecord,
    ) -> Result<CommissionRecord>;
}

/// Trait for pipeline service operations
#[async_trait]
pub trait PipelineServiceTrait: Send + Sync {
    fn get_deals(&self) -> Result<Vec<PipelineDeal>>;
    fn get_deal(&self, deal_id: &str) -> Result<PipelineDeal>;
    /// Total pipeline value weighted by per-deal probability.
    fn get_weighted_value(&self) -> Result<f64>;
    async fn create_deal(&self, new_deal: NewPipelineDeal) -> Result<PipelineDeal>;
    async fn update_deal(&self, deal: PipelineDeal) -> Result<PipelineDeal>;
    async fn delete_deal(&self, deal_id: &str) -> Result<usize>;
    /// Marks a deal closed-won: creates the commission record and removes
    /// the deal from the pipeline. One-way and irreversible.
    async fn convert_deal(&self, input: ConvertDealInput) -> Result<CommissionRecord>;
}
