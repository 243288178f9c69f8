use async_trait::async_trait;
use log::debug;
use std::str::FromStr;
use std::sync::Arc;

use crate::commissions::commissions_model::{CommissionRecord, NewCommissionRecord, RecordStatus};
use crate::errors::{DatabaseError, Error, Result};
use crate::pipeline::pipeline_errors::PipelineError;
use crate::pipeline::pipeline_model::{ConvertDealInput, DealStage, NewPipelineDeal, PipelineDeal};
use crate::pipeline::pipeline_traits::{PipelineRepositoryTrait, PipelineServiceTrait};

/// Service for the open-deal pipeline and its one-way conversion into
/// realized commission records.
pub struct PipelineService {
    pipeline_repository: Arc<dyn PipelineRepositoryTrait>,
}

impl PipelineService {
    pub fn new(pipeline_repository: Arc<dyn PipelineRepositoryTrait>) -> Self {
        Self {
            pipeline_repository,
        }
    }

    fn find_deal(&self, deal_id: &str) -> Result<PipelineDeal> {
        self.pipeline_repository
            .get_by_id(deal_id)
            .map_err(|e| match e {
                Error::Database(DatabaseError::QueryFailed(diesel::result::Error::NotFound)) => {
                    Error::Pipeline(PipelineError::NotFound(deal_id.to_string()))
                }
                other => other,
            })
    }
}

#[async_trait]
impl PipelineServiceTrait for PipelineService {
    fn get_deals(&self) -> Result<Vec<PipelineDeal>> {
        self.pipeline_repository.list()
    }

    fn get_deal(&self, deal_id: &str) -> Result<PipelineDeal> {
        self.find_deal(deal_id)
    }

    fn get_weighted_value(&self) -> Result<f64> {
        let deals = self.pipeline_repository.list()?;
        Ok(deals.iter().map(PipelineDeal::weighted_value).sum())
    }

    async fn create_deal(&self, mut new_deal: NewPipelineDeal) -> Result<PipelineDeal> {
        new_deal.validate()?;

        if new_deal.probability.is_none() {
            let stage = DealStage::from_str(&new_deal.stage).map_err(Error::Pipeline)?;
            new_deal.probability = Some(stage.default_probability());
        }

        self.pipeline_repository.insert(new_deal)
    }

    async fn update_deal(&self, deal: PipelineDeal) -> Result<PipelineDeal> {
        DealStage::from_str(&deal.stage).map_err(Error::Pipeline)?;
        self.pipeline_repository.update(deal)
    }

    async fn delete_deal(&self, deal_id: &str) -> Result<usize> {
        self.pipeline_repository.delete(deal_id)
    }

    async fn convert_deal(&self, input: ConvertDealInput) -> Result<CommissionRecord> {
        if input.adjuster_name.trim().is_empty() {
            return Err(Error::Validation(
                crate::errors::ValidationError::MissingField("adjusterName".to_string()),
            ));
        }

        let deal = self.find_deal(&input.deal_id)?;
        let estimate = input.initial_estimate.unwrap_or(deal.expected_value);

        let new_record = NewCommissionRecord {
            id: None,
            client_name: deal.client_name.clone(),
            adjuster_name: input.adjuster_name.clone(),
            office: input.office.clone(),
            salesperson_id: deal.salesperson_id.clone(),
            signed_date: input.signed_date,
            initial_estimate: estimate,
            revised_estimate: estimate,
            fee_percent: input.fee_percent,
            split_percent: input.split_percent,
            commission_percent: input.commission_percent,
            amount_paid: 0.0,
            amount_received: 0.0,
            status: RecordStatus::Open.as_str().to_string(),
        };
        new_record.validate()?;

        debug!("Converting pipeline deal {} to commission", deal.id);
        self.pipeline_repository
            .convert_to_commission(&deal.id, new_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MockPipelineRepository {
        deals: Mutex<Vec<PipelineDeal>>,
        converted: Mutex<Vec<CommissionRecord>>,
    }

    impl MockPipelineRepository {
        fn new(deals: Vec<PipelineDeal>) -> Self {
            Self {
                deals: Mutex::new(deals),
                converted: Mutex::new(Vec::new()),
            }
        }
    }

    impl PipelineRepositoryTrait for MockPipelineRepository {
        fn list(&self) -> Result<Vec<PipelineDeal>> {
            Ok(self.deals.lock().unwrap().clone())
        }

        fn get_by_id(&self, deal_id: &str) -> Result<PipelineDeal> {
            self.deals
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id == deal_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::QueryFailed(diesel::result::Error::NotFound))
                })
        }

        fn insert(&self, new_deal: NewPipelineDeal) -> Result<PipelineDeal> {
            let now = Utc::now().naive_utc();
            let deal = PipelineDeal {
                id: new_deal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                client_name: new_deal.client_name,
                expected_value: new_deal.expected_value,
                expected_close_date: new_deal.expected_close_date,
                stage: new_deal.stage,
                probability: new_deal.probability.unwrap_or(10),
                notes: new_deal.notes,
                salesperson_id: new_deal.salesperson_id,
                created_at: now,
                updated_at: now,
            };
            self.deals.lock().unwrap().push(deal.clone());
            Ok(deal)
        }

        fn update(&self, deal: PipelineDeal) -> Result<PipelineDeal> {
            let mut deals = self.deals.lock().unwrap();
            let slot = deals
                .iter_mut()
                .find(|d| d.id == deal.id)
                .expect("deal exists");
            *slot = deal.clone();
            Ok(deal)
        }

        fn delete(&self, deal_id: &str) -> Result<usize> {
            let mut deals = self.deals.lock().unwrap();
            let before = deals.len();
            deals.retain(|d| d.id != deal_id);
            Ok(before - deals.len())
        }

        fn convert_to_commission(
            &self,
            deal_id: &str,
            new_record: NewCommissionRecord,
        ) -> Result<CommissionRecord> {
            let mut deals = self.deals.lock().unwrap();
            let before = deals.len();
            deals.retain(|d| d.id != deal_id);
            if deals.len() == before {
                return Err(Error::Pipeline(PipelineError::NotFound(
                    deal_id.to_string(),
                )));
            }

            let now = Utc::now().naive_utc();
            let record = CommissionRecord {
                id: new_record.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                client_name: new_record.client_name,
                adjuster_name: new_record.adjuster_name,
                office: new_record.office,
                salesperson_id: new_record.salesperson_id,
                signed_date: new_record.signed_date,
                initial_estimate: new_record.initial_estimate,
                revised_estimate: new_record.revised_estimate,
                fee_percent: new_record.fee_percent,
                split_percent: new_record.split_percent,
                commission_percent: new_record.commission_percent,
                amount_paid: new_record.amount_paid,
                amount_received: new_record.amount_received,
                status: new_record.status,
                created_at: now,
                updated_at: now,
            };
            self.converted.lock().unwrap().push(record.clone());
            Ok(record)
        }
    }

    fn deal(id: &str, value: f64, probability: i32) -> PipelineDeal {
        let now = Utc::now().naive_utc();
        PipelineDeal {
            id: id.to_string(),
            client_name: "Harborview HOA".to_string(),
            expected_value: value,
            expected_close_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            stage: "negotiation".to_string(),
            probability,
            notes: None,
            salesperson_id: Some("sp-1".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn convert_input(deal_id: &str) -> ConvertDealInput {
        ConvertDealInput {
            deal_id: deal_id.to_string(),
            adjuster_name: "Pat Vega".to_string(),
            office: Some("Tampa".to_string()),
            signed_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            initial_estimate: None,
            fee_percent: 10.0,
            split_percent: 100.0,
            commission_percent: 20.0,
        }
    }

    #[tokio::test]
    async fn new_deals_default_probability_from_stage() {
        let repo = Arc::new(MockPipelineRepository::new(Vec::new()));
        let service = PipelineService::new(repo);

        let created = service
            .create_deal(NewPipelineDeal {
                id: None,
                client_name: "Bayfront Condos".to_string(),
                expected_value: 2_000_000.0,
                expected_close_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                stage: "proposal".to_string(),
                probability: None,
                notes: None,
                salesperson_id: None,
            })
            .await
            .unwrap();

        assert_eq!(created.probability, 50);
    }

    #[tokio::test]
    async fn weighted_value_sums_probability_adjusted_deals() {
        let repo = Arc::new(MockPipelineRepository::new(vec![
            deal("d1", 1_000_000.0, 50),
            deal("d2", 2_000_000.0, 25),
        ]));
        let service = PipelineService::new(repo);

        assert_eq!(service.get_weighted_value().unwrap(), 1_000_000.0);
    }

    #[tokio::test]
    async fn conversion_carries_deal_fields_and_removes_the_deal() {
        let repo = Arc::new(MockPipelineRepository::new(vec![deal(
            "d1",
            3_000_000.0,
            75,
        )]));
        let service = PipelineService::new(repo.clone());

        let record = service.convert_deal(convert_input("d1")).await.unwrap();
        assert_eq!(record.client_name, "Harborview HOA");
        assert_eq!(record.initial_estimate, 3_000_000.0);
        assert_eq!(record.revised_estimate, 3_000_000.0);
        assert_eq!(record.salesperson_id.as_deref(), Some("sp-1"));
        assert_eq!(record.status, "open");

        assert!(repo.deals.lock().unwrap().is_empty());
        assert_eq!(repo.converted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn converting_a_missing_deal_is_not_found() {
        let repo = Arc::new(MockPipelineRepository::new(Vec::new()));
        let service = PipelineService::new(repo);

        let err = service.convert_deal(convert_input("ghost")).await;
        assert!(matches!(
            err,
            Err(Error::Pipeline(PipelineError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn conversion_requires_an_adjuster() {
        let repo = Arc::new(MockPipelineRepository::new(vec![deal(
            "d1",
            3_000_000.0,
            75,
        )]));
        let service = PipelineService::new(repo.clone());

        let mut input = convert_input("d1");
        input.adjuster_name = "  ".to_string();
        assert!(service.convert_deal(input).await.is_err());
        // Validation failed before any write; the deal is still there.
        assert_eq!(repo.deals.lock().unwrap().len(), 1);
    }
}
