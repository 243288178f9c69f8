use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::commissions::commissions_model::{CommissionRecord, NewCommissionRecord};
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::pipeline::pipeline_errors::PipelineError;
use crate::pipeline::pipeline_model::{NewPipelineDeal, PipelineDeal};
use crate::pipeline::pipeline_traits::PipelineRepositoryTrait;
use crate::schema::{commission_records, pipeline_deals};

pub struct PipelineRepository {
    pool: Arc<DbPool>,
}

impl PipelineRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        PipelineRepository { pool }
    }
}

impl PipelineRepositoryTrait for PipelineRepository {
    fn list(&self) -> Result<Vec<PipelineDeal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(pipeline_deals::table
            .order(pipeline_deals::expected_close_date.asc())
            .load::<PipelineDeal>(&mut conn)?)
    }

    fn get_by_id(&self, deal_id: &str) -> Result<PipelineDeal> {
        let mut conn = get_connection(&self.pool)?;
        Ok(pipeline_deals::table
            .find(deal_id)
            .first::<PipelineDeal>(&mut conn)?)
    }

    fn insert(&self, mut new_deal: NewPipelineDeal) -> Result<PipelineDeal> {
        let mut conn = get_connection(&self.pool)?;

        new_deal.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(pipeline_deals::table)
            .values(&new_deal)
            .returning(pipeline_deals::all_columns)
            .get_result(&mut conn)?)
    }

    fn update(&self, mut deal: PipelineDeal) -> Result<PipelineDeal> {
        let mut conn = get_connection(&self.pool)?;
        deal.updated_at = chrono::Utc::now().naive_utc();
        let deal_id = deal.id.clone();

        diesel::update(pipeline_deals::table.find(&deal_id))
            .set(&deal)
            .execute(&mut conn)?;

        Ok(pipeline_deals::table
            .find(deal_id)
            .first::<PipelineDeal>(&mut conn)?)
    }

    fn delete(&self, deal_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(pipeline_deals::table.find(deal_id)).execute(&mut conn)?)
    }

    fn convert_to_commission(
        &self,
        deal_id: &str,
        mut new_record: NewCommissionRecord,
    ) -> Result<CommissionRecord> {
        let mut conn = get_connection(&self.pool)?;

        new_record.id = Some(Uuid::new_v4().to_string());

        conn.transaction::<CommissionRecord, Error, _>(|conn| {
            let record: CommissionRecord = diesel::insert_into(commission_records::table)
                .values(&new_record)
                .returning(commission_records::all_columns)
                .get_result(conn)?;

            let deleted =
                diesel::delete(pipeline_deals::table.find(deal_id)).execute(conn)?;
            if deleted == 0 {
                // Rolls the insert back; the deal vanished under us.
                return Err(Error::Pipeline(PipelineError::NotFound(
                    deal_id.to_string(),
                )));
            }

            Ok(record)
        })
    }
}
