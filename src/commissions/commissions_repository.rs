use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::commissions::commissions_model::{CommissionRecord, NewCommissionRecord};
use crate::commissions::commissions_traits::CommissionRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result, ValidationError};
use crate::schema::commission_records;
use crate::schema::commission_records::dsl::*;

pub struct CommissionRepository {
    pool: Arc<DbPool>,
}

impl CommissionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CommissionRepository { pool }
    }

    fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid year: {}",
                year
            ))))?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .ok_or_else(|| Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid year: {}",
                year
            ))))?;
        Ok((start, end))
    }
}

impl CommissionRepositoryTrait for CommissionRepository {
    fn list(&self) -> Result<Vec<CommissionRecord>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(commission_records
            .order(signed_date.desc())
            .load::<CommissionRecord>(&mut conn)?)
    }

    fn list_for_year(&self, year: i32) -> Result<Vec<CommissionRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let (start, end) = Self::year_bounds(year)?;
        Ok(commission_records
            .filter(signed_date.ge(start))
            .filter(signed_date.lt(end))
            .order(signed_date.asc())
            .load::<CommissionRecord>(&mut conn)?)
    }

    fn list_for_salesperson(&self, salesperson: &str) -> Result<Vec<CommissionRecord>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(commission_records
            .filter(salesperson_id.eq(salesperson))
            .order(signed_date.desc())
            .load::<CommissionRecord>(&mut conn)?)
    }

    fn get_by_id(&self, record_id: &str) -> Result<CommissionRecord> {
        let mut conn = get_connection(&self.pool)?;
        Ok(commission_records
            .find(record_id)
            .first::<CommissionRecord>(&mut conn)?)
    }

    fn insert(&self, mut new_record: NewCommissionRecord) -> Result<CommissionRecord> {
        let mut conn = get_connection(&self.pool)?;

        new_record.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(commission_records::table)
            .values(&new_record)
            .returning(commission_records::all_columns)
            .get_result(&mut conn)?)
    }

    fn insert_many(&self, new_records: Vec<NewCommissionRecord>) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let stamped: Vec<NewCommissionRecord> = new_records
            .into_iter()
            .map(|mut r| {
                r.id = Some(Uuid::new_v4().to_string());
                r
            })
            .collect();

        Ok(diesel::insert_into(commission_records::table)
            .values(&stamped)
            .execute(&mut conn)?)
    }

    fn update(&self, mut record: CommissionRecord) -> Result<CommissionRecord> {
        let mut conn = get_connection(&self.pool)?;
        record.updated_at = chrono::Utc::now().naive_utc();
        let record_id = record.id.clone();

        diesel::update(commission_records.find(&record_id))
            .set(&record)
            .execute(&mut conn)?;

        Ok(commission_records
            .find(record_id)
            .first::<CommissionRecord>(&mut conn)?)
    }

    fn delete(&self, record_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(commission_records.find(record_id)).execute(&mut conn)?)
    }
}
