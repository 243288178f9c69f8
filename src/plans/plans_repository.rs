use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::plans::plans_constants::APPROVAL_STATUS_PENDING;
use crate::plans::plans_model::{NewSalesPlan, SalesPlan};
use crate::plans::plans_traits::PlanRepositoryTrait;
use crate::schema::sales_plans;
use crate::schema::sales_plans::dsl::*;

pub struct PlanRepository {
    pool: Arc<DbPool>,
}

impl PlanRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        PlanRepository { pool }
    }
}

impl PlanRepositoryTrait for PlanRepository {
    fn load_plans(&self) -> Result<Vec<SalesPlan>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sales_plans
            .order((year.desc(), salesperson_id.asc()))
            .load::<SalesPlan>(&mut conn)?)
    }

    fn list_for_salesperson(&self, salesperson: &str) -> Result<Vec<SalesPlan>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sales_plans
            .filter(salesperson_id.eq(salesperson))
            .order(year.desc())
            .load::<SalesPlan>(&mut conn)?)
    }

    fn list_pending(&self) -> Result<Vec<SalesPlan>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sales_plans
            .filter(approval_status.eq(APPROVAL_STATUS_PENDING))
            .order(submitted_at.asc())
            .load::<SalesPlan>(&mut conn)?)
    }

    fn get_by_id(&self, plan_id: &str) -> Result<SalesPlan> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sales_plans.find(plan_id).first::<SalesPlan>(&mut conn)?)
    }

    fn insert(&self, mut new_plan: NewSalesPlan) -> Result<SalesPlan> {
        let mut conn = get_connection(&self.pool)?;

        new_plan.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(sales_plans::table)
            .values(&new_plan)
            .returning(sales_plans::all_columns)
            .get_result(&mut conn)?)
    }

    fn update(&self, mut plan: SalesPlan) -> Result<SalesPlan> {
        let mut conn = get_connection(&self.pool)?;
        plan.updated_at = chrono::Utc::now().naive_utc();
        let plan_id = plan.id.clone();

        diesel::update(sales_plans.find(&plan_id))
            .set(&plan)
            .execute(&mut conn)?;

        Ok(sales_plans.find(plan_id).first::<SalesPlan>(&mut conn)?)
    }

    fn delete(&self, plan_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(sales_plans.find(plan_id)).execute(&mut conn)?)
    }
}
