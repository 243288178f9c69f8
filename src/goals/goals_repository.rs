use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::goals::goals_model::{NewSalesGoal, SalesGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::sales_goals;
use crate::schema::sales_goals::dsl::*;

pub struct GoalRepository {
    pool: Arc<DbPool>,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        GoalRepository { pool }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<SalesGoal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sales_goals
            .order((year.desc(), salesperson_id.asc()))
            .load::<SalesGoal>(&mut conn)?)
    }

    fn get_for_salesperson_year(
        &self,
        salesperson: &str,
        goal_year: i32,
    ) -> Result<Option<SalesGoal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sales_goals
            .filter(salesperson_id.eq(salesperson))
            .filter(year.eq(goal_year))
            .first::<SalesGoal>(&mut conn)
            .optional()?)
    }

    fn upsert_goal(&self, mut new_goal: NewSalesGoal) -> Result<SalesGoal> {
        let mut conn = get_connection(&self.pool)?;

        new_goal.id = Some(Uuid::new_v4().to_string());

        diesel::insert_into(sales_goals::table)
            .values(&new_goal)
            .on_conflict((sales_goals::salesperson_id, sales_goals::year))
            .do_update()
            .set((
                sales_goals::target_revenue.eq(new_goal.target_revenue),
                sales_goals::target_deals.eq(new_goal.target_deals),
                sales_goals::avg_fee_percent.eq(new_goal.avg_fee_percent),
                sales_goals::commission_percent.eq(new_goal.commission_percent),
                sales_goals::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        Ok(sales_goals
            .filter(salesperson_id.eq(&new_goal.salesperson_id))
            .filter(year.eq(new_goal.year))
            .first::<SalesGoal>(&mut conn)?)
    }

    fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(sales_goals.find(goal_id)).execute(&mut conn)?)
    }
}
