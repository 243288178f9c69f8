use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::salespeople::salespeople_model::{NewSalesperson, Salesperson};
use crate::salespeople::salespeople_traits::SalespersonRepositoryTrait;
use crate::schema::salespeople;
use crate::schema::salespeople::dsl::*;

pub struct SalespersonRepository {
    pool: Arc<DbPool>,
}

impl SalespersonRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SalespersonRepository { pool }
    }
}

impl SalespersonRepositoryTrait for SalespersonRepository {
    fn list(&self, active_only: bool) -> Result<Vec<Salesperson>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = salespeople::table.into_boxed();
        if active_only {
            query = query.filter(is_active.eq(true));
        }
        Ok(query.order(name.asc()).load::<Salesperson>(&mut conn)?)
    }

    fn get_by_id(&self, sp_id: &str) -> Result<Salesperson> {
        let mut conn = get_connection(&self.pool)?;
        Ok(salespeople.find(sp_id).first::<Salesperson>(&mut conn)?)
    }

    fn insert(&self, mut new_salesperson: NewSalesperson) -> Result<Salesperson> {
        let mut conn = get_connection(&self.pool)?;

        new_salesperson.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(salespeople::table)
            .values(&new_salesperson)
            .returning(salespeople::all_columns)
            .get_result(&mut conn)?)
    }

    fn update(&self, mut salesperson: Salesperson) -> Result<Salesperson> {
        let mut conn = get_connection(&self.pool)?;
        salesperson.updated_at = chrono::Utc::now().naive_utc();
        let sp_id = salesperson.id.clone();

        diesel::update(salespeople.find(&sp_id))
            .set(&salesperson)
            .execute(&mut conn)?;

        Ok(salespeople.find(sp_id).first::<Salesperson>(&mut conn)?)
    }
}
