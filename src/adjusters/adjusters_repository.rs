use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::adjusters::adjusters_model::{
    Adjuster, AdjusterRating, NewAdjuster, NewAdjusterRating,
};
use crate::adjusters::adjusters_traits::AdjusterRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::{adjuster_ratings, adjusters};

pub struct AdjusterRepository {
    pool: Arc<DbPool>,
}

impl AdjusterRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AdjusterRepository { pool }
    }
}

impl AdjusterRepositoryTrait for AdjusterRepository {
    fn list(&self) -> Result<Vec<Adjuster>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(adjusters::table
            .order(adjusters::name.asc())
            .load::<Adjuster>(&mut conn)?)
    }

    fn get_by_id(&self, adjuster_id: &str) -> Result<Adjuster> {
        let mut conn = get_connection(&self.pool)?;
        Ok(adjusters::table
            .find(adjuster_id)
            .first::<Adjuster>(&mut conn)?)
    }

    fn insert(&self, mut new_adjuster: NewAdjuster) -> Result<Adjuster> {
        let mut conn = get_connection(&self.pool)?;

        new_adjuster.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(adjusters::table)
            .values(&new_adjuster)
            .returning(adjusters::all_columns)
            .get_result(&mut conn)?)
    }

    fn update(&self, mut adjuster: Adjuster) -> Result<Adjuster> {
        let mut conn = get_connection(&self.pool)?;
        adjuster.updated_at = chrono::Utc::now().naive_utc();
        let adjuster_id = adjuster.id.clone();

        diesel::update(adjusters::table.find(&adjuster_id))
            .set(&adjuster)
            .execute(&mut conn)?;

        Ok(adjusters::table
            .find(adjuster_id)
            .first::<Adjuster>(&mut conn)?)
    }

    fn delete(&self, adjuster_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(adjusters::table.find(adjuster_id)).execute(&mut conn)?)
    }

    fn insert_rating(&self, mut new_rating: NewAdjusterRating) -> Result<AdjusterRating> {
        let mut conn = get_connection(&self.pool)?;

        new_rating.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(adjuster_ratings::table)
            .values(&new_rating)
            .returning(adjuster_ratings::all_columns)
            .get_result(&mut conn)?)
    }

    fn ratings_for(&self, adjuster: &str) -> Result<Vec<AdjusterRating>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(adjuster_ratings::table
            .filter(adjuster_ratings::adjuster_id.eq(adjuster))
            .order(adjuster_ratings::created_at.desc())
            .load::<AdjusterRating>(&mut conn)?)
    }

    fn all_ratings(&self) -> Result<Vec<AdjusterRating>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(adjuster_ratings::table.load::<AdjusterRating>(&mut conn)?)
    }
}
