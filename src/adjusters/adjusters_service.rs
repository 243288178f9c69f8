use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::adjusters::adjusters_errors::AdjusterError;
use crate::adjusters::adjusters_model::{
    Adjuster, AdjusterRating, NewAdjuster, NewAdjusterRating, RatedAdjuster,
};
use crate::adjusters::adjusters_traits::{AdjusterRepositoryTrait, AdjusterServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

pub struct AdjusterService {
    adjuster_repository: Arc<dyn AdjusterRepositoryTrait>,
}

impl AdjusterService {
    pub fn new(adjuster_repository: Arc<dyn AdjusterRepositoryTrait>) -> Self {
        Self {
            adjuster_repository,
        }
    }

    fn find_adjuster(&self, adjuster_id: &str) -> Result<Adjuster> {
        self.adjuster_repository
            .get_by_id(adjuster_id)
            .map_err(|e| match e {
                Error::Database(DatabaseError::QueryFailed(diesel::result::Error::NotFound)) => {
                    Error::Adjuster(AdjusterError::NotFound(adjuster_id.to_string()))
                }
                other => other,
            })
    }
}

#[async_trait]
impl AdjusterServiceTrait for AdjusterService {
    fn get_adjusters(&self) -> Result<Vec<Adjuster>> {
        self.adjuster_repository.list()
    }

    fn get_rated_adjusters(&self) -> Result<Vec<RatedAdjuster>> {
        let adjusters = self.adjuster_repository.list()?;
        let mut ratings_by_adjuster: HashMap<String, Vec<AdjusterRating>> = HashMap::new();
        for rating in self.adjuster_repository.all_ratings()? {
            ratings_by_adjuster
                .entry(rating.adjuster_id.clone())
                .or_default()
                .push(rating);
        }

        Ok(adjusters
            .into_iter()
            .map(|adjuster| {
                let ratings = ratings_by_adjuster
                    .remove(&adjuster.id)
                    .unwrap_or_default();
                RatedAdjuster::from_ratings(adjuster, &ratings)
            })
            .collect())
    }

    fn get_rated_adjuster(&self, adjuster_id: &str) -> Result<RatedAdjuster> {
        let adjuster = self.find_adjuster(adjuster_id)?;
        let ratings = self.adjuster_repository.ratings_for(adjuster_id)?;
        Ok(RatedAdjuster::from_ratings(adjuster, &ratings))
    }

    async fn create_adjuster(&self, new_adjuster: NewAdjuster) -> Result<Adjuster> {
        new_adjuster.validate()?;
        self.adjuster_repository.insert(new_adjuster)
    }

    async fn update_adjuster(&self, adjuster: Adjuster) -> Result<Adjuster> {
        self.adjuster_repository.update(adjuster)
    }

    async fn delete_adjuster(&self, adjuster_id: &str) -> Result<usize> {
        self.adjuster_repository.delete(adjuster_id)
    }

    async fn rate_adjuster(&self, new_rating: NewAdjusterRating) -> Result<AdjusterRating> {
        new_rating.validate()?;
        // Rating an unknown adjuster is a validation failure, not an FK error.
        self.find_adjuster(&new_rating.adjuster_id)?;
        self.adjuster_repository.insert_rating(new_rating)
    }
}
