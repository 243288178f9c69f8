use async_trait::async_trait;

use crate::adjusters::adjusters_model::{
    Adjuster, AdjusterRating, NewAdjuster, NewAdjusterRating, RatedAdjuster,
};
use crate::errors::Result;

/// Trait for adjuster repository operations
pub trait AdjusterRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Adjuster>>;
    fn get_by_id(&self, adjuster_id: &str) -> Result<Adjuster>;
    fn insert(&self, new_adjuster: NewAdjuster) -> Result<Adjuster>;
    fn update(&self, adjuster: Adjuster) -> Result<Adjuster>;
    fn delete(&self, adjuster_id: &str) -> Result<usize>;
    fn insert_rating(&self, new_rating: NewAdjusterRating) -> Result<AdjusterRating>;
    fn ratings_for(&self, adjuster_id: &str) -> Result<Vec<AdjusterRating>>;
    fn all_ratings(&self) -> Result<Vec<AdjusterRating>>;
}

/// Trait for adjuster service operations
#[async_trait]
pub trait AdjusterServiceTrait: Send + Sync {
    fn get_adjusters(&self) -> Result<Vec<Adjuster>>;
    fn get_rated_adjusters(&self) -> Result<Vec<RatedAdjuster>>;
    fn get_rated_adjuster(&self, adjuster_id: &str) -> Result<RatedAdjuster>;
    async fn create_adjuster(&self, new_adjuster: NewAdjuster) -> Result<Adjuster>;
    async fn update_adjuster(&self, adjuster: Adjuster) -> Result<Adjuster>;
    async fn delete_adjuster(&self, adjuster_id: &str) -> Result<usize>;
    async fn rate_adjuster(&self, new_rating: NewAdjusterRating) -> Result<AdjusterRating>;
}
