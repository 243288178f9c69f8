use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{NewSalesGoal, SalesGoal};

/// Trait for sales goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<SalesGoal>>;
    fn get_for_salesperson_year(&self, salesperson_id: &str, year: i32)
        -> Result<Option<SalesGoal>>;
    fn upsert_goal(&self, new_goal: NewSalesGoal) -> Result<SalesGoal>;
    fn delete_goal(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for sales goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<SalesGoal>>;
    fn get_goal(&self, salesperson_id: &str, year: i32) -> Result<Option<SalesGoal>>;
    async fn set_goal(&self, new_goal: NewSalesGoal) -> Result<SalesGoal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
}
