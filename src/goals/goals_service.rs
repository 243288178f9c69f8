use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::goals::goals_model::{NewSalesGoal, SalesGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<SalesGoal>> {
        self.goal_repository.load_goals()
    }

    fn get_goal(&self, salesperson_id: &str, year: i32) -> Result<Option<SalesGoal>> {
        self.goal_repository
            .get_for_salesperson_year(salesperson_id, year)
    }

    async fn set_goal(&self, new_goal: NewSalesGoal) -> Result<SalesGoal> {
        new_goal.validate()?;
        self.goal_repository.upsert_goal(new_goal)
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        self.goal_repository.delete_goal(goal_id)
    }
}
