use async_trait::async_trait;

use crate::errors::Result;
use crate::plans::plans_model::{NewSalesPlan, SalesPlan};

/// Trait for sales plan repository operations
pub trait PlanRepositoryTrait: Send + Sync {
    fn load_plans(&self) -> Result<Vec<SalesPlan>>;
    fn list_for_salesperson(&self, salesperson_id: &str) -> Result<Vec<SalesPlan>>;
    fn list_pending(&self) -> Result<Vec<SalesPlan>>;
    fn get_by_id(&self, plan_id: &str) -> Result<SalesPlan>;
    fn insert(&self, new_plan: NewSalesPlan) -> Result<SalesPlan>;
    fn update(&self, plan: SalesPlan) -> Result<SalesPlan>;
    fn delete(&self, plan_id: &str) -> Result<usize>;
}

/// Trait for sales plan service operations
#[async_trait]
pub trait PlanServiceTrait: Send + Sync {
    fn get_plans(&self) -> Result<Vec<SalesPlan>>;
    fn get_plans_for_salesperson(&self, salesperson_id: &str) -> Result<Vec<SalesPlan>>;
    fn get_pending_plans(&self) -> Result<Vec<SalesPlan>>;
    fn get_plan(&self, plan_id: &str) -> Result<SalesPlan>;
    async fn create_plan(&self, new_plan: NewSalesPlan) -> Result<SalesPlan>;
    async fn update_plan(&self, plan: SalesPlan) -> Result<SalesPlan>;
    async fn submit_plan(&self, plan_id: &str, director_id: &str) -> Result<SalesPlan>;
    async fn approve_plan(&self, plan_id: &str, reviewer_id: &str) -> Result<SalesPlan>;
    async fn reject_plan(&self, plan_id: &str, reviewer_id: &str, note: &str)
        -> Result<SalesPlan>;
    async fn delete_plan(&self, plan_id: &str) -> Result<usize>;
}
