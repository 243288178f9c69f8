use async_trait::async_trait;

use crate::errors::Result;
use crate::salespeople::salespeople_model::{NewSalesperson, Salesperson};

/// Trait for salesperson repository operations
pub trait SalespersonRepositoryTrait: Send + Sync {
    fn list(&self, active_only: bool) -> Result<Vec<Salesperson>>;
    fn get_by_id(&self, salesperson_id: &str) -> Result<Salesperson>;
    fn insert(&self, new_salesperson: NewSalesperson) -> Result<Salesperson>;
    fn update(&self, salesperson: Salesperson) -> Result<Salesperson>;
}

/// Trait for salesperson service operations
#[async_trait]
pub trait SalespersonServiceTrait: Send + Sync {
    fn get_salespeople(&self, active_only: bool) -> Result<Vec<Salesperson>>;
    fn get_salesperson(&self, salesperson_id: &str) -> Result<Salesperson>;
    async fn create_salesperson(&self, new_salesperson: NewSalesperson) -> Result<Salesperson>;
    async fn update_salesperson(&self, salesperson: Salesperson) -> Result<Salesperson>;
    async fn deactivate_salesperson(&self, salesperson_id: &str) -> Result<Salesperson>;
}
