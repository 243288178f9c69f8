use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::salespeople::salespeople_model::{NewSalesperson, Salesperson};
use crate::salespeople::salespeople_traits::{
    SalespersonRepositoryTrait, SalespersonServiceTrait,
};

pub struct SalespersonService {
    salesperson_repository: Arc<dyn SalespersonRepositoryTrait>,
}

impl SalespersonService {
    pub fn new(salesperson_repository: Arc<dyn SalespersonRepositoryTrait>) -> Self {
        SalespersonService {
            salesperson_repository,
        }
    }
}

#[async_trait]
impl SalespersonServiceTrait for SalespersonService {
    fn get_salespeople(&self, active_only: bool) -> Result<Vec<Salesperson>> {
        self.salesperson_repository.list(active_only)
    }

    fn get_salesperson(&self, salesperson_id: &str) -> Result<Salesperson> {
        self.salesperson_repository.get_by_id(salesperson_id)
    }

    async fn create_salesperson(&self, new_salesperson: NewSalesperson) -> Result<Salesperson> {
        new_salesperson.validate()?;
        self.salesperson_repository.insert(new_salesperson)
    }

    async fn update_salesperson(&self, salesperson: Salesperson) -> Result<Salesperson> {
        self.salesperson_repository.update(salesperson)
    }

    async fn deactivate_salesperson(&self, salesperson_id: &str) -> Result<Salesperson> {
        let mut salesperson = self.salesperson_repository.get_by_id(salesperson_id)?;
        salesperson.is_active = false;
        self.salesperson_repository.update(salesperson)
    }
}
