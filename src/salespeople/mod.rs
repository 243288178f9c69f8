pub mod salespeople_model;
pub mod salespeople_repository;
pub mod salespeople_service;
pub mod salespeople_traits;

pub use salespeople_model::{NewSalesperson, Salesperson};
pub use salespeople_repository::SalespersonRepository;
pub use salespeople_service::SalespersonService;
pub use salespeople_traits::{SalespersonRepositoryTrait, SalespersonServiceTrait};
