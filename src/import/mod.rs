pub mod import_model;
pub mod import_service;

pub use import_model::CommissionImport;
pub use import_service::{ImportService, ImportServiceTrait};
