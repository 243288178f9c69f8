pub mod adjusters_errors;
pub mod adjusters_model;
pub mod adjusters_repository;
pub mod adjusters_service;
pub mod adjusters_traits;

pub use adjusters_errors::AdjusterError;
pub use adjusters_model::{Adjuster, AdjusterRating, NewAdjuster, NewAdjusterRating, RatedAdjuster};
pub use adjusters_repository::AdjusterRepository;
pub use adjusters_service::AdjusterService;
pub use adjusters_traits::{AdjusterRepositoryTrait, AdjusterServiceTrait};
