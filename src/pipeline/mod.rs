pub mod pipeline_errors;
pub mod pipeline_model;
pub mod pipeline_repository;
pub mod pipeline_service;
pub mod pipeline_traits;

pub use pipeline_errors::PipelineError;
pub use pipeline_model::{ConvertDealInput, DealStage, NewPipelineDeal, PipelineDeal};
pub use pipeline_repository::PipelineRepository;
pub use pipeline_service::PipelineService;
pub use pipeline_traits::{PipelineRepositoryTrait, PipelineServiceTrait};
