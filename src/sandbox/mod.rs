pub mod sandbox_errors;
pub mod sandbox_model;
pub mod sandbox_store;

pub use sandbox_errors::SandboxError;
pub use sandbox_model::{HypotheticalDeal, NewHypotheticalDeal, SandboxState};
pub use sandbox_store::{SandboxStore, SANDBOX_STORAGE_KEY};
