//! In-memory workflow engine adapters for tests and local wiring.

mod catalog;
mod engine;
mod resource_history;

pub use catalog::InMemoryWorkflowCatalog;
pub use engine::{InMemoryWorkflowEngine, StateTransition};
pub use resource_history::InMemoryResourceHistoryService;

use crate::workflow::ports::WorkflowError;

fn lock_error(err: impl std::fmt::Display) -> WorkflowError {
    WorkflowError::engine(std::io::Error::other(err.to_string()))
}
