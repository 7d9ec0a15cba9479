//! Port contracts towards the workflow engine.

pub mod catalog;
pub mod engine;
pub mod resource_history;
pub mod task;

pub use catalog::WorkflowCatalog;
pub use engine::WorkflowEngine;
pub use resource_history::ResourceHistoryService;
pub use task::WorkflowTask;

use std::sync::Arc;
use thiserror::Error;

/// Result type for workflow engine port operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors returned by workflow engine adapters.
#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    /// The requested workflow is unknown to the engine.
    #[error("workflow not found: {0}")]
    WorkflowNotFound(crate::workflow::domain::WorkflowId),

    /// Engine-side failure.
    #[error("workflow engine error: {0}")]
    Engine(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkflowError {
    /// Wraps an engine error.
    pub fn engine(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Engine(Arc::new(err))
    }
}
