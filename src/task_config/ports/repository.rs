//! Repository port for task configuration rows.

use crate::task_config::domain::IdentityImportTaskConfig;
use crate::workflow::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task configuration repository operations.
pub type TaskConfigRepositoryResult<T> = Result<T, TaskConfigRepositoryError>;

/// Task configuration persistence contract, keyed by task id.
#[async_trait]
pub trait TaskConfigRepository: Send + Sync {
    /// Stores the configuration of a newly configured task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConfigRepositoryError::DuplicateTask`] when the task is
    /// already configured.
    async fn insert(&self, config: &IdentityImportTaskConfig) -> TaskConfigRepositoryResult<()>;

    /// Replaces the configuration of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConfigRepositoryError::NotFound`] when the task is not
    /// configured.
    async fn store(&self, config: &IdentityImportTaskConfig) -> TaskConfigRepositoryResult<()>;

    /// Loads the configuration of a task.
    ///
    /// Returns `None` when the task is not configured.
    async fn load(
        &self,
        task_id: TaskId,
    ) -> TaskConfigRepositoryResult<Option<IdentityImportTaskConfig>>;

    /// Removes the configuration of a task. Removing an unknown task is a
    /// no-op.
    async fn delete(&self, task_id: TaskId) -> TaskConfigRepositoryResult<()>;
}

/// Errors returned by task configuration repositories.
#[derive(Debug, Clone, Error)]
pub enum TaskConfigRepositoryError {
    /// The task already has a configuration row.
    #[error("task already configured: {0}")]
    DuplicateTask(TaskId),

    /// The task has no configuration row.
    #[error("task configuration not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskConfigRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
