//! Follow-up transitions driven by the reconciliation outcome.

use crate::task_config::{
    domain::ImportOutcome,
    ports::{TaskConfigRepository, TaskConfigRepositoryError},
};
use crate::workflow::{
    domain::{ResourceHistory, StateId, TaskId},
    ports::{WorkflowEngine, WorkflowError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors raised while moving a resource to its follow-up state.
#[derive(Debug, Clone, Error)]
pub enum TaskTransitionError {
    /// The task has no stored configuration.
    #[error("identity import task {0} is not configured")]
    ConfigNotFound(TaskId),

    /// Loading the configuration failed.
    #[error(transparent)]
    Config(#[from] TaskConfigRepositoryError),

    /// The workflow engine rejected the transition.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

/// Result type for follow-up transitions.
pub type TaskTransitionResult<T> = Result<T, TaskTransitionError>;

/// Moves resources to the state configured for each import outcome.
#[derive(Clone)]
pub struct IdentityImportTaskService<T, E>
where
    T: TaskConfigRepository,
    E: WorkflowEngine,
{
    configs: Arc<T>,
    engine: Arc<E>,
}

impl<T, E> IdentityImportTaskService<T, E>
where
    T: TaskConfigRepository,
    E: WorkflowEngine,
{
    /// Creates a transition service.
    #[must_use]
    pub const fn new(configs: Arc<T>, engine: Arc<E>) -> Self {
        Self { configs, engine }
    }

    /// Moves `resource` to the state configured on `task_id` for `outcome`
    /// and returns that state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTransitionError::ConfigNotFound`] when the task is not
    /// configured, or the repository or engine error otherwise.
    pub async fn advance(
        &self,
        task_id: TaskId,
        resource: &ResourceHistory,
        outcome: ImportOutcome,
    ) -> TaskTransitionResult<StateId> {
        let config = self
            .configs
            .load(task_id)
            .await?
            .ok_or(TaskTransitionError::ConfigNotFound(task_id))?;
        let state = config.target_state(outcome);

        self.engine
            .move_to_state(resource, config.workflow_id(), state)
            .await?;
        info!(
            task_id = %task_id,
            resource_id = %resource.resource_id(),
            state_id = %state,
            ?outcome,
            "resource moved to follow-up state"
        );
        Ok(state)
    }
}
