//! Reconciliation tasks chained with their follow-up transition.

use super::{
    IdentityImportTaskService, IdentityTaskError, IdentityTaskResult, TaskTransitionError, lookup,
};
use crate::task_config::{domain::ImportOutcome, ports::TaskConfigRepository};
use crate::workflow::{
    domain::{AdminUser, ResourceHistoryId, TaskId, TaskRequest},
    ports::{ResourceHistoryService, WorkflowEngine, WorkflowTask},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, instrument};

/// A task whose run settles how a candidate was reconciled with the store.
#[async_trait]
pub trait ReconciliationTask: WorkflowTask {
    /// Runs the task and reports the reconciliation outcome.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityTaskError`] when the run fails. A failure may still
    /// carry an outcome, see [`IdentityTaskError::follow_up_outcome`].
    async fn reconcile(
        &self,
        resource_history_id: ResourceHistoryId,
        request: &TaskRequest,
    ) -> IdentityTaskResult<ImportOutcome>;
}

/// Errors raised by a reconciliation run and its follow-up transition.
#[derive(Debug, Clone, Error)]
pub enum FollowUpError {
    /// The reconciliation run failed.
    #[error(transparent)]
    Task(#[from] IdentityTaskError),

    /// The follow-up transition failed.
    #[error(transparent)]
    Transition(#[from] TaskTransitionError),
}

/// Result type for follow-up runs.
pub type FollowUpResult<T> = Result<T, FollowUpError>;

/// Runs a reconciliation task, then moves the resource to the state the
/// task configuration maps its outcome to.
///
/// Successful imports go to state 1 and successful identifications to
/// state 2. A run rejected with a store conflict still moves the resource
/// to state 3 but reports failure. Other failures leave the resource in
/// place.
#[derive(Clone)]
pub struct FollowUpTask<T, H, C, E>
where
    T: ReconciliationTask,
    H: ResourceHistoryService,
    C: TaskConfigRepository,
    E: WorkflowEngine,
{
    task_id: TaskId,
    task: T,
    resource_history: Arc<H>,
    transitions: IdentityImportTaskService<C, E>,
}

impl<T, H, C, E> FollowUpTask<T, H, C, E>
where
    T: ReconciliationTask,
    H: ResourceHistoryService,
    C: TaskConfigRepository,
    E: WorkflowEngine,
{
    /// Chains `task`, configured as `task_id`, with its follow-up transition.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        task: T,
        resource_history: Arc<H>,
        transitions: IdentityImportTaskService<C, E>,
    ) -> Self {
        Self {
            task_id,
            task,
            resource_history,
            transitions,
        }
    }

    /// Runs the wrapped task and applies the follow-up transition of its
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpError::Task`] when the run fails, after any
    /// transition its failure carries, or [`FollowUpError::Transition`] when
    /// the task is not configured or the engine rejects the move.
    #[instrument(
        skip_all,
        fields(
            task_id = %self.task_id,
            resource_history_id = %resource_history_id,
            resource_id = tracing::field::Empty
        )
    )]
    pub async fn run(
        &self,
        resource_history_id: ResourceHistoryId,
        request: &TaskRequest,
    ) -> FollowUpResult<ImportOutcome> {
        let (outcome, failure) = match self.task.reconcile(resource_history_id, request).await {
            Ok(outcome) => (outcome, None),
            Err(err) => {
                let Some(outcome) = err.follow_up_outcome() else {
                    return Err(err.into());
                };
                (outcome, Some(err))
            }
        };

        let entry = lookup::resource_entry(&*self.resource_history, resource_history_id).await?;
        self.transitions
            .advance(self.task_id, &entry, outcome)
            .await
            .inspect_err(|err| error!(error = %err, ?outcome, "follow-up transition failed"))?;

        failure.map_or(Ok(outcome), |err| Err(err.into()))
    }
}

#[async_trait]
impl<T, H, C, E> WorkflowTask for FollowUpTask<T, H, C, E>
where
    T: ReconciliationTask,
    H: ResourceHistoryService,
    C: TaskConfigRepository,
    E: WorkflowEngine,
{
    async fn process_task_with_result(
        &self,
        resource_history_id: ResourceHistoryId,
        request: &TaskRequest,
        _locale: &str,
        _user: Option<&AdminUser>,
    ) -> bool {
        self.run(resource_history_id, request).await.is_ok()
    }

    fn title(&self, locale: &str) -> String {
        self.task.title(locale)
    }
}
