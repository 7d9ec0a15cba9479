//! Workflow catalog port used by the admin configuration form.

use super::WorkflowResult;
use crate::workflow::domain::{AdminUser, State, Workflow, WorkflowId};
use async_trait::async_trait;

/// Lists workflow definitions and their states.
#[async_trait]
pub trait WorkflowCatalog: Send + Sync {
    /// Returns the workflows enabled for `user`, without any blank
    /// placeholder entry.
    async fn enabled_workflows(
        &self,
        user: &AdminUser,
        locale: &str,
    ) -> WorkflowResult<Vec<Workflow>>;

    /// Returns every state of a workflow.
    ///
    /// # Errors
    ///
    /// Returns [`super::WorkflowError::WorkflowNotFound`] when the workflow is
    /// unknown.
    async fn states_by_workflow(
        &self,
        workflow_id: WorkflowId,
        user: &AdminUser,
    ) -> WorkflowResult<Vec<State>>;
}
