//! In-memory workflow catalog.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::workflow::{
    domain::{AdminUser, State, Workflow, WorkflowId},
    ports::{WorkflowCatalog, WorkflowError, WorkflowResult},
};

/// In-memory workflow catalog preserving registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkflowCatalog {
    workflows: Arc<RwLock<Vec<(Workflow, Vec<State>)>>>,
}

impl InMemoryWorkflowCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an enabled workflow with its states.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Engine`] when the internal lock is poisoned.
    pub fn register(&self, workflow: Workflow, states: Vec<State>) -> WorkflowResult<()> {
        let mut workflows = self.workflows.write().map_err(lock_error)?;
        workflows.retain(|(existing, _)| existing.id != workflow.id);
        workflows.push((workflow, states));
        Ok(())
    }
}

#[async_trait]
impl WorkflowCatalog for InMemoryWorkflowCatalog {
    async fn enabled_workflows(
        &self,
        _user: &AdminUser,
        _locale: &str,
    ) -> WorkflowResult<Vec<Workflow>> {
        let workflows = self.workflows.read().map_err(lock_error)?;
        Ok(workflows
            .iter()
            .map(|(workflow, _)| workflow.clone())
            .collect())
    }

    async fn states_by_workflow(
        &self,
        workflow_id: WorkflowId,
        _user: &AdminUser,
    ) -> WorkflowResult<Vec<State>> {
        let workflows = self.workflows.read().map_err(lock_error)?;
        workflows
            .iter()
            .find(|(workflow, _)| workflow.id == workflow_id)
            .map(|(_, states)| states.clone())
            .ok_or(WorkflowError::WorkflowNotFound(workflow_id))
    }
}
