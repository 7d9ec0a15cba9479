//! In-memory workflow engine recording state transitions.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::workflow::{
    domain::{ResourceHistory, ResourceId, StateId, WorkflowId},
    ports::{WorkflowEngine, WorkflowResult},
};

/// A state change requested through [`InMemoryWorkflowEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    /// Resource that was moved.
    pub resource_id: ResourceId,
    /// Target workflow.
    pub workflow_id: WorkflowId,
    /// Target state.
    pub state_id: StateId,
}

/// Workflow engine that records requested transitions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkflowEngine {
    transitions: Arc<RwLock<Vec<StateTransition>>>,
}

impl InMemoryWorkflowEngine {
    /// Creates an engine with no recorded transitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns recorded transitions in request order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::workflow::ports::WorkflowError::Engine`] when the
    /// internal lock is poisoned.
    pub fn transitions(&self) -> WorkflowResult<Vec<StateTransition>> {
        let transitions = self.transitions.read().map_err(lock_error)?;
        Ok(transitions.clone())
    }
}

#[async_trait]
impl WorkflowEngine for InMemoryWorkflowEngine {
    async fn move_to_state(
        &self,
        resource: &ResourceHistory,
        workflow: WorkflowId,
        state: StateId,
    ) -> WorkflowResult<()> {
        let mut transitions = self.transitions.write().map_err(lock_error)?;
        transitions.push(StateTransition {
            resource_id: resource.resource_id(),
            workflow_id: workflow,
            state_id: state,
        });
        Ok(())
    }
}
