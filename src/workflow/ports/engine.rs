//! State transition port.

use super::WorkflowResult;
use crate::workflow::domain::{ResourceHistory, StateId, WorkflowId};
use async_trait::async_trait;

/// Requests state changes from the workflow engine.
#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// Moves the resource behind `resource` to `state` of `workflow`.
    async fn move_to_state(
        &self,
        resource: &ResourceHistory,
        workflow: WorkflowId,
        state: StateId,
    ) -> WorkflowResult<()>;
}
