//! Resource history entries recorded by the engine for each action firing.

use super::{ResourceHistoryId, ResourceId, WorkflowId};

/// One action firing on a workflow resource.
///
/// Task handlers receive the entry identifier and resolve the resource the
/// action ran on through [`crate::workflow::ports::ResourceHistoryService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHistory {
    id: ResourceHistoryId,
    resource_id: ResourceId,
    resource_type: String,
    workflow_id: WorkflowId,
}

impl ResourceHistory {
    /// Creates a resource history entry.
    #[must_use]
    pub fn new(
        id: ResourceHistoryId,
        resource_id: ResourceId,
        resource_type: impl Into<String>,
        workflow_id: WorkflowId,
    ) -> Self {
        Self {
            id,
            resource_id,
            resource_type: resource_type.into(),
            workflow_id,
        }
    }

    /// Returns the history entry identifier.
    #[must_use]
    pub const fn id(&self) -> ResourceHistoryId {
        self.id
    }

    /// Returns the identifier of the resource the action ran on.
    #[must_use]
    pub const fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    /// Returns the resource type name.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the workflow the resource belongs to.
    #[must_use]
    pub const fn workflow_id(&self) -> WorkflowId {
        self.workflow_id
    }
}
