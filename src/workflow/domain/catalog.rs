//! Workflow definitions and states listed by the engine.

use super::{StateId, WorkflowId};

/// An enabled workflow definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    /// Workflow identifier.
    pub id: WorkflowId,
    /// Display name.
    pub name: String,
}

impl Workflow {
    /// Creates a workflow entry.
    #[must_use]
    pub fn new(id: WorkflowId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A state of a workflow definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// State identifier.
    pub id: StateId,
    /// Display name.
    pub name: String,
}

impl State {
    /// Creates a state entry.
    #[must_use]
    pub fn new(id: StateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
