//! Identity import task configuration.

use crate::workflow::domain::{StateId, TaskId, WorkflowId};

/// Reconciliation outcome driving the follow-up transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportOutcome {
    /// The store created a new identity from the candidate.
    Inserted,
    /// An existing identity was matched or selected by an operator.
    Selected,
    /// The store suspects duplicates and needs an operator decision.
    Ambiguous,
}

/// Target workflow and follow-up states of one configured task.
///
/// A task without stored configuration reads as all-zero identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityImportTaskConfig {
    task_id: TaskId,
    workflow_id: WorkflowId,
    state_inserted: StateId,
    state_selected: StateId,
    state_ambiguous: StateId,
}

impl IdentityImportTaskConfig {
    /// Creates an unconfigured entry for a task.
    #[must_use]
    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            ..Self::default()
        }
    }

    /// Sets the target workflow.
    #[must_use]
    pub const fn with_workflow(mut self, workflow_id: WorkflowId) -> Self {
        self.workflow_id = workflow_id;
        self
    }

    /// Sets the three follow-up states.
    #[must_use]
    pub const fn with_states(
        mut self,
        inserted: StateId,
        selected: StateId,
        ambiguous: StateId,
    ) -> Self {
        self.state_inserted = inserted;
        self.state_selected = selected;
        self.state_ambiguous = ambiguous;
        self
    }

    /// Returns the configured task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the target workflow.
    #[must_use]
    pub const fn workflow_id(&self) -> WorkflowId {
        self.workflow_id
    }

    /// Returns the state used once an identity was inserted (state 1).
    #[must_use]
    pub const fn state1(&self) -> StateId {
        self.state_inserted
    }

    /// Returns the state used once an identity was selected (state 2).
    #[must_use]
    pub const fn state2(&self) -> StateId {
        self.state_selected
    }

    /// Returns the state used on duplicate suspicion (state 3).
    #[must_use]
    pub const fn state3(&self) -> StateId {
        self.state_ambiguous
    }

    /// Returns the follow-up state for an outcome.
    #[must_use]
    pub const fn target_state(&self, outcome: ImportOutcome) -> StateId {
        match outcome {
            ImportOutcome::Inserted => self.state_inserted,
            ImportOutcome::Selected => self.state_selected,
            ImportOutcome::Ambiguous => self.state_ambiguous,
        }
    }

    /// Replaces workflow and states, keeping the task id.
    pub const fn assign(
        &mut self,
        workflow_id: WorkflowId,
        inserted: StateId,
        selected: StateId,
        ambiguous: StateId,
    ) {
        self.workflow_id = workflow_id;
        self.state_inserted = inserted;
        self.state_selected = selected;
        self.state_ambiguous = ambiguous;
    }
}
