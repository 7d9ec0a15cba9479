//! Diesel row models for task configuration.

use super::schema::workflow_task_identity_import_cf;
use crate::task_config::domain::IdentityImportTaskConfig;
use crate::workflow::domain::{StateId, TaskId, WorkflowId};
use diesel::prelude::*;

/// Configuration row, used for both reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = workflow_task_identity_import_cf)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct TaskConfigRow {
    pub id_task: i32,
    pub id_workflow: i32,
    pub id_state1: i32,
    pub id_state2: i32,
    pub id_state3: i32,
}

/// Updatable columns; the task id is the key and never changes.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = workflow_task_identity_import_cf)]
pub(super) struct TaskConfigChangeset {
    pub id_workflow: i32,
    pub id_state1: i32,
    pub id_state2: i32,
    pub id_state3: i32,
}

impl From<&IdentityImportTaskConfig> for TaskConfigRow {
    fn from(config: &IdentityImportTaskConfig) -> Self {
        Self {
            id_task: config.task_id().value(),
            id_workflow: config.workflow_id().value(),
            id_state1: config.state1().value(),
            id_state2: config.state2().value(),
            id_state3: config.state3().value(),
        }
    }
}

impl From<&IdentityImportTaskConfig> for TaskConfigChangeset {
    fn from(config: &IdentityImportTaskConfig) -> Self {
        Self {
            id_workflow: config.workflow_id().value(),
            id_state1: config.state1().value(),
            id_state2: config.state2().value(),
            id_state3: config.state3().value(),
        }
    }
}

impl From<TaskConfigRow> for IdentityImportTaskConfig {
    fn from(row: TaskConfigRow) -> Self {
        Self::new(TaskId::new(row.id_task))
            .with_workflow(WorkflowId::new(row.id_workflow))
            .with_states(
                StateId::new(row.id_state1),
                StateId::new(row.id_state2),
                StateId::new(row.id_state3),
            )
    }
}
