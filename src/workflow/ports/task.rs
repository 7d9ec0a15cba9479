//! Task handler contract invoked by the workflow engine.

use crate::workflow::domain::{AdminUser, ResourceHistoryId, TaskRequest};
use async_trait::async_trait;

/// A typed task plugged into a workflow action.
///
/// The engine fires the task once per action and uses the boolean result to
/// pick the outbound transition. Handlers never fail the engine: every error
/// is logged and reported as `false`.
#[async_trait]
pub trait WorkflowTask: Send + Sync {
    /// Runs the task for one resource history entry.
    async fn process_task_with_result(
        &self,
        resource_history_id: ResourceHistoryId,
        request: &TaskRequest,
        locale: &str,
        user: Option<&AdminUser>,
    ) -> bool;

    /// Returns the localized task title.
    fn title(&self, locale: &str) -> String;
}
