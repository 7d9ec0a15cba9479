//! Resource history lookup port.

use super::WorkflowResult;
use crate::workflow::domain::{ResourceHistory, ResourceHistoryId};
use async_trait::async_trait;

/// Read access to the engine's resource history.
#[async_trait]
pub trait ResourceHistoryService: Send + Sync {
    /// Finds a resource history entry by identifier.
    ///
    /// Returns `None` when the entry does not exist.
    async fn find_by_primary_key(
        &self,
        id: ResourceHistoryId,
    ) -> WorkflowResult<Option<ResourceHistory>>;
}
