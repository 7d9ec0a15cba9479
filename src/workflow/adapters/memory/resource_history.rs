//! In-memory resource history service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::workflow::{
    domain::{ResourceHistory, ResourceHistoryId},
    ports::{ResourceHistoryService, WorkflowResult},
};

/// Thread-safe in-memory resource history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceHistoryService {
    entries: Arc<RwLock<HashMap<ResourceHistoryId, ResourceHistory>>>,
}

impl InMemoryResourceHistoryService {
    /// Creates an empty resource history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resource history entry, replacing any entry with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::workflow::ports::WorkflowError::Engine`] when the
    /// internal lock is poisoned.
    pub fn record(&self, entry: ResourceHistory) -> WorkflowResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert(entry.id(), entry);
        Ok(())
    }
}

#[async_trait]
impl ResourceHistoryService for InMemoryResourceHistoryService {
    async fn find_by_primary_key(
        &self,
        id: ResourceHistoryId,
    ) -> WorkflowResult<Option<ResourceHistory>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(&id).cloned())
    }
}
