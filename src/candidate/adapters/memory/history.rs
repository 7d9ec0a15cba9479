//! In-memory candidate history log.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::candidate::{
    domain::CandidateIdentityHistory,
    ports::{CandidateHistoryRepository, CandidateRepositoryResult},
};
use crate::workflow::domain::ResourceHistoryId;

/// Append-only in-memory history log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryRepository {
    rows: Arc<RwLock<Vec<CandidateIdentityHistory>>>,
}

impl InMemoryHistoryRepository {
    /// Creates an empty history log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every row in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::candidate::ports::CandidateRepositoryError::Persistence`]
    /// when the internal lock is poisoned.
    pub fn rows(&self) -> CandidateRepositoryResult<Vec<CandidateIdentityHistory>> {
        let rows = self.rows.read().map_err(lock_error)?;
        Ok(rows.clone())
    }
}

#[async_trait]
impl CandidateHistoryRepository for InMemoryHistoryRepository {
    async fn insert(&self, history: &CandidateIdentityHistory) -> CandidateRepositoryResult<()> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        rows.push(history.clone());
        Ok(())
    }

    async fn find_by_wf_history(
        &self,
        id: ResourceHistoryId,
    ) -> CandidateRepositoryResult<Option<CandidateIdentityHistory>> {
        let rows = self.rows.read().map_err(lock_error)?;
        Ok(rows
            .iter()
            .rev()
            .find(|row| row.wf_resource_history_id() == id)
            .cloned())
    }
}
