//! In-memory batch service purging seeded candidates.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::InMemoryCandidateRepository;
use crate::candidate::{
    domain::{BatchId, CandidateId},
    ports::{BatchService, BatchServiceError, BatchServiceResult},
};

/// Batch service purging candidates from an [`InMemoryCandidateRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryBatchService {
    candidates: InMemoryCandidateRepository,
    batches: Arc<RwLock<HashMap<BatchId, Vec<CandidateId>>>>,
}

impl InMemoryBatchService {
    /// Creates a batch service over a candidate repository.
    #[must_use]
    pub fn new(candidates: InMemoryCandidateRepository) -> Self {
        Self {
            candidates,
            batches: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a batch and the candidates it contains.
    ///
    /// # Errors
    ///
    /// Returns [`BatchServiceError::Service`] when the internal lock is
    /// poisoned.
    pub fn register_batch(
        &self,
        batch_id: BatchId,
        candidate_ids: Vec<CandidateId>,
    ) -> BatchServiceResult<()> {
        let mut batches = self.batches.write().map_err(lock_error)?;
        batches.insert(batch_id, candidate_ids);
        Ok(())
    }
}

fn lock_error(err: impl std::fmt::Display) -> BatchServiceError {
    BatchServiceError::service(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BatchService for InMemoryBatchService {
    async fn purge_batch(&self, batch_id: BatchId) -> BatchServiceResult<()> {
        let candidate_ids = {
            let mut batches = self.batches.write().map_err(lock_error)?;
            batches
                .remove(&batch_id)
                .ok_or(BatchServiceError::BatchNotFound(batch_id))?
        };

        for candidate_id in candidate_ids {
            self.candidates
                .remove(candidate_id)
                .map_err(BatchServiceError::service)?;
        }
        Ok(())
    }
}
