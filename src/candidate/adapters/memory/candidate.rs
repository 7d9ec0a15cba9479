//! In-memory candidate identity repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::candidate::{
    domain::{CandidateId, CandidateIdentity, CandidateIdentityAttribute},
    ports::{CandidateIdentityRepository, CandidateRepositoryError, CandidateRepositoryResult},
};

/// Thread-safe in-memory candidate repository.
///
/// Attributes are kept apart from the candidate row, the way the relational
/// schema stores them: lookups return the candidate without attributes and
/// updates never touch them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateRepository {
    state: Arc<RwLock<InMemoryCandidateState>>,
}

#[derive(Debug, Default)]
struct InMemoryCandidateState {
    candidates: HashMap<CandidateId, CandidateIdentity>,
    attributes: HashMap<CandidateId, Vec<CandidateIdentityAttribute>>,
    update_count: usize,
}

impl InMemoryCandidateRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a candidate together with its attributes.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Persistence`] when the internal
    /// lock is poisoned.
    pub fn insert(&self, candidate: CandidateIdentity) -> CandidateRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let attributes = candidate.attributes().to_vec();
        let mut row = candidate;
        row.set_attributes(Vec::new());
        state.attributes.insert(row.id(), attributes);
        state.candidates.insert(row.id(), row);
        Ok(())
    }

    /// Removes a candidate and its attributes. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Persistence`] when the internal
    /// lock is poisoned.
    pub fn remove(&self, id: CandidateId) -> CandidateRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.attributes.remove(&id);
        Ok(state.candidates.remove(&id).is_some())
    }

    /// Returns the stored candidate row, without attributes.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Persistence`] when the internal
    /// lock is poisoned.
    pub fn get(&self, id: CandidateId) -> CandidateRepositoryResult<Option<CandidateIdentity>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.candidates.get(&id).cloned())
    }

    /// Returns how many times [`CandidateIdentityRepository::update`]
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Persistence`] when the internal
    /// lock is poisoned.
    pub fn update_count(&self) -> CandidateRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.update_count)
    }
}

#[async_trait]
impl CandidateIdentityRepository for InMemoryCandidateRepository {
    async fn find_by_id(
        &self,
        id: CandidateId,
    ) -> CandidateRepositoryResult<Option<CandidateIdentity>> {
        self.get(id)
    }

    async fn attributes_of(
        &self,
        id: CandidateId,
    ) -> CandidateRepositoryResult<Vec<CandidateIdentityAttribute>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.attributes.get(&id).cloned().unwrap_or_default())
    }

    async fn update(&self, candidate: &CandidateIdentity) -> CandidateRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.candidates.contains_key(&candidate.id()) {
            return Err(CandidateRepositoryError::NotFound(candidate.id()));
        }

        let mut row = candidate.clone();
        row.set_attributes(Vec::new());
        state.candidates.insert(row.id(), row);
        state.update_count += 1;
        Ok(())
    }
}
