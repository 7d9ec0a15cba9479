//! Repository ports for candidate identities and their history rows.

use crate::candidate::domain::{
    CandidateId, CandidateIdentity, CandidateIdentityAttribute, CandidateIdentityHistory,
};
use crate::workflow::domain::ResourceHistoryId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for candidate repository operations.
pub type CandidateRepositoryResult<T> = Result<T, CandidateRepositoryError>;

/// Candidate identity persistence contract.
#[async_trait]
pub trait CandidateIdentityRepository: Send + Sync {
    /// Finds a candidate by identifier, without its attributes.
    ///
    /// Returns `None` when the candidate does not exist.
    async fn find_by_id(
        &self,
        id: CandidateId,
    ) -> CandidateRepositoryResult<Option<CandidateIdentity>>;

    /// Returns the attributes of a candidate in intake order.
    async fn attributes_of(
        &self,
        id: CandidateId,
    ) -> CandidateRepositoryResult<Vec<CandidateIdentityAttribute>>;

    /// Persists the scalar fields of an existing candidate.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::NotFound`] when the candidate does
    /// not exist.
    async fn update(&self, candidate: &CandidateIdentity) -> CandidateRepositoryResult<()>;
}

/// Append-only history persistence contract.
#[async_trait]
pub trait CandidateHistoryRepository: Send + Sync {
    /// Appends a history row.
    async fn insert(&self, history: &CandidateIdentityHistory) -> CandidateRepositoryResult<()>;

    /// Returns the latest history row recorded for a resource history entry.
    async fn find_by_wf_history(
        &self,
        id: ResourceHistoryId,
    ) -> CandidateRepositoryResult<Option<CandidateIdentityHistory>>;
}

/// Errors returned by candidate repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CandidateRepositoryError {
    /// The candidate was not found.
    #[error("candidate identity not found: {0}")]
    NotFound(CandidateId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CandidateRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
