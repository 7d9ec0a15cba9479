//! Failure reasons of a task run.

use crate::candidate::{
    domain::CandidateId,
    ports::{BatchServiceError, CandidateRepositoryError},
};
use crate::identity_store::{domain::ResponseStatusType, ports::IdentityStoreError};
use crate::task_config::domain::ImportOutcome;
use crate::workflow::{domain::ResourceHistoryId, ports::WorkflowError};
use thiserror::Error;

/// Result type for task runs.
pub type IdentityTaskResult<T> = Result<T, IdentityTaskError>;

/// Why a task run reported failure to the workflow engine.
#[derive(Debug, Clone, Error)]
pub enum IdentityTaskError {
    /// The resource history entry that fired the task does not exist.
    #[error("resource history entry not found: {0}")]
    ResourceHistoryNotFound(ResourceHistoryId),

    /// The resource of the entry is not a known candidate identity.
    #[error("candidate identity not found: {0}")]
    CandidateNotFound(CandidateId),

    /// A required form parameter is absent.
    #[error("missing form parameter: {0}")]
    MissingParameter(&'static str),

    /// A form parameter could not be parsed.
    #[error("invalid form parameter {name}: {value:?}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Submitted value.
        value: String,
    },

    /// The identity store answered with a non-success status.
    #[error("identity store answered {0}")]
    Rejected(ResponseStatusType),

    /// The identity-store call could not be completed.
    #[error(transparent)]
    IdentityStore(#[from] IdentityStoreError),

    /// Local candidate storage failed.
    #[error(transparent)]
    Repository(#[from] CandidateRepositoryError),

    /// The batch service failed.
    #[error(transparent)]
    Batch(#[from] BatchServiceError),

    /// The workflow engine failed.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

impl IdentityTaskError {
    /// Returns the follow-up outcome of a failed run, if it has one.
    ///
    /// A store conflict means the store suspects duplicates, which leaves
    /// the candidate [`ImportOutcome::Ambiguous`].
    #[must_use]
    pub const fn follow_up_outcome(&self) -> Option<ImportOutcome> {
        match self {
            Self::Rejected(ResponseStatusType::Conflict) => Some(ImportOutcome::Ambiguous),
            _ => None,
        }
    }
}
