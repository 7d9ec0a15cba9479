//! Port contracts for candidate persistence and batch purge.

pub mod batch;
pub mod repository;

pub use batch::{BatchService, BatchServiceError, BatchServiceResult};
pub use repository::{
    CandidateHistoryRepository, CandidateIdentityRepository, CandidateRepositoryError,
    CandidateRepositoryResult,
};
