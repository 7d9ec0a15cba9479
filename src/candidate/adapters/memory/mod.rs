//! In-memory candidate adapters for tests.

mod batch;
mod candidate;
mod history;

pub use batch::InMemoryBatchService;
pub use candidate::InMemoryCandidateRepository;
pub use history::InMemoryHistoryRepository;

use crate::candidate::ports::CandidateRepositoryError;

fn lock_error(err: impl std::fmt::Display) -> CandidateRepositoryError {
    CandidateRepositoryError::persistence(std::io::Error::other(err.to_string()))
}
