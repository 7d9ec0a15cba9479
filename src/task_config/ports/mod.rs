//! Port contracts for task configuration persistence.

pub mod repository;

pub use repository::{TaskConfigRepository, TaskConfigRepositoryError, TaskConfigRepositoryResult};
