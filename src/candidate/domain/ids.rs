//! Identifier types for the candidate domain.

use crate::workflow::domain::ResourceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a locally held candidate identity.
///
/// Candidate workflows run on the candidate itself, so the workflow resource
/// id is the candidate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(i32);

impl CandidateId {
    /// Wraps a raw candidate identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<ResourceId> for CandidateId {
    fn from(resource_id: ResourceId) -> Self {
        Self(resource_id.value())
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an import batch.
///
/// Batch workflows run on the batch, so the workflow resource id is the
/// batch id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(i32);

impl BatchId {
    /// Wraps a raw batch identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<ResourceId> for BatchId {
    fn from(resource_id: ResourceId) -> Self {
        Self(resource_id.value())
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
