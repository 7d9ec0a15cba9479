//! Audit rows appended by workflow tasks.

use crate::workflow::domain::ResourceHistoryId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Outcome of one task execution, keyed by the resource history entry of
/// the action that ran it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIdentityHistory {
    wf_resource_history_id: ResourceHistoryId,
    status: String,
    comment: String,
    created_at: DateTime<Utc>,
}

impl CandidateIdentityHistory {
    /// Creates a history row stamped with the current time.
    #[must_use]
    pub fn new(
        wf_resource_history_id: ResourceHistoryId,
        status: impl Into<String>,
        comment: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            wf_resource_history_id,
            status: status.into(),
            comment: comment.into(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a row loaded from storage.
    #[must_use]
    pub const fn from_persisted(
        wf_resource_history_id: ResourceHistoryId,
        status: String,
        comment: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            wf_resource_history_id,
            status,
            comment,
            created_at,
        }
    }

    /// Returns the resource history entry this row describes.
    #[must_use]
    pub const fn wf_resource_history_id(&self) -> ResourceHistoryId {
        self.wf_resource_history_id
    }

    /// Returns the outcome status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the free-text outcome description.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns when the row was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
