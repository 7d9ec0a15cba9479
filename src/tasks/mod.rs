//! Workflow task handlers for the identity import process.
//!
//! Three tasks plug into the workflow engine through
//! [`crate::workflow::ports::WorkflowTask`]:
//!
//! - [`IdentityImportTask`] hands a candidate identity to the identity store
//! - [`IdentityIdentifyTask`] records the identity picked by an operator,
//!   optionally pushing attribute overrides first
//! - [`BatchArchiveTask`] purges a processed import batch
//!
//! Each run appends at most one [`crate::candidate::domain::CandidateIdentityHistory`]
//! row. [`IdentityImportTaskService`] moves a resource to the follow-up state
//! configured for a reconciliation outcome, and [`FollowUpTask`] chains the
//! import and identify tasks with that move.

mod archive;
mod comment;
mod error;
mod follow_up;
mod identify;
mod import;
mod lookup;
mod mapper;
mod titles;
mod transition;

pub use archive::{ARCHIVED_COMMENT, ARCHIVED_STATUS, BatchArchiveTask};
pub use comment::build_history_comment;
pub use error::{IdentityTaskError, IdentityTaskResult};
pub use follow_up::{FollowUpError, FollowUpResult, FollowUpTask, ReconciliationTask};
pub use identify::{
    GET_HEADER, IdentityIdentifyTask, LAST_UPDATE_DATE_PARAMETER, OVERRIDE_PREFIX,
    PARAM_ID_CUSTOMER, UPDATE_HEADER,
};
pub use import::IdentityImportTask;
pub use mapper::map_to_identity;
pub use titles::{ARCHIVE_TITLE_KEY, IDENTIFY_TITLE_KEY, IMPORT_TITLE_KEY, localized_title};
pub use transition::{IdentityImportTaskService, TaskTransitionError, TaskTransitionResult};

#[cfg(test)]
mod tests;
