//! Archival of a processed import batch.

use super::{
    IdentityTaskResult, build_history_comment, lookup,
    titles::{ARCHIVE_TITLE_KEY, localized_title},
};
use crate::candidate::{
    domain::{BatchId, CandidateIdentityHistory},
    ports::{BatchService, CandidateHistoryRepository},
};
use crate::workflow::{
    domain::{AdminUser, ResourceHistoryId, TaskRequest},
    ports::{ResourceHistoryService, WorkflowTask},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// History status recorded once a batch was purged.
pub const ARCHIVED_STATUS: &str = "Archived";
/// History comment recorded once a batch was purged.
pub const ARCHIVED_COMMENT: &str = "Identity archived";

/// Purges the batch a workflow resource stands for.
#[derive(Clone)]
pub struct BatchArchiveTask<H, B, L, C>
where
    H: ResourceHistoryService,
    B: BatchService,
    L: CandidateHistoryRepository,
    C: Clock + Send + Sync,
{
    resource_history: Arc<H>,
    batches: Arc<B>,
    history: Arc<L>,
    clock: Arc<C>,
}

impl<H, B, L, C> BatchArchiveTask<H, B, L, C>
where
    H: ResourceHistoryService,
    B: BatchService,
    L: CandidateHistoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates an archive task.
    #[must_use]
    pub const fn new(
        resource_history: Arc<H>,
        batches: Arc<B>,
        history: Arc<L>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            resource_history,
            batches,
            history,
            clock,
        }
    }

    /// Purges the batch behind a resource history entry and records the
    /// archival.
    ///
    /// # Errors
    ///
    /// Returns [`super::IdentityTaskError`] when the entry is unknown, the
    /// batch service fails or local storage fails.
    #[instrument(
        skip_all,
        fields(resource_history_id = %resource_history_id, resource_id = tracing::field::Empty)
    )]
    pub async fn run(&self, resource_history_id: ResourceHistoryId) -> IdentityTaskResult<()> {
        self.archive(resource_history_id)
            .await
            .inspect(|()| info!("batch archived"))
            .inspect_err(|err| error!(error = %err, "batch not archived"))
    }

    async fn archive(&self, resource_history_id: ResourceHistoryId) -> IdentityTaskResult<()> {
        let entry = lookup::resource_entry(&*self.resource_history, resource_history_id).await?;
        self.batches
            .purge_batch(BatchId::from(entry.resource_id()))
            .await?;

        let history = CandidateIdentityHistory::new(
            entry.id(),
            ARCHIVED_STATUS,
            build_history_comment(ARCHIVED_COMMENT, None),
            &*self.clock,
        );
        self.history.insert(&history).await?;
        Ok(())
    }
}

#[async_trait]
impl<H, B, L, C> WorkflowTask for BatchArchiveTask<H, B, L, C>
where
    H: ResourceHistoryService,
    B: BatchService,
    L: CandidateHistoryRepository,
    C: Clock + Send + Sync,
{
    async fn process_task_with_result(
        &self,
        resource_history_id: ResourceHistoryId,
        _request: &TaskRequest,
        _locale: &str,
        _user: Option<&AdminUser>,
    ) -> bool {
        self.run(resource_history_id).await.is_ok()
    }

    fn title(&self, locale: &str) -> String {
        localized_title(ARCHIVE_TITLE_KEY, locale)
    }
}
