//! Import of a candidate identity into the identity store.

use super::{
    IdentityTaskError, IdentityTaskResult, ReconciliationTask, lookup, map_to_identity,
    titles::{IMPORT_TITLE_KEY, localized_title},
};
use crate::candidate::{
    domain::{CandidateIdentity, CandidateIdentityHistory},
    ports::{CandidateHistoryRepository, CandidateIdentityRepository},
};
use crate::identity_store::{
    domain::{IdentityChangeRequest, IdentityChangeResponse, RequestAuthor, ResponseStatusType},
    ports::IdentityService,
};
use crate::task_config::domain::ImportOutcome;
use crate::workflow::{
    domain::{AdminUser, ResourceHistoryId, TaskRequest},
    ports::{ResourceHistoryService, WorkflowTask},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Hands a candidate identity to the identity store.
///
/// The store either creates a new identity or matches an existing one. The
/// response status is recorded in the candidate history and, on success,
/// the returned customer id is stored on the candidate.
#[derive(Clone)]
pub struct IdentityImportTask<H, R, L, S, C>
where
    H: ResourceHistoryService,
    R: CandidateIdentityRepository,
    L: CandidateHistoryRepository,
    S: IdentityService,
    C: Clock + Send + Sync,
{
    resource_history: Arc<H>,
    candidates: Arc<R>,
    history: Arc<L>,
    identity_service: Arc<S>,
    clock: Arc<C>,
    author: RequestAuthor,
}

impl<H, R, L, S, C> IdentityImportTask<H, R, L, S, C>
where
    H: ResourceHistoryService,
    R: CandidateIdentityRepository,
    L: CandidateHistoryRepository,
    S: IdentityService,
    C: Clock + Send + Sync,
{
    /// Creates an import task issuing requests as `author`.
    #[must_use]
    pub const fn new(
        resource_history: Arc<H>,
        candidates: Arc<R>,
        history: Arc<L>,
        identity_service: Arc<S>,
        clock: Arc<C>,
        author: RequestAuthor,
    ) -> Self {
        Self {
            resource_history,
            candidates,
            history,
            identity_service,
            clock,
            author,
        }
    }

    /// Imports the candidate behind a resource history entry.
    ///
    /// The candidate is persisted whether or not the store call succeeded.
    /// A successful import reports [`ImportOutcome::Inserted`].
    ///
    /// # Errors
    ///
    /// Returns [`IdentityTaskError`] when the entry or candidate is unknown,
    /// the store call fails or answers with a non-success status, or local
    /// storage fails.
    #[instrument(
        skip_all,
        fields(resource_history_id = %resource_history_id, resource_id = tracing::field::Empty)
    )]
    pub async fn run(
        &self,
        resource_history_id: ResourceHistoryId,
    ) -> IdentityTaskResult<ImportOutcome> {
        self.import(resource_history_id)
            .await
            .inspect(|outcome| info!(?outcome, "candidate identity imported"))
            .inspect_err(|err| error!(error = %err, "candidate identity not imported"))
    }

    async fn import(
        &self,
        resource_history_id: ResourceHistoryId,
    ) -> IdentityTaskResult<ImportOutcome> {
        let entry = lookup::resource_entry(&*self.resource_history, resource_history_id).await?;
        let mut candidate = lookup::candidate_with_attributes(&*self.candidates, &entry).await?;
        let request = IdentityChangeRequest::new(map_to_identity(&candidate));

        debug!(
            client_code = candidate.client_app_code(),
            attributes = request.identity.attributes.len(),
            "calling identity store import"
        );
        let response = self
            .identity_service
            .import_identity(&request, candidate.client_app_code(), &self.author)
            .await;
        let outcome = match response {
            Ok(change) => self.record_response(entry.id(), &mut candidate, change).await,
            Err(err) => Err(err.into()),
        };

        let persisted = self
            .candidates
            .update(&candidate)
            .await
            .map_err(IdentityTaskError::from);
        outcome.and(persisted).map(|()| ImportOutcome::Inserted)
    }

    async fn record_response(
        &self,
        resource_history_id: ResourceHistoryId,
        candidate: &mut CandidateIdentity,
        response: IdentityChangeResponse,
    ) -> IdentityTaskResult<()> {
        let status_type = response.status.status_type;
        let entry = CandidateIdentityHistory::new(
            resource_history_id,
            status_type.as_str(),
            response.status.message.unwrap_or_default(),
            &*self.clock,
        );
        self.history.insert(&entry).await?;

        if !is_import_success(status_type) {
            return Err(IdentityTaskError::Rejected(status_type));
        }
        candidate.set_customer_id(response.customer_id);
        Ok(())
    }
}

const fn is_import_success(status_type: ResponseStatusType) -> bool {
    matches!(
        status_type,
        ResponseStatusType::Success | ResponseStatusType::IncompleteSuccess
    )
}

#[async_trait]
impl<H, R, L, S, C> WorkflowTask for IdentityImportTask<H, R, L, S, C>
where
    H: ResourceHistoryService,
    R: CandidateIdentityRepository,
    L: CandidateHistoryRepository,
    S: IdentityService,
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
        localized_title(IMPORT_TITLE_KEY, locale)
    }
}

#[async_trait]
impl<H, R, L, S, C> ReconciliationTask for IdentityImportTask<H, R, L, S, C>
where
    H: ResourceHistoryService,
    R: CandidateIdentityRepository,
    L: CandidateHistoryRepository,
    S: IdentityService,
    C: Clock + Send + Sync,
{
    async fn reconcile(
        &self,
        resource_history_id: ResourceHistoryId,
        _request: &TaskRequest,
    ) -> IdentityTaskResult<ImportOutcome> {
        self.run(resource_history_id).await
    }
}
