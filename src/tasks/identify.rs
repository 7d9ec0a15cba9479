//! Identification of a candidate with an identity picked by an operator.

use super::{
    IdentityTaskError, IdentityTaskResult, ReconciliationTask, build_history_comment, lookup,
    titles::{IDENTIFY_TITLE_KEY, localized_title},
};
use crate::candidate::{
    domain::CandidateIdentityHistory,
    ports::{CandidateHistoryRepository, CandidateIdentityRepository},
};
use crate::identity_store::{
    domain::{
        AttributeDto, IdentityChangeRequest, IdentityDto, RequestAuthor, ResponseStatus,
        ResponseStatusType,
    },
    ports::IdentityService,
};
use crate::task_config::domain::ImportOutcome;
use crate::workflow::{
    domain::{AdminUser, ResourceHistoryId, TaskRequest},
    ports::{ResourceHistoryService, WorkflowTask},
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Form parameter carrying the customer id picked by the operator.
pub const PARAM_ID_CUSTOMER: &str = "id_customer";
/// Form parameter carrying the last update date of the picked identity.
pub const LAST_UPDATE_DATE_PARAMETER: &str = "last_update_date";
/// Prefix of attribute override parameters.
pub const OVERRIDE_PREFIX: &str = "override-";
/// History header when overrides were pushed to the store.
pub const UPDATE_HEADER: &str = "Identité sélectionnée et mise à jour.\n\nAPI UPDATE identity";
/// History header when the picked identity was only fetched.
pub const GET_HEADER: &str = "Identité sélectionnée.\n\nAPI GET identity";

const CERTIFIER_SUFFIX: &str = "-certif";
const TIMESTAMP_SUFFIX: &str = "-timestamp-certif";
const LAST_UPDATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Links a candidate to the identity an operator picked in the store.
///
/// When the form carries `override-*` parameters the picked identity is
/// first updated with them; otherwise it is fetched to check it still
/// exists.
#[derive(Clone)]
pub struct IdentityIdentifyTask<H, R, L, S, C>
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

impl<H, R, L, S, C> IdentityIdentifyTask<H, R, L, S, C>
where
    H: ResourceHistoryService,
    R: CandidateIdentityRepository,
    L: CandidateHistoryRepository,
    S: IdentityService,
    C: Clock + Send + Sync,
{
    /// Creates an identify task issuing requests as `author`.
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

    /// Identifies the candidate behind a resource history entry with the
    /// customer id submitted in `request`.
    ///
    /// A successful identification reports [`ImportOutcome::Selected`].
    ///
    /// # Errors
    ///
    /// Returns [`IdentityTaskError`] when `id_customer` is missing, override
    /// parameters are malformed, the entry or candidate is unknown, the store
    /// call fails or answers with a non-success status, or local storage
    /// fails.
    #[instrument(
        skip_all,
        fields(resource_history_id = %resource_history_id, resource_id = tracing::field::Empty)
    )]
    pub async fn run(
        &self,
        resource_history_id: ResourceHistoryId,
        request: &TaskRequest,
    ) -> IdentityTaskResult<ImportOutcome> {
        self.identify(resource_history_id, request)
            .await
            .inspect(|outcome| info!(?outcome, "candidate identity identified"))
            .inspect_err(|err| error!(error = %err, "candidate identity not identified"))
    }

    async fn identify(
        &self,
        resource_history_id: ResourceHistoryId,
        request: &TaskRequest,
    ) -> IdentityTaskResult<ImportOutcome> {
        let customer_id = request
            .parameter(PARAM_ID_CUSTOMER)
            .ok_or(IdentityTaskError::MissingParameter(PARAM_ID_CUSTOMER))?;
        let entry = lookup::resource_entry(&*self.resource_history, resource_history_id).await?;
        let mut candidate = lookup::candidate_with_attributes(&*self.candidates, &entry).await?;
        let client_code = candidate.client_app_code().to_owned();

        let (header, outcome) = if request.has_parameter_with_prefix(OVERRIDE_PREFIX) {
            let update = override_request(request, customer_id)?;
            debug!(
                customer_id,
                attributes = update.identity.attributes.len(),
                "calling identity store update"
            );
            let response = self
                .identity_service
                .update_identity(customer_id, &update, &client_code, &self.author)
                .await;
            (UPDATE_HEADER, response.map(|change| change.status))
        } else {
            debug!(customer_id, "calling identity store get");
            let response = self
                .identity_service
                .get_identity(customer_id, &client_code, &self.author)
                .await;
            (GET_HEADER, response.map(|search| search.status))
        };
        let status: ResponseStatus = outcome?;

        let history = CandidateIdentityHistory::new(
            entry.id(),
            status.status_type.as_str(),
            build_history_comment(header, Some(&status)),
            &*self.clock,
        );
        self.history.insert(&history).await?;

        let identified = is_identify_success(status.status_type);
        if identified {
            candidate.set_customer_id(Some(customer_id.to_owned()));
        }
        self.candidates.update(&candidate).await?;

        if identified {
            Ok(ImportOutcome::Selected)
        } else {
            Err(IdentityTaskError::Rejected(status.status_type))
        }
    }
}

const fn is_identify_success(status_type: ResponseStatusType) -> bool {
    matches!(
        status_type,
        ResponseStatusType::Ok | ResponseStatusType::Success | ResponseStatusType::IncompleteSuccess
    )
}

/// Builds the update request carrying the attributes overridden in the form.
///
/// Attributes are emitted in code order. Blank certifier and timestamp
/// fields read as absent.
fn override_request(
    request: &TaskRequest,
    customer_id: &str,
) -> IdentityTaskResult<IdentityChangeRequest> {
    let attributes = request
        .names()
        .filter(|name| !name.ends_with(CERTIFIER_SUFFIX))
        .filter_map(|name| name.strip_prefix(OVERRIDE_PREFIX))
        .map(|code| override_attribute(request, code))
        .collect::<IdentityTaskResult<Vec<_>>>()?;

    Ok(IdentityChangeRequest::new(IdentityDto {
        customer_id: Some(customer_id.to_owned()),
        connection_id: None,
        last_update_date: last_update_date(request)?,
        attributes,
    }))
}

fn override_attribute(request: &TaskRequest, code: &str) -> IdentityTaskResult<AttributeDto> {
    let value = request
        .parameter(&format!("{OVERRIDE_PREFIX}{code}"))
        .unwrap_or_default();
    let certifier = non_blank(request, &format!("{OVERRIDE_PREFIX}{code}{CERTIFIER_SUFFIX}"));
    let timestamp_name = format!("{OVERRIDE_PREFIX}{code}{TIMESTAMP_SUFFIX}");
    let certification_date = non_blank(request, &timestamp_name)
        .map(|raw| parse_epoch_millis(&timestamp_name, raw))
        .transpose()?;

    Ok(AttributeDto {
        key: code.to_owned(),
        value: value.to_owned(),
        certifier: certifier.map(str::to_owned),
        certification_date,
    })
}

fn last_update_date(request: &TaskRequest) -> IdentityTaskResult<Option<DateTime<Utc>>> {
    non_blank(request, LAST_UPDATE_DATE_PARAMETER)
        .map(|raw| {
            NaiveDateTime::parse_from_str(raw.trim(), LAST_UPDATE_DATE_FORMAT)
                .map(|date| date.and_utc())
                .map_err(|_| invalid(LAST_UPDATE_DATE_PARAMETER, raw))
        })
        .transpose()
}

fn parse_epoch_millis(name: &str, raw: &str) -> IdentityTaskResult<DateTime<Utc>> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(|| invalid(name, raw))
}

fn non_blank<'a>(request: &'a TaskRequest, name: &str) -> Option<&'a str> {
    request
        .parameter(name)
        .filter(|value| !value.trim().is_empty())
}

fn invalid(name: &str, value: &str) -> IdentityTaskError {
    IdentityTaskError::InvalidParameter {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

#[async_trait]
impl<H, R, L, S, C> WorkflowTask for IdentityIdentifyTask<H, R, L, S, C>
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
        request: &TaskRequest,
        _locale: &str,
        _user: Option<&AdminUser>,
    ) -> bool {
        self.run(resource_history_id, request).await.is_ok()
    }

    fn title(&self, locale: &str) -> String {
        localized_title(IDENTIFY_TITLE_KEY, locale)
    }
}

#[async_trait]
impl<H, R, L, S, C> ReconciliationTask for IdentityIdentifyTask<H, R, L, S, C>
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
        request: &TaskRequest,
    ) -> IdentityTaskResult<ImportOutcome> {
        self.run(resource_history_id, request).await
    }
}
