//! Resolution of the resource and candidate a task runs on.

use super::{IdentityTaskError, IdentityTaskResult};
use crate::candidate::{
    domain::{CandidateId, CandidateIdentity},
    ports::CandidateIdentityRepository,
};
use crate::workflow::{
    domain::{ResourceHistory, ResourceHistoryId},
    ports::ResourceHistoryService,
};
use tracing::Span;

/// Loads the resource history entry and records its resource id on the
/// current span.
pub(super) async fn resource_entry<H>(
    service: &H,
    id: ResourceHistoryId,
) -> IdentityTaskResult<ResourceHistory>
where
    H: ResourceHistoryService + ?Sized,
{
    let entry = service
        .find_by_primary_key(id)
        .await?
        .ok_or(IdentityTaskError::ResourceHistoryNotFound(id))?;
    Span::current().record("resource_id", entry.resource_id().value());
    Ok(entry)
}

/// Loads the candidate behind a resource, attributes included.
pub(super) async fn candidate_with_attributes<R>(
    repository: &R,
    entry: &ResourceHistory,
) -> IdentityTaskResult<CandidateIdentity>
where
    R: CandidateIdentityRepository + ?Sized,
{
    let id = CandidateId::from(entry.resource_id());
    let mut candidate = repository
        .find_by_id(id)
        .await?
        .ok_or(IdentityTaskError::CandidateNotFound(id))?;
    candidate.set_attributes(repository.attributes_of(id).await?);
    Ok(candidate)
}
