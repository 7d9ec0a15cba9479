//! Contract checks of the in-memory repositories.

use eyre::ensure;
use identity_import_workflow::candidate::{
    adapters::memory::{InMemoryBatchService, InMemoryCandidateRepository},
    domain::{BatchId, CandidateId, CandidateIdentity, CandidateIdentityAttribute},
    ports::{BatchService, BatchServiceError, CandidateIdentityRepository, CandidateRepositoryError},
};
use identity_import_workflow::task_config::{
    adapters::memory::InMemoryTaskConfigRepository,
    domain::IdentityImportTaskConfig,
    ports::{TaskConfigRepository, TaskConfigRepositoryError},
};
use identity_import_workflow::workflow::domain::{StateId, TaskId, WorkflowId};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_config_insert_rejects_duplicates() -> eyre::Result<()> {
    let repository = InMemoryTaskConfigRepository::new();
    let config = IdentityImportTaskConfig::new(TaskId::new(1)).with_workflow(WorkflowId::new(2));
    repository.insert(&config).await?;

    let duplicate = repository.insert(&config).await;

    ensure!(matches!(
        duplicate,
        Err(TaskConfigRepositoryError::DuplicateTask(task_id)) if task_id == TaskId::new(1)
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_config_store_requires_existing_row() -> eyre::Result<()> {
    let repository = InMemoryTaskConfigRepository::new();
    let config = IdentityImportTaskConfig::new(TaskId::new(7))
        .with_states(StateId::new(1), StateId::new(2), StateId::new(3));

    let result = repository.store(&config).await;

    ensure!(matches!(result, Err(TaskConfigRepositoryError::NotFound(_))));
    ensure!(repository.load(TaskId::new(7)).await?.is_none());
    repository.delete(TaskId::new(7)).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn candidate_lookup_omits_attributes_until_loaded() -> eyre::Result<()> {
    let repository = InMemoryCandidateRepository::new();
    repository.insert(
        CandidateIdentity::new(CandidateId::new(1), "APP").with_attributes(vec![
            CandidateIdentityAttribute::new("email", "a@example.org"),
            CandidateIdentityAttribute::new("birthdate", "01/01/1990"),
        ]),
    )?;

    let found = repository.find_by_id(CandidateId::new(1)).await?;
    let attributes = repository.attributes_of(CandidateId::new(1)).await?;

    ensure!(found.is_some_and(|candidate| candidate.attributes().is_empty()));
    let codes: Vec<&str> = attributes.iter().map(|a| a.code.as_str()).collect();
    ensure!(codes == ["email", "birthdate"], "unexpected order {codes:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn candidate_update_requires_existing_row() -> eyre::Result<()> {
    let repository = InMemoryCandidateRepository::new();

    let result = repository
        .update(&CandidateIdentity::new(CandidateId::new(9), "APP"))
        .await;

    ensure!(matches!(result, Err(CandidateRepositoryError::NotFound(_))));
    ensure!(repository.update_count()? == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_batch_is_reported() -> eyre::Result<()> {
    let service = InMemoryBatchService::new(InMemoryCandidateRepository::new());

    let result = service.purge_batch(BatchId::new(12)).await;

    ensure!(matches!(
        result,
        Err(BatchServiceError::BatchNotFound(batch)) if batch == BatchId::new(12)
    ));
    Ok(())
}
