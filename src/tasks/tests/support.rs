//! Shared fixtures for task tests.

use std::sync::Arc;

use crate::candidate::{
    adapters::memory::{InMemoryCandidateRepository, InMemoryHistoryRepository},
    domain::{CandidateId, CandidateIdentity, CandidateIdentityAttribute, CandidateIdentityHistory},
};
use crate::identity_store::{
    domain::{
        IdentityChangeRequest, IdentityChangeResponse, IdentitySearchResponse, RequestAuthor,
    },
    ports::{IdentityService, IdentityStoreResult},
};
use crate::tasks::{IdentityIdentifyTask, IdentityImportTask};
use crate::workflow::{
    adapters::memory::InMemoryResourceHistoryService,
    domain::{ResourceHistory, ResourceHistoryId, ResourceId, WorkflowId},
};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use mockall::mock;
use rstest::fixture;

mock! {
    pub IdentityStore {}

    #[async_trait]
    impl IdentityService for IdentityStore {
        async fn import_identity(
            &self,
            request: &IdentityChangeRequest,
            client_code: &str,
            author: &RequestAuthor,
        ) -> IdentityStoreResult<IdentityChangeResponse>;

        async fn update_identity(
            &self,
            customer_id: &str,
            request: &IdentityChangeRequest,
            client_code: &str,
            author: &RequestAuthor,
        ) -> IdentityStoreResult<IdentityChangeResponse>;

        async fn get_identity(
            &self,
            customer_id: &str,
            client_code: &str,
            author: &RequestAuthor,
        ) -> IdentityStoreResult<IdentitySearchResponse>;
    }
}

pub(super) const AUTHOR: &str = "identityimport";
pub(super) const CLIENT_CODE: &str = "TEST_APP";
pub(super) const RESOURCE_HISTORY_ID: ResourceHistoryId = ResourceHistoryId::new(100);
pub(super) const CANDIDATE_ID: CandidateId = CandidateId::new(7);

pub(super) type TestImportTask = IdentityImportTask<
    InMemoryResourceHistoryService,
    InMemoryCandidateRepository,
    InMemoryHistoryRepository,
    MockIdentityStore,
    DefaultClock,
>;

pub(super) type TestIdentifyTask = IdentityIdentifyTask<
    InMemoryResourceHistoryService,
    InMemoryCandidateRepository,
    InMemoryHistoryRepository,
    MockIdentityStore,
    DefaultClock,
>;

/// In-memory collaborators seeded with one candidate behind one resource
/// history entry.
pub(super) struct Harness {
    pub resource_history: Arc<InMemoryResourceHistoryService>,
    pub candidates: Arc<InMemoryCandidateRepository>,
    pub history: Arc<InMemoryHistoryRepository>,
}

impl Harness {
    pub fn import_task(&self, store: MockIdentityStore) -> TestImportTask {
        IdentityImportTask::new(
            Arc::clone(&self.resource_history),
            Arc::clone(&self.candidates),
            Arc::clone(&self.history),
            Arc::new(store),
            Arc::new(DefaultClock),
            RequestAuthor::application(AUTHOR),
        )
    }

    pub fn identify_task(&self, store: MockIdentityStore) -> TestIdentifyTask {
        IdentityIdentifyTask::new(
            Arc::clone(&self.resource_history),
            Arc::clone(&self.candidates),
            Arc::clone(&self.history),
            Arc::new(store),
            Arc::new(DefaultClock),
            RequestAuthor::application(AUTHOR),
        )
    }

    pub fn history_rows(&self) -> Vec<CandidateIdentityHistory> {
        self.history.rows().expect("history rows should be readable")
    }

    pub fn stored_candidate(&self) -> CandidateIdentity {
        self.candidates
            .get(CANDIDATE_ID)
            .expect("candidate lookup should succeed")
            .expect("candidate should exist")
    }

    pub fn update_count(&self) -> usize {
        self.candidates
            .update_count()
            .expect("update count should be readable")
    }
}

pub(super) fn sample_candidate() -> CandidateIdentity {
    let certified_at = Utc
        .with_ymd_and_hms(2023, 11, 14, 9, 30, 0)
        .single()
        .expect("valid certification date");
    CandidateIdentity::new(CANDIDATE_ID, CLIENT_CODE)
        .with_connection_id("conn-7")
        .with_status("NEW")
        .with_attributes(vec![
            CandidateIdentityAttribute::new("family_name", "Durand")
                .certified("fccertif", certified_at),
            CandidateIdentityAttribute::new("first_name", "Alice"),
            CandidateIdentityAttribute::new("birthdate", "14/07/1989"),
        ])
}

#[fixture]
pub(super) fn harness() -> Harness {
    let resource_history = InMemoryResourceHistoryService::new();
    resource_history
        .record(ResourceHistory::new(
            RESOURCE_HISTORY_ID,
            ResourceId::new(CANDIDATE_ID.value()),
            "IDENTITYIMPORT_CANDIDATE_IDENTITY",
            WorkflowId::new(1),
        ))
        .expect("resource history should be recorded");

    let candidates = InMemoryCandidateRepository::new();
    candidates
        .insert(sample_candidate())
        .expect("candidate should be seeded");

    Harness {
        resource_history: Arc::new(resource_history),
        candidates: Arc::new(candidates),
        history: Arc::new(InMemoryHistoryRepository::new()),
    }
}
