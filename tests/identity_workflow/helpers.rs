//! Shared fixtures for identity workflow integration tests.

use async_trait::async_trait;
use identity_import_workflow::candidate::{
    adapters::memory::{
        InMemoryBatchService, InMemoryCandidateRepository, InMemoryHistoryRepository,
    },
    domain::{CandidateId, CandidateIdentity, CandidateIdentityAttribute},
};
use identity_import_workflow::identity_store::{
    domain::{
        IdentityChangeRequest, IdentityChangeResponse, IdentitySearchResponse, RequestAuthor,
    },
    ports::{IdentityService, IdentityStoreError, IdentityStoreResult},
};
use identity_import_workflow::task_config::adapters::memory::InMemoryTaskConfigRepository;
use identity_import_workflow::workflow::{
    adapters::memory::{InMemoryResourceHistoryService, InMemoryWorkflowEngine},
    domain::{ResourceHistory, ResourceHistoryId, ResourceId, WorkflowId},
};
use rstest::fixture;
use std::sync::{Arc, Mutex};

/// Identity-store call observed by [`ScriptedIdentityService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `import_identity` with the client code.
    Import(String),
    /// `update_identity` with the customer id.
    Update(String),
    /// `get_identity` with the customer id.
    Get(String),
}

/// Identity service answering with preset responses and recording calls.
#[derive(Debug, Default)]
pub struct ScriptedIdentityService {
    change: Mutex<Option<IdentityChangeResponse>>,
    search: Mutex<Option<IdentitySearchResponse>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl ScriptedIdentityService {
    /// Sets the response of import and update calls.
    pub fn answer_change(&self, response: IdentityChangeResponse) {
        if let Ok(mut change) = self.change.lock() {
            *change = Some(response);
        }
    }

    /// Sets the response of get calls.
    pub fn answer_search(&self, response: IdentitySearchResponse) {
        if let Ok(mut search) = self.search.lock() {
            *search = Some(response);
        }
    }

    /// Returns the calls made so far.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: StoreCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn unanswered() -> IdentityStoreError {
        IdentityStoreError::Configuration("no scripted response".to_owned())
    }
}

#[async_trait]
impl IdentityService for ScriptedIdentityService {
    async fn import_identity(
        &self,
        _request: &IdentityChangeRequest,
        client_code: &str,
        _author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentityChangeResponse> {
        self.record(StoreCall::Import(client_code.to_owned()));
        self.change
            .lock()
            .ok()
            .and_then(|change| change.clone())
            .ok_or_else(Self::unanswered)
    }

    async fn update_identity(
        &self,
        customer_id: &str,
        _request: &IdentityChangeRequest,
        _client_code: &str,
        _author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentityChangeResponse> {
        self.record(StoreCall::Update(customer_id.to_owned()));
        self.change
            .lock()
            .ok()
            .and_then(|change| change.clone())
            .ok_or_else(Self::unanswered)
    }

    async fn get_identity(
        &self,
        customer_id: &str,
        _client_code: &str,
        _author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentitySearchResponse> {
        self.record(StoreCall::Get(customer_id.to_owned()));
        self.search
            .lock()
            .ok()
            .and_then(|search| search.clone())
            .ok_or_else(Self::unanswered)
    }
}

/// Author name used by every task under test.
pub const AUTHOR: &str = "identityimport";

/// Every collaborator of the identity workflow, backed by memory.
pub struct World {
    /// Engine resource history.
    pub resource_history: Arc<InMemoryResourceHistoryService>,
    /// Candidate storage.
    pub candidates: Arc<InMemoryCandidateRepository>,
    /// Candidate history log.
    pub history: Arc<InMemoryHistoryRepository>,
    /// Batch purge service over `candidates`.
    pub batches: Arc<InMemoryBatchService>,
    /// Task configuration storage.
    pub configs: Arc<InMemoryTaskConfigRepository>,
    /// Engine recording state transitions.
    pub engine: Arc<InMemoryWorkflowEngine>,
    /// Scripted identity store.
    pub store: Arc<ScriptedIdentityService>,
}

impl World {
    /// Author attached to identity-store requests.
    pub fn author() -> RequestAuthor {
        RequestAuthor::application(AUTHOR)
    }

    /// Seeds a candidate and the resource history entry pointing at it.
    ///
    /// # Errors
    ///
    /// Returns an error when an in-memory lock is poisoned.
    pub fn seed_candidate(
        &self,
        resource_history_id: i32,
        candidate_id: i32,
    ) -> eyre::Result<ResourceHistory> {
        let entry = ResourceHistory::new(
            ResourceHistoryId::new(resource_history_id),
            ResourceId::new(candidate_id),
            "IDENTITYIMPORT_CANDIDATE_IDENTITY",
            WorkflowId::new(1),
        );
        self.resource_history.record(entry.clone())?;
        self.candidates.insert(
            CandidateIdentity::new(CandidateId::new(candidate_id), "ANTS")
                .with_status("NEW")
                .with_attributes(vec![
                    CandidateIdentityAttribute::new("family_name", "Leblanc"),
                    CandidateIdentityAttribute::new("first_name", "Chloé"),
                ]),
        )?;
        Ok(entry)
    }
}

/// Provides a fresh in-memory world.
#[fixture]
pub fn world() -> World {
    let candidates = InMemoryCandidateRepository::new();
    World {
        resource_history: Arc::new(InMemoryResourceHistoryService::new()),
        batches: Arc::new(InMemoryBatchService::new(candidates.clone())),
        candidates: Arc::new(candidates),
        history: Arc::new(InMemoryHistoryRepository::new()),
        configs: Arc::new(InMemoryTaskConfigRepository::new()),
        engine: Arc::new(InMemoryWorkflowEngine::new()),
        store: Arc::new(ScriptedIdentityService::default()),
    }
}
