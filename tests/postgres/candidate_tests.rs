//! Candidate identities and history rows stored in `PostgreSQL`.

use super::helpers::{TestDatabase, test_runtime};
use chrono::{TimeZone, Utc};
use identity_import_workflow::candidate::{
    domain::{
        BatchId, CandidateId, CandidateIdentity, CandidateIdentityAttribute,
        CandidateIdentityHistory,
    },
    ports::{CandidateHistoryRepository, CandidateIdentityRepository, CandidateRepositoryError},
};
use identity_import_workflow::workflow::domain::ResourceHistoryId;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;

const CANDIDATE: CandidateId = CandidateId::new(11);
const BATCH: BatchId = BatchId::new(2);

#[rstest]
fn find_by_id_returns_seeded_candidate(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "candidate_find").expect("database setup");
    db.seed_candidate(CANDIDATE, BATCH, Some("C1"), "mobile")
        .expect("seed candidate");
    let repository = db.candidates().expect("repository setup");
    let rt = test_runtime();

    let found = rt
        .block_on(repository.find_by_id(CANDIDATE))
        .expect("find should succeed")
        .expect("candidate should exist");
    let missing = rt
        .block_on(repository.find_by_id(CandidateId::new(12)))
        .expect("find should succeed");

    assert_eq!(found.id(), CANDIDATE);
    assert_eq!(found.customer_id(), Some("C1"));
    assert_eq!(found.connection_id(), None);
    assert_eq!(found.client_app_code(), "mobile");
    assert_eq!(found.status(), "NEW");
    assert!(missing.is_none());
}

#[rstest]
fn attributes_come_back_in_insertion_order(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "candidate_attrs").expect("database setup");
    let certified_at = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    db.seed_candidate(CANDIDATE, BATCH, None, "mobile")
        .expect("seed candidate");
    db.seed_attribute(CANDIDATE, "family_name", "Durand", Some(("FC", certified_at)))
        .expect("seed attribute");
    db.seed_attribute(CANDIDATE, "email", "durand@example.org", None)
        .expect("seed attribute");
    let repository = db.candidates().expect("repository setup");
    let rt = test_runtime();

    let attributes = rt
        .block_on(repository.attributes_of(CANDIDATE))
        .expect("attributes should load");

    assert_eq!(
        attributes,
        vec![
            CandidateIdentityAttribute::new("family_name", "Durand").certified("FC", certified_at),
            CandidateIdentityAttribute::new("email", "durand@example.org"),
        ]
    );
}

#[rstest]
fn update_clears_absent_customer_id(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "candidate_clear").expect("database setup");
    db.seed_candidate(CANDIDATE, BATCH, Some("C1"), "mobile")
        .expect("seed candidate");
    let repository = db.candidates().expect("repository setup");
    let rt = test_runtime();
    let mut candidate = rt
        .block_on(repository.find_by_id(CANDIDATE))
        .expect("find should succeed")
        .expect("candidate should exist");
    candidate.set_customer_id(None);
    candidate.set_connection_id(Some("conn-7".to_owned()));

    rt.block_on(repository.update(&candidate.with_status("CLOSED")))
        .expect("update should succeed");
    let reloaded = rt
        .block_on(repository.find_by_id(CANDIDATE))
        .expect("find should succeed")
        .expect("candidate should exist");

    assert_eq!(reloaded.customer_id(), None);
    assert_eq!(reloaded.connection_id(), Some("conn-7"));
    assert_eq!(reloaded.status(), "CLOSED");
}

#[rstest]
fn update_reports_unknown_candidate(shared_test_cluster: &'static TestCluster) {
    let db =
        TestDatabase::create(shared_test_cluster, "candidate_unknown").expect("database setup");
    let repository = db.candidates().expect("repository setup");
    let rt = test_runtime();

    let result = rt.block_on(repository.update(&CandidateIdentity::new(CANDIDATE, "mobile")));

    assert!(matches!(
        result,
        Err(CandidateRepositoryError::NotFound(id)) if id == CANDIDATE
    ));
}

#[rstest]
fn history_lookup_returns_latest_row(shared_test_cluster: &'static TestCluster) {
    let db =
        TestDatabase::create(shared_test_cluster, "candidate_history").expect("database setup");
    let repository = db.candidates().expect("repository setup");
    let rt = test_runtime();
    let clock = DefaultClock;
    let rows = [
        (40, "FAILURE", "identity store unavailable"),
        (41, "SUCCESS", "other resource"),
        (40, "SUCCESS", "customer id: C9"),
    ];
    for (resource_history, status, comment) in rows {
        let entry = CandidateIdentityHistory::new(
            ResourceHistoryId::new(resource_history),
            status,
            comment,
            &clock,
        );
        rt.block_on(repository.insert(&entry))
            .expect("history insert should succeed");
    }

    let latest = rt
        .block_on(repository.find_by_wf_history(ResourceHistoryId::new(40)))
        .expect("history lookup should succeed")
        .expect("history row should exist");
    let missing = rt
        .block_on(repository.find_by_wf_history(ResourceHistoryId::new(99)))
        .expect("history lookup should succeed");

    assert_eq!(latest.wf_resource_history_id(), ResourceHistoryId::new(40));
    assert_eq!(latest.status(), "SUCCESS");
    assert_eq!(latest.comment(), "customer id: C9");
    assert!(missing.is_none());
}
