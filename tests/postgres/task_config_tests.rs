//! Task configuration rows stored in `PostgreSQL`.

use super::helpers::{TestDatabase, test_runtime};
use identity_import_workflow::task_config::{
    domain::IdentityImportTaskConfig,
    ports::{TaskConfigRepository, TaskConfigRepositoryError},
};
use identity_import_workflow::workflow::domain::{StateId, TaskId, WorkflowId};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;

fn config(task_id: i32, workflow_id: i32, first_state: i32) -> IdentityImportTaskConfig {
    IdentityImportTaskConfig::new(TaskId::new(task_id))
        .with_workflow(WorkflowId::new(workflow_id))
        .with_states(
            StateId::new(first_state),
            StateId::new(first_state + 1),
            StateId::new(first_state + 2),
        )
}

#[rstest]
fn insert_then_load_returns_config(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "config_load").expect("database setup");
    let repository = db.task_configs().expect("repository setup");
    let rt = test_runtime();
    let stored = config(4, 2, 10);

    rt.block_on(repository.insert(&stored))
        .expect("insert should succeed");
    let loaded = rt
        .block_on(repository.load(TaskId::new(4)))
        .expect("load should succeed");

    assert_eq!(loaded, Some(stored));
}

#[rstest]
fn load_returns_none_for_unconfigured_task(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "config_none").expect("database setup");
    let repository = db.task_configs().expect("repository setup");
    let rt = test_runtime();

    let loaded = rt
        .block_on(repository.load(TaskId::new(99)))
        .expect("load should succeed");

    assert!(loaded.is_none());
}

#[rstest]
fn insert_rejects_duplicate_task(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "config_dup").expect("database setup");
    let repository = db.task_configs().expect("repository setup");
    let rt = test_runtime();

    rt.block_on(repository.insert(&config(4, 2, 10)))
        .expect("first insert should succeed");
    let result = rt.block_on(repository.insert(&config(4, 3, 20)));

    assert!(matches!(
        result,
        Err(TaskConfigRepositoryError::DuplicateTask(task_id)) if task_id == TaskId::new(4)
    ));
    let loaded = rt
        .block_on(repository.load(TaskId::new(4)))
        .expect("load should succeed");
    assert_eq!(loaded, Some(config(4, 2, 10)));
}

#[rstest]
fn storing_twice_keeps_the_latest_states(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "config_store").expect("database setup");
    let repository = db.task_configs().expect("repository setup");
    let rt = test_runtime();
    rt.block_on(repository.insert(&config(6, 1, 1)))
        .expect("insert should succeed");

    rt.block_on(repository.store(&config(6, 2, 20)))
        .expect("first store should succeed");
    let after_first = rt
        .block_on(repository.load(TaskId::new(6)))
        .expect("load should succeed");
    rt.block_on(repository.store(&config(6, 3, 30)))
        .expect("second store should succeed");
    let after_second = rt
        .block_on(repository.load(TaskId::new(6)))
        .expect("load should succeed");

    assert_eq!(after_first, Some(config(6, 2, 20)));
    assert_eq!(after_second, Some(config(6, 3, 30)));
}

#[rstest]
fn store_reports_unconfigured_task(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "config_missing").expect("database setup");
    let repository = db.task_configs().expect("repository setup");
    let rt = test_runtime();

    let result = rt.block_on(repository.store(&config(8, 2, 10)));

    assert!(matches!(
        result,
        Err(TaskConfigRepositoryError::NotFound(task_id)) if task_id == TaskId::new(8)
    ));
}

#[rstest]
fn delete_removes_config_and_tolerates_missing_rows(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster, "config_delete").expect("database setup");
    let repository = db.task_configs().expect("repository setup");
    let rt = test_runtime();
    rt.block_on(repository.insert(&config(4, 2, 10)))
        .expect("insert should succeed");

    rt.block_on(repository.delete(TaskId::new(4)))
        .expect("delete should succeed");
    rt.block_on(repository.delete(TaskId::new(4)))
        .expect("deleting again should succeed");

    let loaded = rt
        .block_on(repository.load(TaskId::new(4)))
        .expect("load should succeed");
    assert!(loaded.is_none());
}
