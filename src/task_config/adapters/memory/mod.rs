//! In-memory task configuration repository for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task_config::{
    domain::IdentityImportTaskConfig,
    ports::{TaskConfigRepository, TaskConfigRepositoryError, TaskConfigRepositoryResult},
};
use crate::workflow::domain::TaskId;

/// Thread-safe in-memory task configuration repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskConfigRepository {
    configs: Arc<RwLock<HashMap<TaskId, IdentityImportTaskConfig>>>,
}

impl InMemoryTaskConfigRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskConfigRepositoryError {
    TaskConfigRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskConfigRepository for InMemoryTaskConfigRepository {
    async fn insert(&self, config: &IdentityImportTaskConfig) -> TaskConfigRepositoryResult<()> {
        let mut configs = self.configs.write().map_err(lock_error)?;
        if configs.contains_key(&config.task_id()) {
            return Err(TaskConfigRepositoryError::DuplicateTask(config.task_id()));
        }
        configs.insert(config.task_id(), *config);
        Ok(())
    }

    async fn store(&self, config: &IdentityImportTaskConfig) -> TaskConfigRepositoryResult<()> {
        let mut configs = self.configs.write().map_err(lock_error)?;
        let existing = configs
            .get_mut(&config.task_id())
            .ok_or(TaskConfigRepositoryError::NotFound(config.task_id()))?;
        *existing = *config;
        Ok(())
    }

    async fn load(
        &self,
        task_id: TaskId,
    ) -> TaskConfigRepositoryResult<Option<IdentityImportTaskConfig>> {
        let configs = self.configs.read().map_err(lock_error)?;
        Ok(configs.get(&task_id).copied())
    }

    async fn delete(&self, task_id: TaskId) -> TaskConfigRepositoryResult<()> {
        let mut configs = self.configs.write().map_err(lock_error)?;
        configs.remove(&task_id);
        Ok(())
    }
}
