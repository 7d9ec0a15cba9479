//! `PostgreSQL` repository implementation for task configuration.

use super::{
    models::{TaskConfigChangeset, TaskConfigRow},
    schema::workflow_task_identity_import_cf as configs,
};
use crate::task_config::{
    domain::IdentityImportTaskConfig,
    ports::{TaskConfigRepository, TaskConfigRepositoryError, TaskConfigRepositoryResult},
};
use crate::workflow::domain::TaskId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the task configuration adapter.
pub type TaskConfigPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task configuration repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskConfigRepository {
    pool: TaskConfigPgPool,
}

impl PostgresTaskConfigRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskConfigPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskConfigRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskConfigRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskConfigRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskConfigRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskConfigRepository for PostgresTaskConfigRepository {
    async fn insert(&self, config: &IdentityImportTaskConfig) -> TaskConfigRepositoryResult<()> {
        let task_id = config.task_id();
        let new_row = TaskConfigRow::from(config);

        self.run_blocking(move |connection| {
            diesel::insert_into(configs::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskConfigRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskConfigRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn store(&self, config: &IdentityImportTaskConfig) -> TaskConfigRepositoryResult<()> {
        let task_id = config.task_id();
        let changeset = TaskConfigChangeset::from(config);

        self.run_blocking(move |connection| {
            let updated =
                diesel::update(configs::table.filter(configs::id_task.eq(task_id.value())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(TaskConfigRepositoryError::persistence)?;

            if updated == 0 {
                return Err(TaskConfigRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn load(
        &self,
        task_id: TaskId,
    ) -> TaskConfigRepositoryResult<Option<IdentityImportTaskConfig>> {
        self.run_blocking(move |connection| {
            let row = configs::table
                .filter(configs::id_task.eq(task_id.value()))
                .select(TaskConfigRow::as_select())
                .first::<TaskConfigRow>(connection)
                .optional()
                .map_err(TaskConfigRepositoryError::persistence)?;
            Ok(row.map(IdentityImportTaskConfig::from))
        })
        .await
    }

    async fn delete(&self, task_id: TaskId) -> TaskConfigRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(configs::table.filter(configs::id_task.eq(task_id.value())))
                .execute(connection)
                .map_err(TaskConfigRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}
