//! Template database setup and row seeding for the `PostgreSQL` suite.

use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::{Integer, Nullable, Text, Timestamptz};
use identity_import_workflow::candidate::{
    adapters::postgres::PostgresCandidateRepository,
    domain::{BatchId, CandidateId},
};
use identity_import_workflow::task_config::adapters::postgres::PostgresTaskConfigRepository;
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Boxed error returned by the setup helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the identity import tables.
const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-14-000000_create_identity_import_tables/up.sql");

/// Template database name for the pre-migrated schema.
const TEMPLATE_DB: &str = "identity_import_test_template";

/// Creates a tokio runtime for the async repository calls.
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_SCHEMA_SQL)
                .map_err(|e| eyre::eyre!("schema setup failed: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Database cloned from the migrated template, dropped when this value is.
///
/// Repositories built from it must be dropped first, which holds when they
/// are bound after it in the test body.
pub struct TestDatabase {
    cluster: &'static TestCluster,
    name: String,
    url: String,
}

impl TestDatabase {
    /// Clones the template into a fresh database named after `prefix`.
    pub fn create(cluster: &'static TestCluster, prefix: &str) -> Result<Self, BoxError> {
        ensure_template(cluster)?;
        let name = format!("{prefix}_{}", Uuid::new_v4().simple());
        cluster
            .create_database_from_template(name.as_str(), TEMPLATE_DB)
            .map_err(|e| Box::new(e) as BoxError)?;
        let url = cluster.connection().database_url(&name);
        Ok(Self { cluster, name, url })
    }

    fn pool(&self) -> Result<PgPool, BoxError> {
        let manager = ConnectionManager::<PgConnection>::new(self.url.clone());
        // One connection keeps each test deterministic.
        let pool = Pool::builder().max_size(1).build(manager)?;
        Ok(pool)
    }

    /// Builds a task configuration repository over this database.
    pub fn task_configs(&self) -> Result<PostgresTaskConfigRepository, BoxError> {
        Ok(PostgresTaskConfigRepository::new(self.pool()?))
    }

    /// Builds a candidate repository over this database.
    pub fn candidates(&self) -> Result<PostgresCandidateRepository, BoxError> {
        Ok(PostgresCandidateRepository::new(self.pool()?))
    }

    fn connection(&self) -> Result<PgConnection, BoxError> {
        Ok(PgConnection::establish(&self.url)?)
    }

    /// Inserts a candidate row with the `NEW` status.
    pub fn seed_candidate(
        &self,
        id: CandidateId,
        batch: BatchId,
        customer_id: Option<&str>,
        client_app_code: &str,
    ) -> Result<(), BoxError> {
        let mut conn = self.connection()?;
        diesel::sql_query(
            "INSERT INTO identityimport_candidate_identity \
             (id_candidate_identity, id_batch, customer_id, client_app_code, status) \
             VALUES ($1, $2, $3, $4, 'NEW')",
        )
        .bind::<Integer, _>(id.value())
        .bind::<Integer, _>(batch.value())
        .bind::<Nullable<Text>, _>(customer_id)
        .bind::<Text, _>(client_app_code)
        .execute(&mut conn)?;
        Ok(())
    }

    /// Inserts an attribute row for `candidate`.
    pub fn seed_attribute(
        &self,
        candidate: CandidateId,
        code: &str,
        value: &str,
        certification: Option<(&str, DateTime<Utc>)>,
    ) -> Result<(), BoxError> {
        let mut conn = self.connection()?;
        diesel::sql_query(
            "INSERT INTO identityimport_candidate_identity_attribute \
             (id_candidate_identity, code, attribute_value, cert_process, cert_date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind::<Integer, _>(candidate.value())
        .bind::<Text, _>(code)
        .bind::<Text, _>(value)
        .bind::<Nullable<Text>, _>(certification.map(|(process, _)| process))
        .bind::<Nullable<Timestamptz>, _>(certification.map(|(_, date)| date))
        .execute(&mut conn)?;
        Ok(())
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.name);
        }
    }
}
