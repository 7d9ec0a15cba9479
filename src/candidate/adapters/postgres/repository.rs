//! `PostgreSQL` repository implementation for candidate storage.

use super::{
    models::{AttributeRow, CandidateChangeset, CandidateRow, HistoryRow, NewHistoryRow},
    schema::{
        identityimport_candidate_identity as candidates,
        identityimport_candidate_identity_attribute as attributes,
        identityimport_candidate_identity_history as history,
    },
};
use crate::candidate::{
    domain::{
        CandidateId, CandidateIdentity, CandidateIdentityAttribute, CandidateIdentityHistory,
    },
    ports::{
        CandidateHistoryRepository, CandidateIdentityRepository, CandidateRepositoryError,
        CandidateRepositoryResult,
    },
};
use crate::workflow::domain::ResourceHistoryId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by candidate adapters.
pub type CandidatePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed candidate and history repository.
#[derive(Debug, Clone)]
pub struct PostgresCandidateRepository {
    pool: CandidatePgPool,
}

impl PostgresCandidateRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CandidatePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CandidateRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CandidateRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CandidateRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CandidateRepositoryError::persistence)?
    }
}

#[async_trait]
impl CandidateIdentityRepository for PostgresCandidateRepository {
    async fn find_by_id(
        &self,
        id: CandidateId,
    ) -> CandidateRepositoryResult<Option<CandidateIdentity>> {
        self.run_blocking(move |connection| {
            let row = candidates::table
                .filter(candidates::id_candidate_identity.eq(id.value()))
                .select(CandidateRow::as_select())
                .first::<CandidateRow>(connection)
                .optional()
                .map_err(CandidateRepositoryError::persistence)?;
            Ok(row.map(row_to_candidate))
        })
        .await
    }

    async fn attributes_of(
        &self,
        id: CandidateId,
    ) -> CandidateRepositoryResult<Vec<CandidateIdentityAttribute>> {
        self.run_blocking(move |connection| {
            let rows = attributes::table
                .filter(attributes::id_candidate_identity.eq(id.value()))
                .order(attributes::id_attribute.asc())
                .select(AttributeRow::as_select())
                .load::<AttributeRow>(connection)
                .map_err(CandidateRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_attribute).collect())
        })
        .await
    }

    async fn update(&self, candidate: &CandidateIdentity) -> CandidateRepositoryResult<()> {
        let id = candidate.id();
        let changeset = CandidateChangeset {
            customer_id: candidate.customer_id().map(str::to_owned),
            connection_id: candidate.connection_id().map(str::to_owned),
            client_app_code: candidate.client_app_code().to_owned(),
            status: candidate.status().to_owned(),
        };

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                candidates::table.filter(candidates::id_candidate_identity.eq(id.value())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(CandidateRepositoryError::persistence)?;

            if updated == 0 {
                return Err(CandidateRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl CandidateHistoryRepository for PostgresCandidateRepository {
    async fn insert(&self, entry: &CandidateIdentityHistory) -> CandidateRepositoryResult<()> {
        let new_row = NewHistoryRow {
            id_wf_resource_history: entry.wf_resource_history_id().value(),
            status: entry.status().to_owned(),
            comment: entry.comment().to_owned(),
            creation_date: entry.created_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(history::table)
                .values(&new_row)
                .execute(connection)
                .map_err(CandidateRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_wf_history(
        &self,
        id: ResourceHistoryId,
    ) -> CandidateRepositoryResult<Option<CandidateIdentityHistory>> {
        self.run_blocking(move |connection| {
            let row = history::table
                .filter(history::id_wf_resource_history.eq(id.value()))
                .order(history::id_history.desc())
                .select(HistoryRow::as_select())
                .first::<HistoryRow>(connection)
                .optional()
                .map_err(CandidateRepositoryError::persistence)?;
            Ok(row.map(row_to_history))
        })
        .await
    }
}

fn row_to_candidate(row: CandidateRow) -> CandidateIdentity {
    let CandidateRow {
        id_candidate_identity,
        id_batch: _,
        customer_id,
        connection_id,
        client_app_code,
        status,
    } = row;

    let mut candidate =
        CandidateIdentity::new(CandidateId::new(id_candidate_identity), client_app_code)
            .with_status(status);
    candidate.set_customer_id(customer_id);
    candidate.set_connection_id(connection_id);
    candidate
}

fn row_to_attribute(row: AttributeRow) -> CandidateIdentityAttribute {
    CandidateIdentityAttribute {
        code: row.code,
        value: row.attribute_value,
        cert_process: row.cert_process,
        cert_date: row.cert_date,
    }
}

fn row_to_history(row: HistoryRow) -> CandidateIdentityHistory {
    CandidateIdentityHistory::from_persisted(
        ResourceHistoryId::new(row.id_wf_resource_history),
        row.status,
        row.comment,
        row.creation_date,
    )
}
