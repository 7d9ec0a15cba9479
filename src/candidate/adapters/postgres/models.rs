//! Diesel row models for candidate persistence.

use super::schema::{
    identityimport_candidate_identity, identityimport_candidate_identity_attribute,
    identityimport_candidate_identity_history,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for candidate identities.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = identityimport_candidate_identity)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CandidateRow {
    /// Candidate identifier.
    pub id_candidate_identity: i32,
    /// Import batch.
    pub id_batch: i32,
    /// Remote customer id.
    pub customer_id: Option<String>,
    /// Connection id.
    pub connection_id: Option<String>,
    /// Submitting client application.
    pub client_app_code: String,
    /// Intake status.
    pub status: String,
}

/// Update model for candidate scalar fields.
///
/// `None` clears the column instead of leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = identityimport_candidate_identity)]
#[diesel(treat_none_as_null = true)]
pub struct CandidateChangeset {
    /// Remote customer id.
    pub customer_id: Option<String>,
    /// Connection id.
    pub connection_id: Option<String>,
    /// Submitting client application.
    pub client_app_code: String,
    /// Intake status.
    pub status: String,
}

/// Query result row for candidate attributes.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = identityimport_candidate_identity_attribute)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AttributeRow {
    /// Attribute row identifier.
    pub id_attribute: i32,
    /// Owning candidate.
    pub id_candidate_identity: i32,
    /// Attribute code.
    pub code: String,
    /// Attribute value.
    pub attribute_value: String,
    /// Certification process code.
    pub cert_process: Option<String>,
    /// Certification timestamp.
    pub cert_date: Option<DateTime<Utc>>,
}

/// Query result row for history entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = identityimport_candidate_identity_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HistoryRow {
    /// History row identifier.
    pub id_history: i32,
    /// Workflow resource history entry.
    pub id_wf_resource_history: i32,
    /// Outcome status.
    pub status: String,
    /// Outcome description.
    pub comment: String,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
}

/// Insert model for history entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = identityimport_candidate_identity_history)]
pub struct NewHistoryRow {
    /// Workflow resource history entry.
    pub id_wf_resource_history: i32,
    /// Outcome status.
    pub status: String,
    /// Outcome description.
    pub comment: String,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
}
