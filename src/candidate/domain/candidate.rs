//! Candidate identity aggregate.

use super::CandidateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single attribute claimed by a candidate identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIdentityAttribute {
    /// Attribute code, e.g. `family_name`.
    pub code: String,
    /// Attribute value.
    pub value: String,
    /// Certification process that vouched for the value.
    pub cert_process: Option<String>,
    /// When the value was certified.
    pub cert_date: Option<DateTime<Utc>>,
}

impl CandidateIdentityAttribute {
    /// Creates an uncertified attribute.
    #[must_use]
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
            cert_process: None,
            cert_date: None,
        }
    }

    /// Sets the certification process and date.
    #[must_use]
    pub fn certified(mut self, process: impl Into<String>, date: DateTime<Utc>) -> Self {
        self.cert_process = Some(process.into());
        self.cert_date = Some(date);
        self
    }
}

/// Identity waiting to be reconciled with the identity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIdentity {
    id: CandidateId,
    customer_id: Option<String>,
    connection_id: Option<String>,
    client_app_code: String,
    status: String,
    attributes: Vec<CandidateIdentityAttribute>,
}

impl CandidateIdentity {
    /// Creates a candidate submitted by a client application.
    #[must_use]
    pub fn new(id: CandidateId, client_app_code: impl Into<String>) -> Self {
        Self {
            id,
            customer_id: None,
            connection_id: None,
            client_app_code: client_app_code.into(),
            status: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Sets the remote customer id.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Sets the connection id of the account behind the candidate.
    #[must_use]
    pub fn with_connection_id(mut self, connection_id: impl Into<String>) -> Self {
        self.connection_id = Some(connection_id.into());
        self
    }

    /// Sets the intake status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the attribute list.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<CandidateIdentityAttribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns the candidate identifier.
    #[must_use]
    pub const fn id(&self) -> CandidateId {
        self.id
    }

    /// Returns the remote customer id, once known.
    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// Returns the connection id.
    #[must_use]
    pub fn connection_id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }

    /// Returns the code of the client application that submitted the
    /// candidate.
    #[must_use]
    pub fn client_app_code(&self) -> &str {
        &self.client_app_code
    }

    /// Returns the intake status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the attributes in intake order.
    #[must_use]
    pub fn attributes(&self) -> &[CandidateIdentityAttribute] {
        &self.attributes
    }

    /// Records the remote customer id. `None` clears it.
    pub fn set_customer_id(&mut self, customer_id: Option<String>) {
        self.customer_id = customer_id;
    }

    /// Records the connection id. `None` clears it.
    pub fn set_connection_id(&mut self, connection_id: Option<String>) {
        self.connection_id = connection_id;
    }

    /// Replaces the attribute list.
    pub fn set_attributes(&mut self, attributes: Vec<CandidateIdentityAttribute>) {
        self.attributes = attributes;
    }
}
