//! Request and response envelopes.

use super::{IdentityDto, ResponseStatus};
use serde::{Deserialize, Serialize};

/// Body of import and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityChangeRequest {
    /// Identity to create or change.
    pub identity: IdentityDto,
}

impl IdentityChangeRequest {
    /// Wraps an identity payload.
    #[must_use]
    pub const fn new(identity: IdentityDto) -> Self {
        Self { identity }
    }
}

/// Response of import and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityChangeResponse {
    /// Call outcome.
    pub status: ResponseStatus,
    /// Customer id of the created or changed identity.
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl IdentityChangeResponse {
    /// Creates a response without customer id.
    #[must_use]
    pub const fn new(status: ResponseStatus) -> Self {
        Self {
            status,
            customer_id: None,
        }
    }

    /// Sets the customer id.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }
}

/// Response of identity lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySearchResponse {
    /// Call outcome.
    pub status: ResponseStatus,
    /// Matching identities.
    #[serde(default)]
    pub identities: Vec<IdentityDto>,
}

impl IdentitySearchResponse {
    /// Creates a response without identities.
    #[must_use]
    pub const fn new(status: ResponseStatus) -> Self {
        Self {
            status,
            identities: Vec::new(),
        }
    }
}
