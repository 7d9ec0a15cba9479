//! Identity-store service port.

use crate::identity_store::domain::{
    IdentityChangeRequest, IdentityChangeResponse, IdentitySearchResponse, RequestAuthor,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity-store calls.
pub type IdentityStoreResult<T> = Result<T, IdentityStoreError>;

/// Identity-store operations used by the workflow tasks.
///
/// Every call is made on behalf of a client application (`client_code`) and
/// an author. A call that reaches the store returns its typed status, even
/// for business failures; errors are reserved for calls that could not be
/// completed.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Imports a candidate identity, letting the store create it or match an
    /// existing identity.
    async fn import_identity(
        &self,
        request: &IdentityChangeRequest,
        client_code: &str,
        author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentityChangeResponse>;

    /// Updates the identity `customer_id` with the attributes of `request`.
    async fn update_identity(
        &self,
        customer_id: &str,
        request: &IdentityChangeRequest,
        client_code: &str,
        author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentityChangeResponse>;

    /// Fetches the identity `customer_id`.
    async fn get_identity(
        &self,
        customer_id: &str,
        client_code: &str,
        author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentitySearchResponse>;
}

/// Errors raised when an identity-store call cannot be completed.
#[derive(Debug, Clone, Error)]
pub enum IdentityStoreError {
    /// The request could not be sent or the response could not be read.
    #[error("identity store transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The store answered with a body that is not a known response.
    #[error("unexpected identity store response (HTTP {status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The client is misconfigured.
    #[error("identity store client configuration error: {0}")]
    Configuration(String),
}

impl IdentityStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
