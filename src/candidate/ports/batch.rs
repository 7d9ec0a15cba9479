//! Batch service port.

use crate::candidate::domain::BatchId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for batch service operations.
pub type BatchServiceResult<T> = Result<T, BatchServiceError>;

/// Import batch maintenance owned by the identity import application.
#[async_trait]
pub trait BatchService: Send + Sync {
    /// Removes every candidate of a processed batch from local storage.
    ///
    /// # Errors
    ///
    /// Returns [`BatchServiceError::BatchNotFound`] when the batch does not
    /// exist.
    async fn purge_batch(&self, batch_id: BatchId) -> BatchServiceResult<()>;
}

/// Errors returned by batch service implementations.
#[derive(Debug, Clone, Error)]
pub enum BatchServiceError {
    /// The batch does not exist.
    #[error("batch not found: {0}")]
    BatchNotFound(BatchId),

    /// Service-side failure.
    #[error("batch service error: {0}")]
    Service(Arc<dyn std::error::Error + Send + Sync>),
}

impl BatchServiceError {
    /// Wraps a service error.
    pub fn service(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Service(Arc::new(err))
    }
}
