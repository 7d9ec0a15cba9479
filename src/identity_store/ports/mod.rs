//! Port contract for the identity store.

pub mod identity_service;

pub use identity_service::{IdentityService, IdentityStoreError, IdentityStoreResult};
