//! Remote identity-store contract.
//!
//! The identity store owns the reference identities. Workflow tasks reach it
//! through the [`ports::IdentityService`] port to import a candidate, update
//! a selected identity with operator overrides, or fetch a selected identity
//! to confirm it still exists. [`adapters::http`] provides the REST client.

pub mod adapters;
pub mod domain;
pub mod ports;
