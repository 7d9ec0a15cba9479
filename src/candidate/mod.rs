//! Candidate identities awaiting reconciliation with the identity store.
//!
//! Candidates are created by an external intake step and grouped in import
//! batches. Workflow tasks read them, record the remote customer id once an
//! identity is imported or selected, and append one audit history row per
//! task execution. Purging a processed batch is delegated to the batch
//! service port.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
