//! Follow-up state configuration of the identity import task.
//!
//! Each configured task stores a target workflow and three of its states:
//! where a resource goes once its identity was inserted, once an existing
//! identity was selected, and when the store reported an ambiguous match.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
