//! Identity import workflow tasks.
//!
//! This crate plugs typed task handlers into an external workflow engine to
//! import candidate identities into a remote identity store, let an operator
//! confirm a matching identity, and archive processed import batches.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, memory)
//!
//! # Modules
//!
//! - [`candidate`]: Candidate identities, their audit history and batch purge
//! - [`identity_store`]: Remote identity-store contract and REST client
//! - [`workflow`]: Engine-facing types and the [`workflow::ports::WorkflowTask`] seam
//! - [`task_config`]: Follow-up state configuration and its persistence
//! - [`tasks`]: Import, identify and archive task handlers
//! - [`web`]: Admin configuration form and task information panel
//! - [`config`]: Plugin settings

pub mod candidate;
pub mod config;
pub mod identity_store;
pub mod task_config;
pub mod tasks;
pub mod telemetry;
pub mod web;
pub mod workflow;
