//! Workflow engine seam.
//!
//! The state machine (states, transitions, action firing) belongs to the
//! hosting workflow engine. This module carries the engine-facing types the
//! task handlers receive and the ports through which they read resource
//! history, list workflows and request state transitions:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
