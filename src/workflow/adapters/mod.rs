//! Adapter implementations for workflow engine ports.

pub mod memory;
