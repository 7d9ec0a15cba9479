//! Adapter implementations for task configuration ports.

pub mod memory;
pub mod postgres;
