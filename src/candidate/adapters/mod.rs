//! Adapter implementations for candidate ports.

pub mod memory;
pub mod postgres;
