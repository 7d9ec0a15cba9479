//! Adapter implementations for the identity-store port.

pub mod http;
