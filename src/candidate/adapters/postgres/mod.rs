//! `PostgreSQL` adapters for candidate identities and history rows.

mod models;
mod repository;
mod schema;

pub use repository::{CandidatePgPool, PostgresCandidateRepository};
