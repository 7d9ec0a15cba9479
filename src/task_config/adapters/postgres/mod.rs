//! `PostgreSQL` adapter for identity import task configuration.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskConfigRepository, TaskConfigPgPool};
