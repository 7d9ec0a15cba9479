//! Domain model for task configuration.

mod config;

pub use config::{IdentityImportTaskConfig, ImportOutcome};
