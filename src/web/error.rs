//! Errors raised by back-office components.

use crate::candidate::ports::CandidateRepositoryError;
use crate::task_config::ports::TaskConfigRepositoryError;
use crate::workflow::ports::WorkflowError;
use thiserror::Error;

/// Message shown when a configuration field is left blank.
pub const MANDATORY_FIELDS_MESSAGE: &str = "Please fill in all the mandatory fields.";

/// Result type for back-office components.
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Rejections of a submitted configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// A required field is blank.
    #[error("{}", MANDATORY_FIELDS_MESSAGE)]
    MandatoryFields,

    /// A field does not hold an integer identifier.
    #[error("invalid number for field {field}: {value:?}")]
    InvalidNumber {
        /// Form field name.
        field: &'static str,
        /// Submitted value.
        value: String,
    },
}

/// Errors raised while rendering or saving a component.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// No authenticated back-office user.
    #[error("Access Denied")]
    AccessDenied,

    /// The submitted configuration was rejected.
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    /// Task configuration storage failed.
    #[error(transparent)]
    Config(#[from] TaskConfigRepositoryError),

    /// The workflow catalog failed.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// Candidate history storage failed.
    #[error(transparent)]
    History(#[from] CandidateRepositoryError),

    /// A template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// The workflow state catalog could not be serialized.
    #[error("workflow states serialization failed: {0}")]
    States(#[from] serde_json::Error),
}
