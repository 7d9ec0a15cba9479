//! Back-office components of the identity import tasks.
//!
//! [`IdentityImportTaskComponent`] renders and validates the configuration
//! form of the import task and shows the outcome recorded for one action.
//! [`IdentityTaskComponent`] only shows recorded outcomes; the identify and
//! archive tasks have nothing to configure.

mod config_form;
mod error;
mod information;
mod states;
mod templates;

pub use config_form::{
    IdentityImportTaskComponent, PARAM_STATE1, PARAM_STATE2, PARAM_STATE3, PARAM_WORKFLOW,
    validate_config,
};
pub use error::{ComponentError, ComponentResult, ConfigValidationError, MANDATORY_FIELDS_MESSAGE};
pub use information::IdentityTaskComponent;
pub use states::workflow_states_json;
pub use templates::{CANDIDATE_IDENTITY_HISTORY_TEMPLATE, TASK_CONFIG_TEMPLATE};

#[cfg(test)]
mod tests;
