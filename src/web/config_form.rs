//! Configuration form of the identity import task.

use super::{
    ComponentError, ComponentResult, ConfigValidationError,
    information::render_task_information,
    states::workflow_states_json,
    templates::{TASK_CONFIG_TEMPLATE, render},
};
use crate::candidate::ports::CandidateHistoryRepository;
use crate::task_config::{domain::IdentityImportTaskConfig, ports::TaskConfigRepository};
use crate::workflow::{
    domain::{AdminUser, ResourceHistoryId, StateId, TaskId, TaskRequest, WorkflowId},
    ports::WorkflowCatalog,
};
use minijinja::{Value, context};
use std::sync::Arc;
use tracing::info;

/// Form field holding the target workflow.
pub const PARAM_WORKFLOW: &str = "workflow";
/// Form field holding the state reached once an identity was inserted.
pub const PARAM_STATE1: &str = "state1";
/// Form field holding the state reached once an identity was selected.
pub const PARAM_STATE2: &str = "state2";
/// Form field holding the state reached on duplicate suspicion.
pub const PARAM_STATE3: &str = "state3";

/// Back-office component of the identity import task.
#[derive(Clone)]
pub struct IdentityImportTaskComponent<T, W, L>
where
    T: TaskConfigRepository,
    W: WorkflowCatalog,
    L: CandidateHistoryRepository,
{
    configs: Arc<T>,
    catalog: Arc<W>,
    history: Arc<L>,
}

impl<T, W, L> IdentityImportTaskComponent<T, W, L>
where
    T: TaskConfigRepository,
    W: WorkflowCatalog,
    L: CandidateHistoryRepository,
{
    /// Creates the component.
    #[must_use]
    pub const fn new(configs: Arc<T>, catalog: Arc<W>, history: Arc<L>) -> Self {
        Self {
            configs,
            catalog,
            history,
        }
    }

    /// Renders the configuration form of a task.
    ///
    /// An unconfigured task shows all-zero identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::AccessDenied`] without an authenticated
    /// user, or the storage, catalog or rendering error otherwise.
    pub async fn display_config_form(
        &self,
        user: Option<&AdminUser>,
        locale: &str,
        task_id: TaskId,
    ) -> ComponentResult<String> {
        let admin = user.ok_or(ComponentError::AccessDenied)?;
        let config = self
            .configs
            .load(task_id)
            .await?
            .unwrap_or_else(|| IdentityImportTaskConfig::new(task_id));

        let workflows = self.catalog.enabled_workflows(admin, locale).await?;
        let mut catalog = Vec::with_capacity(workflows.len());
        for workflow in workflows {
            let states = self.catalog.states_by_workflow(workflow.id, admin).await?;
            catalog.push((workflow, states));
        }
        let json = workflow_states_json(&catalog)?;

        let html = render(
            TASK_CONFIG_TEMPLATE,
            context! {
                workflow_id => config.workflow_id().value(),
                state_id_1 => config.state1().value(),
                state_id_2 => config.state2().value(),
                state_id_3 => config.state3().value(),
                json_workflow_states => Value::from_safe_string(json),
            },
        )?;
        Ok(html)
    }

    /// Validates a submitted form and stores the resulting configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Validation`] when the form is rejected, or
    /// the storage error otherwise.
    pub async fn save_config(
        &self,
        task_id: TaskId,
        request: &TaskRequest,
    ) -> ComponentResult<IdentityImportTaskConfig> {
        let existing = self.configs.load(task_id).await?;
        let mut config = existing.unwrap_or_else(|| IdentityImportTaskConfig::new(task_id));
        validate_config(&mut config, request)?;

        if existing.is_some() {
            self.configs.store(&config).await?;
        } else {
            self.configs.insert(&config).await?;
        }
        info!(
            task_id = %task_id,
            workflow_id = %config.workflow_id(),
            "identity import task configured"
        );
        Ok(config)
    }

    /// Removes the configuration of a deleted task.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Config`] when storage fails.
    pub async fn remove_config(&self, task_id: TaskId) -> ComponentResult<()> {
        self.configs.delete(task_id).await?;
        Ok(())
    }

    /// Renders the outcome recorded for a resource history entry, or an
    /// empty string when none was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError`] when the history lookup or template
    /// rendering fails.
    pub async fn display_task_information(
        &self,
        resource_history_id: ResourceHistoryId,
        _locale: &str,
    ) -> ComponentResult<String> {
        render_task_information(&*self.history, resource_history_id, false).await
    }
}

/// Applies a submitted configuration form to `config`.
///
/// `config` is left untouched when the form is rejected.
///
/// # Errors
///
/// Returns [`ConfigValidationError::MandatoryFields`] when a field is blank
/// and [`ConfigValidationError::InvalidNumber`] when a field is not an
/// integer.
pub fn validate_config(
    config: &mut IdentityImportTaskConfig,
    request: &TaskRequest,
) -> Result<(), ConfigValidationError> {
    let fields = [PARAM_WORKFLOW, PARAM_STATE1, PARAM_STATE2, PARAM_STATE3]
        .map(|field| (field, request.parameter(field).map(str::trim).unwrap_or_default()));
    if fields.iter().any(|(_, value)| value.is_empty()) {
        return Err(ConfigValidationError::MandatoryFields);
    }

    let [workflow, state1, state2, state3] = fields.map(|(field, value)| {
        value
            .parse::<i32>()
            .map_err(|_| ConfigValidationError::InvalidNumber {
                field,
                value: value.to_owned(),
            })
    });
    config.assign(
        WorkflowId::new(workflow?),
        StateId::new(state1?),
        StateId::new(state2?),
        StateId::new(state3?),
    );
    Ok(())
}
