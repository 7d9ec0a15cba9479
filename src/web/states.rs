//! Workflow and state catalog fed to the configuration form's cascading
//! selects.

use crate::workflow::domain::{State, Workflow};
use serde::Serialize;

#[derive(Serialize)]
struct WorkflowCatalogJson<'a> {
    workflows: Vec<WorkflowJson<'a>>,
}

#[derive(Serialize)]
struct WorkflowJson<'a> {
    id: String,
    name: &'a str,
    states: Vec<StateJson<'a>>,
}

#[derive(Serialize)]
struct StateJson<'a> {
    id: i32,
    name: &'a str,
}

/// Serializes workflows and their states as pretty-printed JSON.
///
/// Workflow ids are emitted as strings, the way the workflow selector keys
/// them; state ids stay numeric.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when serialization fails.
pub fn workflow_states_json(catalog: &[(Workflow, Vec<State>)]) -> serde_json::Result<String> {
    let document = WorkflowCatalogJson {
        workflows: catalog
            .iter()
            .map(|(workflow, states)| WorkflowJson {
                id: workflow.id.to_string(),
                name: &workflow.name,
                states: states
                    .iter()
                    .map(|state| StateJson {
                        id: state.id.value(),
                        name: &state.name,
                    })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&document)
}
