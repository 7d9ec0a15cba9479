//! Bundled back-office templates.

use minijinja::Environment;
use serde::Serialize;

/// Template name of the import task configuration form.
pub const TASK_CONFIG_TEMPLATE: &str = "identityimport_task_config.html";
/// Template name of the recorded outcome panel.
pub const CANDIDATE_IDENTITY_HISTORY_TEMPLATE: &str = "candidate_identity_history.html";

/// Renders a bundled template.
pub(super) fn render<S: Serialize>(name: &str, context: S) -> Result<String, minijinja::Error> {
    let environment = environment()?;
    environment.get_template(name)?.render(context)
}

/// Builds an environment holding every bundled template.
///
/// `.html` names enable HTML auto-escaping.
fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut environment = Environment::new();
    environment.add_template(
        TASK_CONFIG_TEMPLATE,
        include_str!("../../templates/identityimport_task_config.html"),
    )?;
    environment.add_template(
        CANDIDATE_IDENTITY_HISTORY_TEMPLATE,
        include_str!("../../templates/candidate_identity_history.html"),
    )?;
    Ok(environment)
}
