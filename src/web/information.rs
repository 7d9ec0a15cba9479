//! Outcome panel shown in a resource's workflow history.

use super::{
    ComponentResult,
    templates::{CANDIDATE_IDENTITY_HISTORY_TEMPLATE, render},
};
use crate::candidate::ports::CandidateHistoryRepository;
use crate::workflow::domain::ResourceHistoryId;
use minijinja::{HtmlEscape, Value, context};
use std::sync::Arc;

/// Renders the outcome recorded for a resource history entry, or an empty
/// string when the task recorded nothing.
pub(super) async fn render_task_information<L>(
    history: &L,
    resource_history_id: ResourceHistoryId,
    line_breaks: bool,
) -> ComponentResult<String>
where
    L: CandidateHistoryRepository + ?Sized,
{
    let Some(row) = history.find_by_wf_history(resource_history_id).await? else {
        return Ok(String::new());
    };
    let comment = if line_breaks {
        comment_with_line_breaks(row.comment())
    } else {
        Value::from(row.comment())
    };
    let html = render(
        CANDIDATE_IDENTITY_HISTORY_TEMPLATE,
        context! {
            status => row.status(),
            comment => comment,
        },
    )?;
    Ok(html)
}

/// Escapes `comment` and turns its line breaks into `<br>` tags.
fn comment_with_line_breaks(comment: &str) -> Value {
    let escaped = HtmlEscape(comment).to_string().replace('\n', "<br>");
    Value::from_safe_string(escaped)
}

/// Information-only component of the identify and archive tasks.
///
/// Comments keep their line breaks.
#[derive(Clone)]
pub struct IdentityTaskComponent<L>
where
    L: CandidateHistoryRepository,
{
    history: Arc<L>,
}

impl<L> IdentityTaskComponent<L>
where
    L: CandidateHistoryRepository,
{
    /// Creates the component.
    #[must_use]
    pub const fn new(history: Arc<L>) -> Self {
        Self { history }
    }

    /// Renders the outcome recorded for a resource history entry.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the history lookup or template
    /// rendering fails.
    pub async fn display_task_information(
        &self,
        resource_history_id: ResourceHistoryId,
        _locale: &str,
    ) -> ComponentResult<String> {
        render_task_information(&*self.history, resource_history_id, true).await
    }
}
