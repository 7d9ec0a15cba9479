//! History comment rendering.

use crate::identity_store::domain::ResponseStatus;

/// Renders the comment stored with a history row.
///
/// The header comes first, followed by the status message and one line per
/// attribute status. A missing attribute message renders as an empty string.
#[must_use]
pub fn build_history_comment(header: &str, status: Option<&ResponseStatus>) -> String {
    let mut comment = header.to_owned();
    let Some(status) = status else {
        return comment;
    };

    if let Some(message) = &status.message {
        comment.push('\n');
        comment.push_str(message);
    }

    if !status.attribute_statuses.is_empty() {
        comment.push_str("\n\nAttribute statuses: \n");
        for attribute in &status.attribute_statuses {
            comment.push('\n');
            comment.push_str(&attribute.key);
            comment.push_str(" - ");
            comment.push_str(&attribute.status);
            comment.push_str(" - ");
            comment.push_str(attribute.message.as_deref().unwrap_or_default());
        }
    }
    comment
}
