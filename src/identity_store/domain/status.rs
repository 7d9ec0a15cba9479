//! Typed response statuses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category of an identity-store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatusType {
    /// Read succeeded.
    Ok,
    /// Write succeeded.
    Success,
    /// Write succeeded for part of the attributes.
    IncompleteSuccess,
    /// The request was malformed.
    BadRequest,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is not allowed to perform the call.
    Forbidden,
    /// The identity does not exist.
    NotFound,
    /// The request conflicts with stored data (duplicates, stale update).
    Conflict,
    /// The call failed.
    Failure,
    /// The identity store failed internally.
    InternalServerError,
}

impl ResponseStatusType {
    /// Returns the status name, as recorded in task history.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Success => "SUCCESS",
            Self::IncompleteSuccess => "INCOMPLETE_SUCCESS",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Failure => "FAILURE",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ResponseStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-attribute outcome of a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStatus {
    /// Attribute code.
    pub key: String,
    /// Attribute change status, e.g. `UPDATED` or `NOT_UPDATED`.
    pub status: String,
    /// Human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
}

impl AttributeStatus {
    /// Creates an attribute status.
    #[must_use]
    pub fn new(key: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            status: status.into(),
            message: None,
        }
    }

    /// Sets the detail message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Status block carried by every identity-store response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    /// Outcome category.
    #[serde(rename = "type")]
    pub status_type: ResponseStatusType,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
    /// Per-attribute outcomes.
    #[serde(default)]
    pub attribute_statuses: Vec<AttributeStatus>,
}

impl ResponseStatus {
    /// Creates a status without message or attribute details.
    #[must_use]
    pub const fn new(status_type: ResponseStatusType) -> Self {
        Self {
            status_type,
            message: None,
            attribute_statuses: Vec::new(),
        }
    }

    /// Sets the outcome message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the per-attribute outcomes.
    #[must_use]
    pub fn with_attribute_statuses(mut self, statuses: Vec<AttributeStatus>) -> Self {
        self.attribute_statuses = statuses;
        self
    }
}
