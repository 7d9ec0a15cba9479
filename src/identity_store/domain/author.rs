//! Author descriptor attached to every identity-store request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of actor issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorType {
    /// The identity owner.
    Owner,
    /// A back-office agent.
    Agent,
    /// An identity-store administrator.
    Admin,
    /// A client application acting on its own behalf.
    Application,
}

impl AuthorType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Agent => "agent",
            Self::Admin => "admin",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is issuing an identity-store request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAuthor {
    /// Author name.
    pub name: String,
    /// Author kind.
    #[serde(rename = "type")]
    pub author_type: AuthorType,
}

impl RequestAuthor {
    /// Creates an application author.
    #[must_use]
    pub fn application(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author_type: AuthorType::Application,
        }
    }
}
