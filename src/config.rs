//! Plugin settings.
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [request]
//! author = "identityimport"
//!
//! [identity_store]
//! base_url = "https://ids.example.org/api/v3"
//! timeout_secs = 30
//! ```
//!
//! The request author can be overridden with the
//! `IDENTITYIMPORT_CONFIG_REQUEST_AUTHOR` environment variable.

use crate::identity_store::domain::RequestAuthor;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Property key of the author name sent with identity-store requests.
pub const REQUEST_AUTHOR_PROPERTY: &str = "identityimport_config.request.author";

/// Environment variable overriding [`REQUEST_AUTHOR_PROPERTY`].
pub const REQUEST_AUTHOR_ENV: &str = "IDENTITYIMPORT_CONFIG_REQUEST_AUTHOR";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityImportSettings {
    /// Settings attached to outbound requests.
    pub request: RequestSettings,
    /// Identity-store client settings.
    pub identity_store: IdentityStoreSettings,
}

/// `[request]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestSettings {
    /// Author name sent with every identity-store request.
    pub author: String,
}

/// `[identity_store]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityStoreSettings {
    /// Base URL of the identity-store REST API.
    pub base_url: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// The settings are not valid TOML for this schema.
    #[error("could not parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required property is missing or blank.
    #[error("missing required property: {0}")]
    MissingProperty(&'static str),
}

impl IdentityImportSettings {
    /// Reads settings from `path` and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the file cannot be read or parsed, or a
    /// required property is blank.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source: Arc::new(source),
        })?;
        Self::from_toml_str(&content, |name| std::env::var(name).ok())
    }

    /// Parses settings, consulting `env` for overrides.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the content cannot be parsed or a
    /// required property is blank.
    pub fn from_toml_str(
        content: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut settings: Self = toml::from_str(content)?;
        if let Some(author) = env(REQUEST_AUTHOR_ENV) {
            settings.request.author = author;
        }
        if settings.request.author.trim().is_empty() {
            return Err(SettingsError::MissingProperty(REQUEST_AUTHOR_PROPERTY));
        }
        if settings.identity_store.base_url.trim().is_empty() {
            return Err(SettingsError::MissingProperty("identity_store.base_url"));
        }
        Ok(settings)
    }

    /// Looks a setting up by its property key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        match key {
            REQUEST_AUTHOR_PROPERTY => Some(self.request.author.as_str()),
            "identityimport_config.identity_store.base_url" => {
                Some(self.identity_store.base_url.as_str())
            }
            _ => None,
        }
    }

    /// Returns the application author attached to identity-store requests.
    #[must_use]
    pub fn request_author(&self) -> RequestAuthor {
        RequestAuthor::application(self.request.author.clone())
    }
}
