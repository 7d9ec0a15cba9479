//! Submitted form parameters passed to a task invocation.

use std::collections::BTreeMap;

/// Form parameters of the request that triggered a workflow action.
///
/// Only the first value of a repeated parameter is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRequest {
    parameters: BTreeMap<String, String>,
}

impl TaskRequest {
    /// Creates a request without parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from name/value pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |request, (name, value)| {
                request.with_parameter(name, value)
            })
    }

    /// Adds a parameter unless one with the same name is already present.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .entry(name.into())
            .or_insert_with(|| value.into());
        self
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Returns parameter names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Returns `true` when any parameter name starts with `prefix`.
    #[must_use]
    pub fn has_parameter_with_prefix(&self, prefix: &str) -> bool {
        self.names().any(|name| name.starts_with(prefix))
    }
}
