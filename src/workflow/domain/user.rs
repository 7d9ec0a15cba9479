//! Authenticated back-office user.

/// Administrator driving a workflow action or editing task configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    /// Back-office user identifier.
    pub id: i32,
    /// Login of the user.
    pub access_code: String,
}

impl AdminUser {
    /// Creates an admin user.
    #[must_use]
    pub fn new(id: i32, access_code: impl Into<String>) -> Self {
        Self {
            id,
            access_code: access_code.into(),
        }
    }
}
