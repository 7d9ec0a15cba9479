//! Identity payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certified attribute of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDto {
    /// Attribute code.
    pub key: String,
    /// Attribute value.
    pub value: String,
    /// Code of the certification process that vouched for the value.
    #[serde(default)]
    pub certifier: Option<String>,
    /// Certification timestamp, epoch milliseconds on the wire.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub certification_date: Option<DateTime<Utc>>,
}

impl AttributeDto {
    /// Creates an uncertified attribute.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            certifier: None,
            certification_date: None,
        }
    }
}

/// Identity as sent to and returned by the identity store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    /// Remote customer id.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Connection id of the owning account.
    #[serde(default)]
    pub connection_id: Option<String>,
    /// Last update seen by the caller, used for optimistic concurrency on
    /// updates. Epoch milliseconds on the wire.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_update_date: Option<DateTime<Utc>>,
    /// Attributes.
    #[serde(default)]
    pub attributes: Vec<AttributeDto>,
}
