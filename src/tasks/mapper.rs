//! Conversion of candidate identities into identity-store payloads.

use crate::candidate::domain::{CandidateIdentity, CandidateIdentityAttribute};
use crate::identity_store::domain::{AttributeDto, IdentityDto};

/// Builds the identity payload sent to the store for a candidate.
///
/// Identifiers are copied verbatim and attributes keep their intake order.
#[must_use]
pub fn map_to_identity(candidate: &CandidateIdentity) -> IdentityDto {
    IdentityDto {
        customer_id: candidate.customer_id().map(str::to_owned),
        connection_id: candidate.connection_id().map(str::to_owned),
        last_update_date: None,
        attributes: candidate.attributes().iter().map(map_attribute).collect(),
    }
}

fn map_attribute(attribute: &CandidateIdentityAttribute) -> AttributeDto {
    AttributeDto {
        key: attribute.code.clone(),
        value: attribute.value.clone(),
        certifier: attribute.cert_process.clone(),
        certification_date: attribute.cert_date,
    }
}
