//! Domain model for candidate identities and their audit trail.

mod candidate;
mod history;
mod ids;

pub use candidate::{CandidateIdentity, CandidateIdentityAttribute};
pub use history::CandidateIdentityHistory;
pub use ids::{BatchId, CandidateId};
