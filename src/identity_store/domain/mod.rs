//! Request and response shapes exchanged with the identity store.

mod author;
mod exchange;
mod identity;
mod status;

pub use author::{AuthorType, RequestAuthor};
pub use exchange::{IdentityChangeRequest, IdentityChangeResponse, IdentitySearchResponse};
pub use identity::{AttributeDto, IdentityDto};
pub use status::{AttributeStatus, ResponseStatus, ResponseStatusType};
