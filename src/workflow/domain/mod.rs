//! Domain model shared with the workflow engine.

mod catalog;
mod ids;
mod request;
mod resource;
mod user;

pub use catalog::{State, Workflow};
pub use ids::{ResourceHistoryId, ResourceId, StateId, TaskId, WorkflowId};
pub use request::TaskRequest;
pub use resource::ResourceHistory;
pub use user::AdminUser;
