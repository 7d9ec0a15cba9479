//! Integer identifiers issued by the workflow engine.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! engine_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw engine identifier.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

engine_id!(
    /// Identifier of a workflow resource history entry (one action firing).
    ResourceHistoryId
);
engine_id!(
    /// Identifier of the resource a workflow instance runs on.
    ResourceId
);
engine_id!(
    /// Identifier of a workflow definition.
    WorkflowId
);
engine_id!(
    /// Identifier of a workflow state.
    StateId
);
engine_id!(
    /// Identifier of a configured workflow task.
    TaskId
);
