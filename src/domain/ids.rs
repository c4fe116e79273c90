//! Numeric identifier newtypes for persisted entities.
//!
//! Identifiers are assigned by the persistence adapter on first save, so
//! freshly constructed entities carry `Option<…Id>` until persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw numeric identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying numeric value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
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

entity_id! {
    /// Unique identifier for a project record.
    ProjectId
}

entity_id! {
    /// Unique identifier for a task record.
    TaskId
}

entity_id! {
    /// Unique identifier for a client record.
    ClientId
}

entity_id! {
    /// Unique identifier for a company record.
    CompanyId
}
