//! Client entity.

use super::ClientId;
use serde::{Deserialize, Serialize};

/// A client that can sponsor projects.
///
/// The projects sponsored by a client are resolved through the project
/// repository; no back-reference is embedded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Assigned identifier, `None` until persisted.
    pub id: Option<ClientId>,
    /// Client name.
    pub name: String,
    /// Free-form contact information.
    pub contact_info: String,
}

impl Client {
    /// Creates a new, not-yet-persisted client.
    #[must_use]
    pub fn new(name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }
}
