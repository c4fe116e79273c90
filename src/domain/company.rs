//! Company entity.

use super::CompanyId;
use serde::{Deserialize, Serialize};

/// A company that can sponsor projects.
///
/// Companies and clients are independent of each other; the projects
/// sponsored by a company are resolved through the project repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Assigned identifier, `None` until persisted.
    pub id: Option<CompanyId>,
    /// Company name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Free-form contact information.
    pub contact_info: String,
}

impl Company {
    /// Creates a new, not-yet-persisted company.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            contact_info: contact_info.into(),
        }
    }
}
