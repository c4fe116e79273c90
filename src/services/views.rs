//! Read-model projections returned by list operations.

use crate::domain::{Client, Company, ProjectId, TaskStatus};
use serde::Serialize;

/// List-view projection of a project.
///
/// Duration and status are derived from the project's non-deleted tasks at
/// read time; the sponsor entity is embedded in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    /// Assigned project identifier.
    pub id: Option<ProjectId>,
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Sponsoring company, when the sponsor is a company.
    pub company: Option<Company>,
    /// Sponsoring client, when the sponsor is a client.
    pub client: Option<Client>,
    /// Total task duration formatted as `"<hours> hours <minutes> minutes"`.
    pub duration: String,
    /// Status held by the plurality of the project's tasks.
    pub status: TaskStatus,
}
