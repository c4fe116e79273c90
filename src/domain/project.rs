//! Project aggregate and its sponsor reference.

use super::{ClientId, CompanyId, ProjectId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Reference to the single party a project is billed to.
///
/// A project always has exactly one sponsor; the variant records which of
/// the two mutually exclusive references the request populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSponsor {
    /// The project is sponsored by a client.
    Client(ClientId),
    /// The project is sponsored by a company.
    Company(CompanyId),
}

impl ProjectSponsor {
    /// Returns the client identifier when the sponsor is a client.
    #[must_use]
    pub const fn client_id(self) -> Option<ClientId> {
        match self {
            Self::Client(id) => Some(id),
            Self::Company(_) => None,
        }
    }

    /// Returns the company identifier when the sponsor is a company.
    #[must_use]
    pub const fn company_id(self) -> Option<CompanyId> {
        match self {
            Self::Client(_) => None,
            Self::Company(id) => Some(id),
        }
    }
}

/// Project aggregate root.
///
/// The identifier is `None` until the store assigns one on first save.
/// Task references are held as an ordered identifier list and resolved
/// through the repository, never as an embedded object graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: Option<ProjectId>,
    title: String,
    description: String,
    sponsor: ProjectSponsor,
    task_ids: Vec<TaskId>,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Assigned project identifier.
    pub id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted sponsor reference.
    pub sponsor: ProjectSponsor,
    /// Persisted ordered task references.
    pub task_ids: Vec<TaskId>,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new, not-yet-persisted project.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        sponsor: ProjectSponsor,
        task_ids: Vec<TaskId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            sponsor,
            task_ids,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            description: data.description,
            sponsor: data.sponsor,
            task_ids: data.task_ids,
            deleted: data.deleted,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the assigned identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<ProjectId> {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the sponsor reference.
    #[must_use]
    pub const fn sponsor(&self) -> ProjectSponsor {
        self.sponsor
    }

    /// Returns the ordered task references.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns whether the project has been soft-deleted.
    #[must_use]
    pub const fn deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces every mutable field from an update request.
    ///
    /// Updates are full-field replacements, not partial patches.
    pub fn apply_update(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        sponsor: ProjectSponsor,
        task_ids: Vec<TaskId>,
        clock: &impl Clock,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.sponsor = sponsor;
        self.task_ids = task_ids;
        self.touch(clock);
    }

    /// Marks the project as soft-deleted. Idempotent.
    pub const fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Records the store-assigned identifier.
    pub(crate) const fn assign_id(&mut self, id: ProjectId) {
        self.id = Some(id);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
