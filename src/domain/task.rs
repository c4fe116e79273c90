//! Task aggregate root.

use super::{ProjectId, TaskDuration, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The identifier is `None` until the store assigns one on first save. The
/// owning project is referenced by identifier only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    name: String,
    description: String,
    status: TaskStatus,
    duration: TaskDuration,
    project_id: Option<ProjectId>,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Assigned task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted duration.
    pub duration: TaskDuration,
    /// Persisted owning project reference, if any.
    pub project_id: Option<ProjectId>,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not-yet-persisted task.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        duration: TaskDuration,
        project_id: Option<ProjectId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            status,
            duration,
            project_id,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            name: data.name,
            description: data.description,
            status: data.status,
            duration: data.duration,
            project_id: data.project_id,
            deleted: data.deleted,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the assigned identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task duration.
    #[must_use]
    pub const fn duration(&self) -> TaskDuration {
        self.duration
    }

    /// Returns the owning project reference, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns whether the task has been soft-deleted.
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
        name: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        duration: TaskDuration,
        project_id: Option<ProjectId>,
        clock: &impl Clock,
    ) {
        self.name = name.into();
        self.description = description.into();
        self.status = status;
        self.duration = duration;
        self.project_id = project_id;
        self.touch(clock);
    }

    /// Marks the task as soft-deleted. Idempotent.
    pub const fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Records the store-assigned identifier.
    pub(crate) const fn assign_id(&mut self, id: TaskId) {
        self.id = Some(id);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
