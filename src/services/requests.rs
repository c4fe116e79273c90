//! Request payloads accepted by the service layer.
//!
//! Field names mirror the JSON wire format (`camelCase`); unknown fields on
//! requests are ignored.

use crate::domain::TaskStatus;
use serde::Deserialize;

/// Request payload for creating or updating a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Sponsoring company identifier, mutually exclusive with `client_id`.
    #[serde(default)]
    pub company_id: Option<i64>,
    /// Sponsoring client identifier, mutually exclusive with `company_id`.
    #[serde(default)]
    pub client_id: Option<i64>,
    /// Ordered identifiers of the tasks to associate.
    #[serde(default)]
    pub task_ids: Vec<i64>,
}

impl ProjectRequest {
    /// Creates a request with no sponsor or task references.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            company_id: None,
            client_id: None,
            task_ids: Vec::new(),
        }
    }

    /// Sets the sponsoring client identifier.
    #[must_use]
    pub const fn with_client(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the sponsoring company identifier.
    #[must_use]
    pub const fn with_company(mut self, company_id: i64) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Sets the task references.
    #[must_use]
    pub fn with_task_ids(mut self, task_ids: impl IntoIterator<Item = i64>) -> Self {
        self.task_ids = task_ids.into_iter().collect();
        self
    }
}

/// Request payload for creating or updating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    /// Task name.
    pub name: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Duration in the `<int>h<int>m` wire format.
    pub duration: String,
    /// Owning project identifier, if any.
    #[serde(default)]
    pub project_id: Option<i64>,
}

impl TaskRequest {
    /// Creates a request with no owning project.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: TaskStatus,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            status,
            duration: duration.into(),
            project_id: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the owning project identifier.
    #[must_use]
    pub const fn with_project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }
}
