//! Diesel row models and domain conversions.

use super::schema::{clients, companies, projects, tasks};
use crate::domain::{
    Client, ClientId, Company, CompanyId, PersistedProjectData, PersistedTaskData, Project,
    ProjectId, ProjectSponsor, Task, TaskDuration, TaskId, TaskStatus,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use thiserror::Error;

/// Conversion failures between rows and domain values.
///
/// These indicate rows that violate the canonical schema (for example a
/// project row referencing both a client and a company) and surface as
/// persistence errors.
#[derive(Debug, Error)]
pub enum RowConversionError {
    /// A project row references neither a client nor a company.
    #[error("project {0} has no sponsor reference")]
    MissingSponsor(i64),
    /// A project row references both a client and a company.
    #[error("project {0} references both a client and a company")]
    ConflictingSponsor(i64),
    /// A task-id list column holds malformed JSON.
    #[error("project {0} has a malformed task id list: {1}")]
    MalformedTaskIds(i64, serde_json::Error),
    /// A status column holds an unknown value.
    #[error(transparent)]
    UnknownStatus(#[from] crate::domain::ParseTaskStatusError),
}

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Assigned project identifier.
    pub id: i64,
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Sponsoring client, if any.
    pub client_id: Option<i64>,
    /// Sponsoring company, if any.
    pub company_id: Option<i64>,
    /// Ordered task identifier list as JSON.
    pub task_ids: Value,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for project records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Sponsoring client, if any.
    pub client_id: Option<i64>,
    /// Sponsoring company, if any.
    pub company_id: Option<i64>,
    /// Ordered task identifier list as JSON.
    pub task_ids: Value,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Assigned task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Duration in milliseconds.
    pub duration_ms: i64,
    /// Owning project, if any.
    pub project_id: Option<i64>,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Duration in milliseconds.
    pub duration_ms: i64,
    /// Owning project, if any.
    pub project_id: Option<i64>,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for client records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ClientRow {
    /// Assigned client identifier.
    pub id: i64,
    /// Client name.
    pub name: String,
    /// Free-form contact information.
    pub contact_info: String,
}

/// Insert model for client records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clients)]
pub struct NewClientRow {
    /// Client name.
    pub name: String,
    /// Free-form contact information.
    pub contact_info: String,
}

/// Query result row for company records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompanyRow {
    /// Assigned company identifier.
    pub id: i64,
    /// Company name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Free-form contact information.
    pub contact_info: String,
}

/// Insert model for company records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub struct NewCompanyRow {
    /// Company name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Free-form contact information.
    pub contact_info: String,
}

/// Converts a project row into the domain aggregate.
pub fn row_to_project(row: ProjectRow) -> Result<Project, RowConversionError> {
    let sponsor = match (row.client_id, row.company_id) {
        (Some(client), None) => ProjectSponsor::Client(ClientId::new(client)),
        (None, Some(company)) => ProjectSponsor::Company(CompanyId::new(company)),
        (None, None) => return Err(RowConversionError::MissingSponsor(row.id)),
        (Some(_), Some(_)) => return Err(RowConversionError::ConflictingSponsor(row.id)),
    };
    let task_ids: Vec<i64> = serde_json::from_value(row.task_ids)
        .map_err(|err| RowConversionError::MalformedTaskIds(row.id, err))?;

    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(row.id),
        title: row.title,
        description: row.description,
        sponsor,
        task_ids: task_ids.into_iter().map(TaskId::new).collect(),
        deleted: row.deleted,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

/// Builds an insert row for a not-yet-persisted project.
pub fn project_to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        title: project.title().to_owned(),
        description: project.description().to_owned(),
        client_id: project.sponsor().client_id().map(ClientId::value),
        company_id: project.sponsor().company_id().map(CompanyId::value),
        task_ids: task_ids_to_json(project.task_ids()),
        deleted: project.deleted(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

/// Converts a task row into the domain aggregate.
pub fn row_to_task(row: TaskRow) -> Result<Task, RowConversionError> {
    let status = TaskStatus::try_from(row.status.as_str())?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(row.id),
        name: row.name,
        description: row.description,
        status,
        duration: TaskDuration::from_millis(row.duration_ms),
        project_id: row.project_id.map(ProjectId::new),
        deleted: row.deleted,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

/// Builds an insert row for a not-yet-persisted task.
pub fn task_to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        name: task.name().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        duration_ms: task.duration().as_millis(),
        project_id: task.project_id().map(ProjectId::value),
        deleted: task.deleted(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

/// Converts a client row into the domain entity.
pub fn row_to_client(row: ClientRow) -> Client {
    Client {
        id: Some(ClientId::new(row.id)),
        name: row.name,
        contact_info: row.contact_info,
    }
}

/// Converts a company row into the domain entity.
pub fn row_to_company(row: CompanyRow) -> Company {
    Company {
        id: Some(CompanyId::new(row.id)),
        name: row.name,
        address: row.address,
        contact_info: row.contact_info,
    }
}

/// Serializes an ordered task identifier list for the JSONB column.
pub fn task_ids_to_json(ids: &[TaskId]) -> Value {
    Value::from(ids.iter().map(|id| id.value()).collect::<Vec<_>>())
}
