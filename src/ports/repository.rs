//! Repository ports for entity persistence and lookup.
//!
//! The store assigns numeric identifiers on first save and never removes
//! rows: deletion sets a flag, and listing filters flagged rows out.
//! Lookups by identifier intentionally include soft-deleted rows so that
//! deletion stays idempotent.

use crate::domain::{
    Client, ClientId, Company, CompanyId, Project, ProjectId, Task, TaskId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Pagination window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page number.
    pub number: u32,
    /// Maximum rows per page.
    pub size: u32,
}

impl Page {
    /// Default page size, matching the HTTP layer's default.
    pub const DEFAULT_SIZE: u32 = 20;

    /// Creates a page window.
    #[must_use]
    pub const fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// Returns the number of rows to skip.
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.number as usize).saturating_mul(self.size as usize)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persists a project, assigning an identifier when it has none, and
    /// returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] on storage failure, or when
    /// a persisted project's row no longer exists.
    async fn save(&self, project: Project) -> RepositoryResult<ProjectId>;

    /// Finds a project by identifier, including soft-deleted rows.
    ///
    /// Returns `None` when no such row exists.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;

    /// Returns the requested page of projects that are not soft-deleted.
    async fn list_active(&self, page: Page) -> RepositoryResult<Vec<Project>>;

    /// Sets the soft-delete flag on the given project and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] on storage failure.
    async fn soft_delete(&self, project: Project) -> RepositoryResult<ProjectId>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a task, assigning an identifier when it has none, and
    /// returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] on storage failure, or when
    /// a persisted task's row no longer exists.
    async fn save(&self, task: Task) -> RepositoryResult<TaskId>;

    /// Finds a task by identifier, including soft-deleted rows.
    ///
    /// Returns `None` when no such row exists.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns the requested page of tasks that are not soft-deleted.
    async fn list_active(&self, page: Page) -> RepositoryResult<Vec<Task>>;

    /// Sets the soft-delete flag on the given task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] on storage failure.
    async fn soft_delete(&self, task: Task) -> RepositoryResult<TaskId>;
}

/// Client persistence contract.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Persists a client, assigning an identifier when it has none, and
    /// returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] on storage failure.
    async fn save(&self, client: Client) -> RepositoryResult<ClientId>;

    /// Finds a client by identifier.
    ///
    /// Returns `None` when no such row exists.
    async fn find_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
}

/// Company persistence contract.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persists a company, assigning an identifier when it has none, and
    /// returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] on storage failure.
    async fn save(&self, company: Company) -> RepositoryResult<CompanyId>;

    /// Finds a company by identifier.
    ///
    /// Returns `None` when no such row exists.
    async fn find_by_id(&self, id: CompanyId) -> RepositoryResult<Option<Company>>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Persistence error for an update that matched no stored row.
    #[must_use]
    pub fn missing_row(id: i64) -> Self {
        Self::persistence(MissingRowError(id))
    }
}

/// An update targeted an identifier with no stored row.
///
/// Saving an already-persisted entity must replace an existing row; when
/// the row vanished between lookup and write, the write must fail rather
/// than silently report success.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no stored row with id: {0}")]
pub struct MissingRowError(pub i64);
