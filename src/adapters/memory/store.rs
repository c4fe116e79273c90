//! Thread-safe in-memory store implementing every repository port.
//!
//! Identifiers are assigned sequentially per entity kind, starting at 1.
//! `BTreeMap` keeps list queries in identifier order, which is the
//! documented deterministic scan order for aggregation.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{
    Client, ClientId, Company, CompanyId, Project, ProjectId, Task, TaskId,
};
use crate::ports::{
    ClientRepository, CompanyRepository, Page, ProjectRepository, RepositoryError,
    RepositoryResult, TaskRepository,
};

/// Thread-safe in-memory repository for all four entity kinds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    projects: BTreeMap<i64, Project>,
    tasks: BTreeMap<i64, Task>,
    clients: BTreeMap<i64, Client>,
    companies: BTreeMap<i64, Company>,
    next_project_id: i64,
    next_task_id: i64,
    next_client_id: i64,
    next_company_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_state(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn read_state(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

/// Returns the next identifier for a table, advancing the counter.
fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// Collects one page of rows that are not soft-deleted.
fn page_of<T: Clone>(
    rows: &BTreeMap<i64, T>,
    page: Page,
    is_deleted: impl Fn(&T) -> bool,
) -> Vec<T> {
    rows.values()
        .filter(|row| !is_deleted(row))
        .skip(page.offset())
        .take(page.size as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn save(&self, project: Project) -> RepositoryResult<ProjectId> {
        let mut state = self.write_state()?;
        let mut row = project;
        let id = match row.id() {
            Some(id) => {
                if !state.projects.contains_key(&id.value()) {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                id
            }
            None => {
                let id = ProjectId::new(next_id(&mut state.next_project_id));
                row.assign_id(id);
                id
            }
        };
        state.projects.insert(id.value(), row);
        Ok(id)
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let state = self.read_state()?;
        Ok(state.projects.get(&id.value()).cloned())
    }

    async fn list_active(&self, page: Page) -> RepositoryResult<Vec<Project>> {
        let state = self.read_state()?;
        Ok(page_of(&state.projects, page, Project::deleted))
    }

    async fn soft_delete(&self, project: Project) -> RepositoryResult<ProjectId> {
        let mut row = project;
        row.mark_deleted();
        ProjectRepository::save(self, row).await
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn save(&self, task: Task) -> RepositoryResult<TaskId> {
        let mut state = self.write_state()?;
        let mut row = task;
        let id = match row.id() {
            Some(id) => {
                if !state.tasks.contains_key(&id.value()) {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                id
            }
            None => {
                let id = TaskId::new(next_id(&mut state.next_task_id));
                row.assign_id(id);
                id
            }
        };
        state.tasks.insert(id.value(), row);
        Ok(id)
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id.value()).cloned())
    }

    async fn list_active(&self, page: Page) -> RepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(page_of(&state.tasks, page, Task::deleted))
    }

    async fn soft_delete(&self, task: Task) -> RepositoryResult<TaskId> {
        let mut row = task;
        row.mark_deleted();
        TaskRepository::save(self, row).await
    }
}

#[async_trait]
impl ClientRepository for InMemoryStore {
    async fn save(&self, client: Client) -> RepositoryResult<ClientId> {
        let mut state = self.write_state()?;
        let mut row = client;
        let id = match row.id {
            Some(id) => {
                if !state.clients.contains_key(&id.value()) {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                id
            }
            None => {
                let id = ClientId::new(next_id(&mut state.next_client_id));
                row.id = Some(id);
                id
            }
        };
        state.clients.insert(id.value(), row);
        Ok(id)
    }

    async fn find_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let state = self.read_state()?;
        Ok(state.clients.get(&id.value()).cloned())
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn save(&self, company: Company) -> RepositoryResult<CompanyId> {
        let mut state = self.write_state()?;
        let mut row = company;
        let id = match row.id {
            Some(id) => {
                if !state.companies.contains_key(&id.value()) {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                id
            }
            None => {
                let id = CompanyId::new(next_id(&mut state.next_company_id));
                row.id = Some(id);
                id
            }
        };
        state.companies.insert(id.value(), row);
        Ok(id)
    }

    async fn find_by_id(&self, id: CompanyId) -> RepositoryResult<Option<Company>> {
        let state = self.read_state()?;
        Ok(state.companies.get(&id.value()).cloned())
    }
}
