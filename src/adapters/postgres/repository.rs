//! `PostgreSQL`-backed store implementing every repository port.

use super::{
    models::{
        self, ClientRow, CompanyRow, ProjectRow, TaskRow,
    },
    schema::{clients, companies, projects, tasks},
};
use crate::domain::{
    Client, ClientId, Company, CompanyId, Project, ProjectId, Task, TaskId,
};
use crate::ports::{
    ClientRepository, CompanyRepository, Page, ProjectRepository, RepositoryError,
    RepositoryResult, TaskRepository,
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the store.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed repository for all four entity kinds.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RepositoryError::persistence)?
    }
}

/// Converts a pagination window into SQL offset/limit values.
fn page_bounds(page: Page) -> (i64, i64) {
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (offset, i64::from(page.size))
}

#[async_trait]
impl ProjectRepository for PostgresStore {
    async fn save(&self, project: Project) -> RepositoryResult<ProjectId> {
        self.run_blocking(move |connection| match project.id() {
            Some(id) => {
                let affected = diesel::update(projects::table.filter(projects::id.eq(id.value())))
                    .set((
                        projects::title.eq(project.title()),
                        projects::description.eq(project.description()),
                        projects::client_id
                            .eq(project.sponsor().client_id().map(ClientId::value)),
                        projects::company_id
                            .eq(project.sponsor().company_id().map(CompanyId::value)),
                        projects::task_ids.eq(models::task_ids_to_json(project.task_ids())),
                        projects::deleted.eq(project.deleted()),
                        projects::updated_at.eq(project.updated_at()),
                    ))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                if affected == 0 {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                Ok(id)
            }
            None => {
                let new_row = models::project_to_new_row(&project);
                let id = diesel::insert_into(projects::table)
                    .values(&new_row)
                    .returning(projects::id)
                    .get_result::<i64>(connection)
                    .map_err(RepositoryError::persistence)?;
                Ok(ProjectId::new(id))
            }
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.value()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(|found| models::row_to_project(found).map_err(RepositoryError::persistence))
                .transpose()
        })
        .await
    }

    async fn list_active(&self, page: Page) -> RepositoryResult<Vec<Project>> {
        let (offset, limit) = page_bounds(page);
        self.run_blocking(move |connection| {
            let rows = projects::table
                .filter(projects::deleted.eq(false))
                .order(projects::id.asc())
                .offset(offset)
                .limit(limit)
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| models::row_to_project(row).map_err(RepositoryError::persistence))
                .collect()
        })
        .await
    }

    async fn soft_delete(&self, project: Project) -> RepositoryResult<ProjectId> {
        let mut row = project;
        row.mark_deleted();
        ProjectRepository::save(self, row).await
    }
}

#[async_trait]
impl TaskRepository for PostgresStore {
    async fn save(&self, task: Task) -> RepositoryResult<TaskId> {
        self.run_blocking(move |connection| match task.id() {
            Some(id) => {
                let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                    .set((
                        tasks::name.eq(task.name()),
                        tasks::description.eq(task.description()),
                        tasks::status.eq(task.status().as_str()),
                        tasks::duration_ms.eq(task.duration().as_millis()),
                        tasks::project_id.eq(task.project_id().map(ProjectId::value)),
                        tasks::deleted.eq(task.deleted()),
                        tasks::updated_at.eq(task.updated_at()),
                    ))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                if affected == 0 {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                Ok(id)
            }
            None => {
                let new_row = models::task_to_new_row(&task);
                let id = diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .returning(tasks::id)
                    .get_result::<i64>(connection)
                    .map_err(RepositoryError::persistence)?;
                Ok(TaskId::new(id))
            }
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(|found| models::row_to_task(found).map_err(RepositoryError::persistence))
                .transpose()
        })
        .await
    }

    async fn list_active(&self, page: Page) -> RepositoryResult<Vec<Task>> {
        let (offset, limit) = page_bounds(page);
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::deleted.eq(false))
                .order(tasks::id.asc())
                .offset(offset)
                .limit(limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| models::row_to_task(row).map_err(RepositoryError::persistence))
                .collect()
        })
        .await
    }

    async fn soft_delete(&self, task: Task) -> RepositoryResult<TaskId> {
        let mut row = task;
        row.mark_deleted();
        TaskRepository::save(self, row).await
    }
}

#[async_trait]
impl ClientRepository for PostgresStore {
    async fn save(&self, client: Client) -> RepositoryResult<ClientId> {
        self.run_blocking(move |connection| match client.id {
            Some(id) => {
                let affected = diesel::update(clients::table.filter(clients::id.eq(id.value())))
                    .set((
                        clients::name.eq(&client.name),
                        clients::contact_info.eq(&client.contact_info),
                    ))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                if affected == 0 {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                Ok(id)
            }
            None => {
                let new_row = models::NewClientRow {
                    name: client.name.clone(),
                    contact_info: client.contact_info.clone(),
                };
                let id = diesel::insert_into(clients::table)
                    .values(&new_row)
                    .returning(clients::id)
                    .get_result::<i64>(connection)
                    .map_err(RepositoryError::persistence)?;
                Ok(ClientId::new(id))
            }
        })
        .await
    }

    async fn find_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        self.run_blocking(move |connection| {
            let row = clients::table
                .filter(clients::id.eq(id.value()))
                .select(ClientRow::as_select())
                .first::<ClientRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(models::row_to_client))
        })
        .await
    }
}

#[async_trait]
impl CompanyRepository for PostgresStore {
    async fn save(&self, company: Company) -> RepositoryResult<CompanyId> {
        self.run_blocking(move |connection| match company.id {
            Some(id) => {
                let affected = diesel::update(companies::table.filter(companies::id.eq(id.value())))
                    .set((
                        companies::name.eq(&company.name),
                        companies::address.eq(&company.address),
                        companies::contact_info.eq(&company.contact_info),
                    ))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                if affected == 0 {
                    return Err(RepositoryError::missing_row(id.value()));
                }
                Ok(id)
            }
            None => {
                let new_row = models::NewCompanyRow {
                    name: company.name.clone(),
                    address: company.address.clone(),
                    contact_info: company.contact_info.clone(),
                };
                let id = diesel::insert_into(companies::table)
                    .values(&new_row)
                    .returning(companies::id)
                    .get_result::<i64>(connection)
                    .map_err(RepositoryError::persistence)?;
                Ok(CompanyId::new(id))
            }
        })
        .await
    }

    async fn find_by_id(&self, id: CompanyId) -> RepositoryResult<Option<Company>> {
        self.run_blocking(move |connection| {
            let row = companies::table
                .filter(companies::id.eq(id.value()))
                .select(CompanyRow::as_select())
                .first::<CompanyRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(models::row_to_company))
        })
        .await
    }
}
