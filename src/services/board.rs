//! Orchestration service sequencing validation, resolution, and persistence.

use super::{validation, Envelope, ProjectRequest, ProjectView, TaskRequest};
use crate::domain::{
    dominant_status, total_duration, ClientId, CompanyId, Project, ProjectId, ProjectSponsor,
    Task, TaskDuration, TaskId, ValidationError,
};
use crate::ports::{
    ClientRepository, CompanyRepository, Page, ProjectRepository, RepositoryError, TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

const PROJECT_PERSIST_ERROR: &str = "Could not persist project due to validation errors";
const PROJECT_UPDATE_ERROR: &str = "Could not update project due to validation errors";
const TASK_PERSIST_ERROR: &str = "Could not persist task due to validation errors";
const TASK_UPDATE_ERROR: &str = "Could not update task due to validation errors";

/// Service-level errors for board operations.
///
/// Business-rule failures never surface here; they are reported through the
/// failure [`Envelope`]. This channel carries infrastructure faults only.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for board service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Request orchestrator for project and task operations.
///
/// Each write operation validates the request shape, resolves every external
/// reference, and decodes duration fields before touching the store; when
/// any error was accumulated the store is never written and the accumulated
/// list is returned in a failure envelope.
#[derive(Clone)]
pub struct BoardService<P, T, C, M, K>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: ClientRepository,
    M: CompanyRepository,
    K: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    clients: Arc<C>,
    companies: Arc<M>,
    clock: Arc<K>,
}

impl<P, T, C, M, K> BoardService<P, T, C, M, K>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: ClientRepository,
    M: CompanyRepository,
    K: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(
        projects: Arc<P>,
        tasks: Arc<T>,
        clients: Arc<C>,
        companies: Arc<M>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            projects,
            tasks,
            clients,
            companies,
            clock,
        }
    }

    /// Creates a project from the given request.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure; request
    /// errors are reported through the failure envelope.
    pub async fn create_project(&self, request: ProjectRequest) -> ServiceResult<Envelope> {
        let mut errors = validation::validate_project_request(&request);
        let sponsor = self.resolve_sponsor(&request, &mut errors).await?;
        let task_ids = self.resolve_task_refs(&request.task_ids, &mut errors).await?;

        if !errors.is_empty() {
            debug!(error_count = errors.len(), "project creation rejected");
            return Ok(Envelope::failure(PROJECT_PERSIST_ERROR, &errors));
        }
        // Exactly-one validation guarantees a resolved sponsor at this point.
        let Some(sponsor) = sponsor else {
            return Ok(Envelope::failure(
                PROJECT_PERSIST_ERROR,
                &[ValidationError::MissingClientAndCompany],
            ));
        };

        let project = Project::new(
            request.title,
            request.description,
            sponsor,
            task_ids,
            &*self.clock,
        );
        let id = self.projects.save(project).await?;
        info!(%id, "project persisted");

        Ok(Envelope::success(format!(
            "Successfully persisted project with id: {id}"
        )))
    }

    /// Replaces every field of the project with the given identifier.
    ///
    /// A missing identifier is reported through the failure envelope; the
    /// update never creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure.
    pub async fn update_project(
        &self,
        request: ProjectRequest,
        id: ProjectId,
    ) -> ServiceResult<Envelope> {
        let mut errors = validation::validate_project_request(&request);
        let sponsor = self.resolve_sponsor(&request, &mut errors).await?;
        let task_ids = self.resolve_task_refs(&request.task_ids, &mut errors).await?;

        if !errors.is_empty() {
            debug!(%id, error_count = errors.len(), "project update rejected");
            return Ok(Envelope::failure(PROJECT_UPDATE_ERROR, &errors));
        }
        let Some(sponsor) = sponsor else {
            return Ok(Envelope::failure(
                PROJECT_UPDATE_ERROR,
                &[ValidationError::MissingClientAndCompany],
            ));
        };

        let Some(mut project) = self.projects.find_by_id(id).await? else {
            return Ok(Envelope::failure(
                PROJECT_UPDATE_ERROR,
                &[ValidationError::project_not_found(id)],
            ));
        };

        project.apply_update(
            request.title,
            request.description,
            sponsor,
            task_ids,
            &*self.clock,
        );
        self.projects.save(project).await?;
        info!(%id, "project updated");

        Ok(Envelope::success(format!(
            "Successfully updated project with id: {id}"
        )))
    }

    /// Returns the requested page of non-deleted projects as list views.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure.
    pub async fn list_projects(&self, page: Page) -> ServiceResult<Vec<ProjectView>> {
        let projects = self.projects.list_active(page).await?;
        let mut views = Vec::with_capacity(projects.len());
        for project in projects {
            views.push(self.project_view(project).await?);
        }
        Ok(views)
    }

    /// Soft-deletes the project with the given identifier.
    ///
    /// Deleting an already-deleted project succeeds; the flag set is
    /// idempotent. A missing identifier is reported through the failure
    /// envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure.
    pub async fn delete_project(&self, id: ProjectId) -> ServiceResult<Envelope> {
        let Some(project) = self.projects.find_by_id(id).await? else {
            return Ok(Envelope::failure(
                format!("Could not find project with id: {id}"),
                &[ValidationError::project_not_found(id)],
            ));
        };

        self.projects.soft_delete(project).await?;
        info!(%id, "project soft-deleted");

        Ok(Envelope::success(format!(
            "Successfully deleted project with id: {id}"
        )))
    }

    /// Creates a task from the given request.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure; request
    /// errors are reported through the failure envelope.
    pub async fn create_task(&self, request: TaskRequest) -> ServiceResult<Envelope> {
        let mut errors = Vec::new();
        let project_id = self
            .resolve_project_ref(request.project_id, &mut errors)
            .await?;
        let duration = decode_duration(&request, &mut errors);

        if !errors.is_empty() {
            debug!(error_count = errors.len(), "task creation rejected");
            return Ok(Envelope::failure(TASK_PERSIST_ERROR, &errors));
        }
        let Some(duration) = duration else {
            return Ok(Envelope::failure(
                TASK_PERSIST_ERROR,
                &[ValidationError::DurationFormat],
            ));
        };

        let task = Task::new(
            request.name,
            request.description,
            request.status,
            duration,
            project_id,
            &*self.clock,
        );
        let id = self.tasks.save(task).await?;
        info!(%id, "task persisted");

        Ok(Envelope::success(format!(
            "Successfully persisted task with id: {id}"
        )))
    }

    /// Replaces every field of the task with the given identifier.
    ///
    /// A missing identifier is reported through the failure envelope; the
    /// update never creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure.
    pub async fn update_task(&self, request: TaskRequest, id: TaskId) -> ServiceResult<Envelope> {
        let mut errors = Vec::new();
        let project_id = self
            .resolve_project_ref(request.project_id, &mut errors)
            .await?;
        let duration = decode_duration(&request, &mut errors);

        if !errors.is_empty() {
            debug!(%id, error_count = errors.len(), "task update rejected");
            return Ok(Envelope::failure(TASK_UPDATE_ERROR, &errors));
        }
        let Some(duration) = duration else {
            return Ok(Envelope::failure(
                TASK_UPDATE_ERROR,
                &[ValidationError::DurationFormat],
            ));
        };

        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            return Ok(Envelope::failure(
                TASK_UPDATE_ERROR,
                &[ValidationError::task_not_found(id)],
            ));
        };

        task.apply_update(
            request.name,
            request.description,
            request.status,
            duration,
            project_id,
            &*self.clock,
        );
        self.tasks.save(task).await?;
        info!(%id, "task updated");

        Ok(Envelope::success(format!(
            "Successfully updated task with id: {id}"
        )))
    }

    /// Returns the requested page of non-deleted tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure.
    pub async fn list_tasks(&self, page: Page) -> ServiceResult<Vec<Task>> {
        Ok(self.tasks.list_active(page).await?)
    }

    /// Soft-deletes the task with the given identifier.
    ///
    /// Deleting an already-deleted task succeeds; the flag set is
    /// idempotent. A missing identifier is reported through the failure
    /// envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] on storage failure.
    pub async fn delete_task(&self, id: TaskId) -> ServiceResult<Envelope> {
        let Some(task) = self.tasks.find_by_id(id).await? else {
            return Ok(Envelope::failure(
                format!("Could not find task with id: {id}"),
                &[ValidationError::task_not_found(id)],
            ));
        };

        self.tasks.soft_delete(task).await?;
        info!(%id, "task soft-deleted");

        Ok(Envelope::success(format!(
            "Successfully deleted task with id: {id}"
        )))
    }

    /// Resolves whichever sponsor reference the request populated.
    ///
    /// The client branch is preferred when both identifiers happen to be
    /// set, keeping resolution deterministic; the exclusivity violation
    /// itself is reported by validation.
    async fn resolve_sponsor(
        &self,
        request: &ProjectRequest,
        errors: &mut Vec<ValidationError>,
    ) -> ServiceResult<Option<ProjectSponsor>> {
        if let Some(raw) = request.client_id {
            let id = ClientId::new(raw);
            if self.clients.find_by_id(id).await?.is_some() {
                return Ok(Some(ProjectSponsor::Client(id)));
            }
            errors.push(ValidationError::client_not_found(id));
        } else if let Some(raw) = request.company_id {
            let id = CompanyId::new(raw);
            if self.companies.find_by_id(id).await?.is_some() {
                return Ok(Some(ProjectSponsor::Company(id)));
            }
            errors.push(ValidationError::company_not_found(id));
        }
        Ok(None)
    }

    /// Resolves every referenced task, collecting one error per missing
    /// identifier instead of aborting on the first failure.
    async fn resolve_task_refs(
        &self,
        raw_ids: &[i64],
        errors: &mut Vec<ValidationError>,
    ) -> ServiceResult<Vec<TaskId>> {
        let mut resolved = Vec::with_capacity(raw_ids.len());
        for &raw in raw_ids {
            let id = TaskId::new(raw);
            match self.tasks.find_by_id(id).await? {
                Some(_) => resolved.push(id),
                None => errors.push(ValidationError::task_not_found(id)),
            }
        }
        Ok(resolved)
    }

    /// Resolves the owning project reference of a task request, if set.
    async fn resolve_project_ref(
        &self,
        raw_id: Option<i64>,
        errors: &mut Vec<ValidationError>,
    ) -> ServiceResult<Option<ProjectId>> {
        let Some(raw) = raw_id else {
            return Ok(None);
        };
        let id = ProjectId::new(raw);
        if self.projects.find_by_id(id).await?.is_some() {
            return Ok(Some(id));
        }
        errors.push(ValidationError::project_not_found(id));
        Ok(None)
    }

    /// Builds the list-view projection for one project.
    ///
    /// Soft-deleted tasks are filtered out before aggregation; a dangling
    /// sponsor reference leaves the embedded entity empty.
    async fn project_view(&self, project: Project) -> ServiceResult<ProjectView> {
        let mut tasks = Vec::with_capacity(project.task_ids().len());
        for &task_id in project.task_ids() {
            if let Some(task) = self.tasks.find_by_id(task_id).await? {
                if !task.deleted() {
                    tasks.push(task);
                }
            }
        }

        let (client, company) = match project.sponsor() {
            ProjectSponsor::Client(id) => (self.clients.find_by_id(id).await?, None),
            ProjectSponsor::Company(id) => (None, self.companies.find_by_id(id).await?),
        };

        Ok(ProjectView {
            id: project.id(),
            title: project.title().to_owned(),
            description: project.description().to_owned(),
            company,
            client,
            duration: total_duration(&tasks).format_hours_minutes(),
            status: dominant_status(&tasks),
        })
    }
}

/// Decodes the duration field of a task request, collecting the format
/// error on failure.
fn decode_duration(
    request: &TaskRequest,
    errors: &mut Vec<ValidationError>,
) -> Option<TaskDuration> {
    match TaskDuration::parse(&request.duration) {
        Ok(duration) => Some(duration),
        Err(_) => {
            errors.push(ValidationError::DurationFormat);
            None
        }
    }
}
