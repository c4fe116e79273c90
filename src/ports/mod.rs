//! Port contracts for project and task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod repository;

pub use repository::{
    ClientRepository, CompanyRepository, MissingRowError, Page, ProjectRepository,
    RepositoryError, RepositoryResult, TaskRepository,
};
