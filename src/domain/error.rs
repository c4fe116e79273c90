//! Error types for request validation, resolution, and parsing.

use super::{ClientId, CompanyId, ProjectId, TaskId};
use std::fmt;
use thiserror::Error;

/// Entity kinds referenced by requests, used in not-found reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Project record.
    Project,
    /// Task record.
    Task,
    /// Client record.
    Client,
    /// Company record.
    Company,
}

impl EntityKind {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Task => "task",
            Self::Client => "client",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable request errors collected into the failure envelope.
///
/// All three recoverable classes share this type: structural validation
/// violations, per-identifier not-found errors, and duration format errors.
/// The `Display` output is the exact user-visible message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Neither a client nor a company identifier was provided.
    #[error("Missing client and company id")]
    MissingClientAndCompany,

    /// Both a client and a company identifier were provided.
    #[error("You should provide either company or client")]
    ClientAndCompanyBothSet,

    /// A duration string did not match `<int>h<int>m`.
    #[error("The provided duration does not match the desired format")]
    DurationFormat,

    /// A referenced entity does not exist in the store.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of the missing entity.
        kind: EntityKind,
        /// Requested identifier.
        id: i64,
    },
}

impl ValidationError {
    /// Not-found error for a project reference.
    #[must_use]
    pub const fn project_not_found(id: ProjectId) -> Self {
        Self::NotFound {
            kind: EntityKind::Project,
            id: id.value(),
        }
    }

    /// Not-found error for a task reference.
    #[must_use]
    pub const fn task_not_found(id: TaskId) -> Self {
        Self::NotFound {
            kind: EntityKind::Task,
            id: id.value(),
        }
    }

    /// Not-found error for a client reference.
    #[must_use]
    pub const fn client_not_found(id: ClientId) -> Self {
        Self::NotFound {
            kind: EntityKind::Client,
            id: id.value(),
        }
    }

    /// Not-found error for a company reference.
    #[must_use]
    pub const fn company_not_found(id: CompanyId) -> Self {
        Self::NotFound {
            kind: EntityKind::Company,
            id: id.value(),
        }
    }
}

/// Error returned while parsing a duration string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("The provided duration does not match the desired format")]
pub struct DurationFormatError(pub String);

impl From<DurationFormatError> for ValidationError {
    fn from(_: DurationFormatError) -> Self {
        Self::DurationFormat
    }
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
