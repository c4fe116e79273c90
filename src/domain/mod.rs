//! Domain model for project and task tracking.
//!
//! The domain models projects sponsored by exactly one client or company,
//! tasks with parsed durations and lifecycle statuses, and read-time
//! aggregation of a project's total duration and dominant status, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod client;
mod company;
mod duration;
mod error;
mod ids;
mod project;
mod status;
mod summary;
mod task;

pub use client::Client;
pub use company::Company;
pub use duration::TaskDuration;
pub use error::{DurationFormatError, EntityKind, ParseTaskStatusError, ValidationError};
pub use ids::{ClientId, CompanyId, ProjectId, TaskId};
pub use project::{PersistedProjectData, Project, ProjectSponsor};
pub use status::TaskStatus;
pub use summary::{dominant_status, total_duration};
pub use task::{PersistedTaskData, Task};
