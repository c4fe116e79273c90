//! Application services: request DTOs, validation, and orchestration.

mod board;
mod envelope;
mod requests;
pub mod validation;
mod views;

pub use board::{BoardService, ServiceError, ServiceResult};
pub use envelope::Envelope;
pub use requests::{ProjectRequest, TaskRequest};
pub use views::ProjectView;
