//! Taskboard: project and task tracking backend core.
//!
//! This crate provides the service core of a CRUD backend for projects,
//! tasks, clients, and companies: request validation, foreign-key resolution
//! with partial-failure aggregation, duration parsing and formatting, and
//! derived project status computation.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Request orchestration and the uniform response envelope
//!
//! # Modules
//!
//! - [`domain`]: Entities, identifiers, duration codec, status aggregation
//! - [`ports`]: Repository contracts
//! - [`adapters`]: Repository implementations
//! - [`services`]: Request validation and orchestration

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
