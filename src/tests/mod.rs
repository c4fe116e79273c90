//! Unit and service-level tests.

mod duration_tests;
mod summary_tests;
mod task_service_tests;
mod wire_tests;
