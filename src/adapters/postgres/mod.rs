//! `PostgreSQL` repository adapter built on Diesel.

mod models;
mod repository;
mod schema;

pub use repository::{PgPool, PostgresStore};
