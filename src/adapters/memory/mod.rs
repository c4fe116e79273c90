//! In-memory repository adapter.

mod store;

pub use store::InMemoryStore;
