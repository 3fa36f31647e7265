//! Storage layer for studymate
//!
//! Persists study sessions per user. PostgreSQL is the production backend;
//! the in-memory backend serves local runs without a database and tests.

mod backend;
mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::StudySessionStore;
