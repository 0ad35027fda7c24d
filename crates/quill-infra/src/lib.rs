//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! - [`database`] - SeaORM-backed post store for PostgreSQL and SQLite,
//!   connection pooling and lazy table creation.
//! - [`memory`] - process-local post store, for running without a database
//!   and for tests.

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, SeaOrmPostRepository, connect, ensure_schema, normalize_url};
pub use memory::InMemoryPostRepository;
