//! Database connection management and the SQL-backed post store.

mod connections;
mod post_repo;
mod schema;
mod sea_orm_base;

pub mod entity;

pub use connections::{DatabaseConfig, connect, normalize_url};
pub use post_repo::SeaOrmPostRepository;
pub use schema::ensure_schema;
pub use sea_orm::DbErr;
pub use sea_orm_base::SeaOrmBaseRepository;

#[cfg(test)]
mod tests;
