//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;
use quill_infra::database::{DbErr, SeaOrmPostRepository, connect, ensure_schema};

use crate::config::StoreConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Open the configured store and make sure the `posts` table exists.
    pub async fn init(store: &StoreConfig) -> Result<Self, DbErr> {
        let posts: Arc<dyn PostRepository> = match store {
            StoreConfig::Database(config) => {
                let conn = connect(config).await?;
                ensure_schema(&conn).await?;
                Arc::new(SeaOrmPostRepository::new(conn))
            }
            StoreConfig::Memory => {
                tracing::warn!("DATABASE_URL=memory. Posts will be lost on restart.");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self::new(posts))
    }
}
