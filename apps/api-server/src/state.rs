//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{PasswordService, PostRepository, UserRepository};
use scribe_infra::{
    Argon2PasswordService, DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
use scribe_infra::{PostgresPostRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub users: Arc<dyn UserRepository>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            posts,
            users,
            passwords,
        }
    }

    /// State backed by the in-memory store.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2PasswordService::new()),
        )
    }

    /// Build the application state for the configured store.
    ///
    /// A configured database that cannot be reached is a startup error.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        #[cfg(feature = "postgres")]
        let state = {
            let conn = scribe_infra::database::connect(config).await?;
            Self::new(
                Arc::new(PostgresPostRepository::new(conn.clone())),
                Arc::new(PostgresUserRepository::new(conn)),
                Arc::new(Argon2PasswordService::new()),
            )
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = config;
            tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }
}
