//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostStore;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    /// Which backend `posts` is running on, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state, falling back to memory when no database is reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let repo = Arc::new(PostgresPostRepository::new(connections.main));
                        tracing::info!("Application state initialized (postgres)");
                        return Self::with_repository(repo, "postgres");
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
        }

        tracing::info!("Application state initialized (memory)");
        Self::in_memory()
    }

    /// State backed by a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), "memory")
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>, storage: &'static str) -> Self {
        Self {
            posts: PostStore::new(repo),
            storage,
        }
    }
}
