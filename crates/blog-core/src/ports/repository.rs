use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostPatch};
use crate::error::RepoError;

/// Generic repository trait defining the per-record operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if it does not exist.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
///
/// Every method touches at most one record, so implementations only need
/// per-record atomicity from their backend.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, ordered by creation time then id.
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Merge `patch` into the stored post. `RepoError::NotFound` if absent.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError>;
}
