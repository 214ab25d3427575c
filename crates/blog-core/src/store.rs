//! Post store - validation and identifier assignment on top of a repository.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, NewPost, PostPatch};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY: &str = "BlogPost";

/// Resource store for blog posts.
///
/// Holds no state of its own; all records live in the repository.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new post, returning it with its assigned id.
    pub async fn create(&self, input: NewPost) -> Result<BlogPost, DomainError> {
        validate_title(&input.title)?;

        let post = BlogPost::new(input);
        let saved = self.repo.insert(post).await?;
        tracing::info!(post_id = %saved.id, "Blog post created");
        Ok(saved)
    }

    pub async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let posts = self.repo.list().await?;
        tracing::debug!(count = posts.len(), "Listed blog posts");
        Ok(posts)
    }

    pub async fn get(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        tracing::debug!(post_id = %id, "Fetching blog post");
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::from_repo(e, id))?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    /// Merge the provided fields into an existing post.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<(), DomainError> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }

        self.repo
            .update(id, patch)
            .await
            .map_err(|e| DomainError::from_repo(e, id))?;
        tracing::info!(post_id = %id, "Blog post updated");
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, id))?;
        tracing::info!(post_id = %id, "Blog post deleted");
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::Author;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;

    #[derive(Default)]
    struct MapRepository {
        posts: Mutex<HashMap<Uuid, BlogPost>>,
    }

    #[async_trait]
    impl BaseRepository<BlogPost, Uuid> for MapRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
            Ok(self.posts.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
            self.posts.lock().unwrap().insert(post.id, post.clone());
            Ok(post)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.posts
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl PostRepository for MapRepository {
        async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
            Ok(self.posts.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError> {
            let mut posts = self.posts.lock().unwrap();
            let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
            post.apply(patch);
            Ok(())
        }
    }

    fn store() -> PostStore {
        PostStore::new(Arc::new(MapRepository::default()))
    }

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "Eiusmod aliquip labore.".to_string(),
            author: Author::new("Grace", "Hopper"),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_input() {
        let store = store();
        let input = new_post("In nostrud qui labore veniam.");

        let created = store.create(input.clone()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.title, input.title);
        assert_eq!(fetched.content, input.content);
        assert_eq!(fetched.author, input.author);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let store = store();
        let err = store.create(new_post("   ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_empty_content() {
        let store = store();
        let mut input = new_post("Title");
        input.content.clear();
        let created = store.create(input).await.unwrap();
        assert_eq!(created.content, "");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let err = store().get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let store = store();
        let created = store.create(new_post("Old")).await.unwrap();

        store
            .update(
                created.id,
                PostPatch {
                    title: Some("New".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = store.get(created.id).await.unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.author, created.author);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title_without_writing() {
        let store = store();
        let created = store.create(new_post("Keep me")).await.unwrap();

        let err = store
            .update(
                created.id,
                PostPatch {
                    title: Some(String::new()),
                    content: Some("changed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let err = store()
            .update(Uuid::new_v4(), PostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = store();
        let created = store.create(new_post("Short lived")).await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get(created.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(matches!(
            store.delete(created.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_list_tracks_creates_and_deletes() {
        let store = store();
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(store.create(new_post(&format!("Post {i}"))).await.unwrap().id);
        }
        for id in ids.iter().take(3) {
            store.delete(*id).await.unwrap();
        }
        assert_eq!(store.list().await.unwrap().len(), 7);
    }
}
