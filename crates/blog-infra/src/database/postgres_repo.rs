//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError> {
        if patch.is_empty() {
            let exists = PostEntity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(map_db_err)?;
            return exists.map(|_| ()).ok_or(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Updating post");

        let mut query = PostEntity::update_many().filter(post::Column::Id.eq(id));
        if let Some(title) = patch.title {
            query = query.col_expr(post::Column::Title, Expr::value(title));
        }
        if let Some(content) = patch.content {
            query = query.col_expr(post::Column::Content, Expr::value(content));
        }
        if let Some(author) = patch.author {
            query = query
                .col_expr(post::Column::AuthorFirstName, Expr::value(author.first_name))
                .col_expr(post::Column::AuthorLastName, Expr::value(author.last_name));
        }

        let result = query.exec(&self.db).await.map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
