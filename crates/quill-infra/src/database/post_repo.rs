//! SQL-backed post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};

use quill_core::domain::{NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::sea_orm_base::{SeaOrmBaseRepository, repo_error};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let (title, content) = draft.into_parts();

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(title),
            content: Set(content),
            created_at: Set(Post::timestamp_now()),
        }
        .insert(&self.db)
        .await
        .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, "Post inserted");
        Ok(model.into())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.db
            .ping()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
