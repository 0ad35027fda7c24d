//! In-memory post store - used when no database is configured and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostId};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

struct Store {
    posts: BTreeMap<PostId, Post>,
    last_id: PostId,
}

/// In-memory post store using a BTreeMap behind an async RwLock.
///
/// Ids keep increasing after deletes, matching an auto-increment column.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;

        // BTreeMap iterates in ascending id order; reversing gives id descending
        // for equal timestamps once the stable sort below runs.
        let mut posts: Vec<Post> = store.posts.values().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts)
    }

    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("post id space exhausted".to_string()))?;
        store.last_id = id;

        let post = draft.into_post(id, Post::timestamp_now());
        store.posts.insert(id, post.clone());

        Ok(post)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> NewPost {
        NewPost::new(title, "content").unwrap()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();

        let a = repo.create(draft("a")).await.unwrap();
        let b = repo.create(draft("b")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(b.created_at >= a.created_at);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        for title in ["A", "B", "C"] {
            repo.create(draft(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn delete_then_get_is_gone() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("a")).await.unwrap();

        repo.delete(post.id).await.unwrap();

        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
        assert!(matches!(repo.delete(post.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(draft("a")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(draft("b")).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }
}
