use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseBackend, MockDatabase, MockExecResult, Set};

use quill_core::domain::{NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

use super::entity::post;
use super::{DatabaseConfig, SeaOrmPostRepository, connect, ensure_schema};

fn at(hour: u32, millis: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
        + chrono::Duration::milliseconds(i64::from(millis))
}

async fn sqlite_repo() -> SeaOrmPostRepository {
    // A single pooled connection, so every query sees the same in-memory database.
    let db = connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    })
    .await
    .unwrap();
    ensure_schema(&db).await.unwrap();
    SeaOrmPostRepository::new(db)
}

#[tokio::test]
async fn test_find_post_by_id() {
    let now = Post::timestamp_now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: 1,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            created_at: now,
        }]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 1);
    assert_eq!(post.created_at, now);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let err = BaseRepository::<Post, i32>::delete(&repo, 42)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_list_keeps_store_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post::Model {
                id: 2,
                title: "Newer".to_owned(),
                content: "b".to_owned(),
                created_at: at(11, 0),
            },
            post::Model {
                id: 1,
                title: "Older".to_owned(),
                content: "a".to_owned(),
                created_at: at(10, 0),
            },
        ]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let posts = repo.list().await.unwrap();

    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_sqlite_create_get_delete() {
    let repo = sqlite_repo().await;
    let before = Post::timestamp_now();

    let created = repo
        .create(NewPost::new("Hello", "World").unwrap())
        .await
        .unwrap();
    assert!(created.id > 0);
    assert!(created.created_at >= before);

    let fetched: Post = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    BaseRepository::<Post, i32>::delete(&repo, created.id)
        .await
        .unwrap();
    let gone: Option<Post> = repo.find_by_id(created.id).await.unwrap();
    assert!(gone.is_none());

    let again = BaseRepository::<Post, i32>::delete(&repo, created.id).await;
    assert!(matches!(again, Err(RepoError::NotFound)));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_ids_are_not_reused() {
    let repo = sqlite_repo().await;

    let first = repo.create(NewPost::new("a", "a").unwrap()).await.unwrap();
    BaseRepository::<Post, i32>::delete(&repo, first.id)
        .await
        .unwrap();
    let second = repo.create(NewPost::new("b", "b").unwrap()).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_sqlite_list_orders_by_created_at_then_id() {
    let repo = sqlite_repo().await;

    // Inserted out of chronological order; ids 1..=4.
    for (title, created_at) in [
        ("middle", at(10, 500)),
        ("oldest", at(9, 250)),
        ("newest-a", at(11, 750)),
        ("newest-b", at(11, 750)),
    ] {
        post::ActiveModel {
            title: Set(title.to_owned()),
            content: Set("body".to_owned()),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(&repo.db)
        .await
        .unwrap();
    }

    let titles: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["newest-b", "newest-a", "middle", "oldest"]);
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let repo = sqlite_repo().await;
    repo.create(NewPost::new("kept", "body").unwrap())
        .await
        .unwrap();

    ensure_schema(&repo.db).await.unwrap();

    assert_eq!(repo.list().await.unwrap().len(), 1);
    repo.ping().await.unwrap();
}
