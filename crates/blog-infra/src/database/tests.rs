use std::sync::Arc;

use chrono::{TimeDelta, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseBackend, DbConn, MockDatabase, MockExecResult};

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use super::connections::{DatabaseConfig, connect};
use super::entity::post;
use super::post_repo::SeaOrmPostRepository;

async fn migrated_sqlite() -> DbConn {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..Default::default()
    };
    let db = connect(&config).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn draft(title: &str, category: &str) -> NewPost {
    NewPost::new(
        title.to_string(),
        category.to_string(),
        format!("Body of {title}"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_find_post_by_slug_with_mock() {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![post::Model {
            id: 3,
            title: "Hello, World!".to_owned(),
            slug: "hello-world".to_owned(),
            category: "life".to_owned(),
            content: "Content".to_owned(),
            date_created: created,
        }]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let post = repo.find_by_slug("hello-world").await.unwrap().unwrap();

    assert_eq!(post.id, 3);
    assert_eq!(post.title, "Hello, World!");
    assert_eq!(post.date_created, created);
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found_with_mock() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result = BaseRepository::<Post, i32>::delete(&repo, 42).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_insert_assigns_id_and_keeps_fields() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);

    let saved = repo.insert(draft("Hello, World!", "life")).await.unwrap();

    assert!(saved.id > 0);
    assert_eq!(saved.slug, "hello-world");

    let by_id: Option<Post> = repo.find_by_id(saved.id).await.unwrap();
    assert_eq!(by_id.as_ref().map(|p| p.slug.as_str()), Some("hello-world"));

    let by_slug = repo.find_by_slug("hello-world").await.unwrap();
    assert_eq!(by_slug.map(|p| p.id), Some(saved.id));
}

#[tokio::test]
async fn test_duplicate_slug_is_a_constraint_violation() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);

    repo.insert(draft("Hello, World!", "life")).await.unwrap();
    let result = repo.insert(draft("hello world", "tech")).await;

    assert!(matches!(result, Err(RepoError::Constraint(_))));
    assert_eq!(repo.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_filters_by_exact_category() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);

    repo.insert(draft("One", "life")).await.unwrap();
    repo.insert(draft("Two", "tech")).await.unwrap();
    repo.insert(draft("Three", "life")).await.unwrap();

    let all = repo.list(None).await.unwrap();
    assert_eq!(
        all.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
        vec!["One", "Two", "Three"]
    );

    let life = repo.list(Some("life")).await.unwrap();
    assert_eq!(life.len(), 2);
    assert!(life.iter().all(|p| p.category == "life"));

    assert!(repo.list(Some("Life")).await.unwrap().is_empty());
    assert!(repo.list(Some("travel")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_fields_but_not_creation_time() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);
    let created = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let saved = repo
        .insert(draft("Original", "life").created_at(created))
        .await
        .unwrap();

    let mut post = saved.clone();
    post.revise("Renamed Post".into(), "tech".into(), "new body".into())
        .unwrap();
    let updated = repo.update(post).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.slug, "renamed-post");
    assert_eq!(updated.category, "tech");
    assert_eq!(updated.date_created, created);
    assert!(repo.find_by_slug("original").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);
    let mut ghost = repo.insert(draft("Ghost", "life")).await.unwrap();
    BaseRepository::<Post, i32>::delete(&repo, ghost.id)
        .await
        .unwrap();

    ghost.content = "boo".to_string();
    let result = repo.update(ghost).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_removes_post() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);
    let saved = repo.insert(draft("Short Lived", "life")).await.unwrap();

    BaseRepository::<Post, i32>::delete(&repo, saved.id)
        .await
        .unwrap();

    let found: Option<Post> = repo.find_by_id(saved.id).await.unwrap();
    assert!(found.is_none());
    let again = BaseRepository::<Post, i32>::delete(&repo, saved.id).await;
    assert!(matches!(again, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_latest_per_category_picks_newest_in_each() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    repo.insert(draft("Tech Newest", "tech").created_at(base + TimeDelta::days(5)))
        .await
        .unwrap();
    repo.insert(draft("Tech Old", "tech").created_at(base))
        .await
        .unwrap();
    repo.insert(draft("Life Old", "life").created_at(base + TimeDelta::days(1)))
        .await
        .unwrap();
    repo.insert(draft("Life Newest", "life").created_at(base + TimeDelta::days(2)))
        .await
        .unwrap();
    repo.insert(draft("Only Travel", "travel").created_at(base))
        .await
        .unwrap();

    let latest = repo.latest_per_category().await.unwrap();

    let pairs: Vec<(&str, &str)> = latest
        .iter()
        .map(|p| (p.category.as_str(), p.title.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("life", "Life Newest"),
            ("tech", "Tech Newest"),
            ("travel", "Only Travel"),
        ]
    );
}

#[tokio::test]
async fn test_latest_per_category_breaks_ties_by_insertion() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);
    let instant = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    repo.insert(draft("First", "news").created_at(instant))
        .await
        .unwrap();
    repo.insert(draft("Second", "news").created_at(instant))
        .await
        .unwrap();

    let latest = repo.latest_per_category().await.unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].title, "Second");
}

#[tokio::test]
async fn test_latest_per_category_on_empty_store() {
    let repo = SeaOrmPostRepository::new(migrated_sqlite().await);
    assert!(repo.latest_per_category().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_repositories_share_one_connection() {
    let db = Arc::new(migrated_sqlite().await);
    let writer = SeaOrmPostRepository::new(Arc::clone(&db));
    let reader = SeaOrmPostRepository::new(Arc::clone(&db));

    writer.insert(draft("Shared Pool", "infra")).await.unwrap();

    let found = reader.find_by_slug("shared-pool").await.unwrap();
    assert_eq!(found.map(|p| p.category), Some("infra".to_string()));
    assert!(db.ping().await.is_ok());
}
