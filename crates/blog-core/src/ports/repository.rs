use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist every field of an existing entity.
    ///
    /// Fails with [`RepoError::NotFound`] when no row has the entity's ID.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Store a new post; the store assigns its ID.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// All posts in storage order, optionally restricted to one exact category.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Post>, RepoError>;

    /// The most recently created post of every category, ordered by category.
    async fn latest_per_category(&self) -> Result<Vec<Post>, RepoError>;
}
