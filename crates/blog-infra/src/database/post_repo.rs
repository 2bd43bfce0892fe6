//! SeaORM post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::base::{SeaOrmBaseRepository, query_error, write_error};
use super::entity::post::{self, Entity as PostEntity};

/// SeaORM post repository; works against any backend the connection speaks.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        tracing::debug!(slug = %new_post.slug, "Inserting post");

        let model = post::ActiveModel::from(new_post)
            .insert(&*self.db)
            .await
            .map_err(write_error)?;

        Ok(model.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();
        if let Some(category) = category {
            query = query.filter(post::Column::Category.eq(category));
        }

        let result = query
            .order_by_asc(post::Column::Id)
            .all(&*self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn latest_per_category(&self) -> Result<Vec<Post>, RepoError> {
        let categories: Vec<String> = PostEntity::find()
            .select_only()
            .column(post::Column::Category)
            .distinct()
            .order_by_asc(post::Column::Category)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(query_error)?;

        let mut latest = Vec::with_capacity(categories.len());
        for category in categories {
            // Same-instant posts resolve to the one inserted last.
            let newest = PostEntity::find()
                .filter(post::Column::Category.eq(category.as_str()))
                .order_by_desc(post::Column::DateCreated)
                .order_by_desc(post::Column::Id)
                .one(&*self.db)
                .await
                .map_err(query_error)?;

            if let Some(model) = newest {
                latest.push(model.into());
            }
        }

        Ok(latest)
    }
}
