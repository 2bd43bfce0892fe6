//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{NewPost, Post};
use blog_core::ports::PostRepository;
use blog_shared::MessageResponse;
use blog_shared::dto::{CategoryHighlight, ListPostsQuery, PostPayload, PostResponse};

use crate::middleware::auth::AdminSession;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        slug: post.slug,
        category: post.category,
        content: post.content,
        date_created: post.date_created,
    }
}

/// Reject `slug` when a post other than `owner` already uses it.
async fn ensure_slug_free(
    posts: &dyn PostRepository,
    slug: &str,
    owner: Option<i32>,
) -> AppResult<()> {
    match posts.find_by_slug(slug).await? {
        Some(existing) if Some(existing.id) != owner => Err(DomainError::Duplicate(format!(
            "Slug '{}' is already used by post {}",
            slug, existing.id
        ))
        .into()),
        _ => Ok(()),
    }
}

/// GET /api/blogs?category=...
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list(query.category()).await?;

    Ok(HttpResponse::Ok().json(posts.into_iter().map(post_response).collect::<Vec<_>>()))
}

/// GET /api/blogs/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| DomainError::post_not_found(format!("slug '{}'", slug)))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /api/blogs - admin only
pub async fn create_post(
    _admin: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    let new_post = NewPost::new(payload.title, payload.category, payload.content)?;

    ensure_slug_free(state.posts.as_ref(), &new_post.slug, None).await?;
    let post = state.posts.insert(new_post).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, category = %post.category, "Post created");

    Ok(HttpResponse::Created().json(MessageResponse::new("Blog created").with_slug(post.slug)))
}

/// PUT /api/blogs/{id} - admin only
pub async fn update_post(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let payload = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(format!("id {}", id)))?;

    post.revise(payload.title, payload.category, payload.content)?;
    ensure_slug_free(state.posts.as_ref(), &post.slug, Some(post.id)).await?;
    let post = state.posts.update(post).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, "Post updated");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog updated").with_slug(post.slug)))
}

/// DELETE /api/blogs/{id} - admin only
pub async fn delete_post(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(format!("id {}", id)))?;
    state.posts.delete(post.id).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted")))
}

/// GET /api/blogs/thisweek - newest post of every category
pub async fn latest_per_category(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let highlights: Vec<CategoryHighlight> = state
        .posts
        .latest_per_category()
        .await?
        .into_iter()
        .map(|post| CategoryHighlight {
            link: post.link(),
            category: post.category,
            title: post.title,
            slug: post.slug,
            content: post.content,
        })
        .collect();

    Ok(HttpResponse::Ok().json(highlights))
}
