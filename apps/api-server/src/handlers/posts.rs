//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::DomainError;
use quill_core::domain::{NewPost, Post, PostId};
use quill_core::error::RepoError;
use quill_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
    }
}

fn post_not_found(id: PostId) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewPost::new(
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
    )?;
    let post = state.posts.create(draft).await?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(post_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => post_not_found(id),
        other => other.into(),
    })?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// OPTIONS /api/posts, /api/posts/{id}
///
/// The CORS middleware adds the allow headers.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
