/// Post handlers - HTTP endpoints for post operations
use crate::error::{AppError, Result};
use crate::middleware::Viewer;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use feed_core::composer::PostDraft;

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = "Posts",
    params(("X-Viewer-Id" = Option<String>, Header, description = "Viewer identity, defaults to anonymous")),
    responses(
        (status = 201, description = "Post created at the front of the feed"),
        (status = 400, description = "Blank title or content, or unknown community"),
        (status = 409, description = "A submission from this viewer is still pending")
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    viewer: Viewer,
    req: web::Json<PostDraft>,
) -> Result<HttpResponse> {
    let post = state.posts.create_post(viewer.as_str(), &req).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found"),
        (status = 404, description = "Unknown post")
    )
)]
pub async fn get_post(state: web::Data<AppState>, post_id: web::Path<String>) -> Result<HttpResponse> {
    let post = state
        .posts
        .get_post(&post_id)
        .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post with its comments
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post, thread and votes removed"),
        (status = 404, description = "Unknown post")
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    state.posts.delete_post(&post_id)?;
    Ok(HttpResponse::NoContent().finish())
}
