/// Comment handlers - HTTP endpoints for comment threads
use crate::error::{AppError, Result};
use crate::middleware::Viewer;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}

/// Create a new comment
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "Comments",
    request_body = CreateCommentRequest,
    params(
        ("post_id" = String, Path, description = "Post id"),
        ("X-Viewer-Id" = Option<String>, Header, description = "Viewer identity, defaults to anonymous")
    ),
    responses(
        (status = 201, description = "Comment appended to the thread"),
        (status = 400, description = "Blank comment"),
        (status = 404, description = "Unknown post"),
        (status = 409, description = "A comment from this viewer is still pending")
    )
)]
pub async fn create_comment(
    state: web::Data<AppState>,
    viewer: Viewer,
    post_id: web::Path<String>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = state
        .comments
        .create_comment(viewer.as_str(), &post_id, &req.content)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Get comments for a post
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "Comments",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments in append order"),
        (status = 404, description = "Unknown post")
    )
)]
pub async fn get_post_comments(
    state: web::Data<AppState>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let comments = state.comments.get_post_comments(&post_id)?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Get a single comment
#[utoipa::path(
    get,
    path = "/api/v1/comments/{comment_id}",
    tag = "Comments",
    params(("comment_id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment found"),
        (status = 404, description = "Unknown comment")
    )
)]
pub async fn get_comment(
    state: web::Data<AppState>,
    comment_id: web::Path<String>,
) -> Result<HttpResponse> {
    match state.comments.get_comment(&comment_id) {
        Some(comment) => Ok(HttpResponse::Ok().json(comment)),
        None => Err(AppError::NotFound(format!("comment {}", comment_id))),
    }
}
