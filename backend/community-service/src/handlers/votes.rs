/// Vote handlers - up/down votes on posts and comments
use crate::error::Result;
use crate::middleware::Viewer;
use crate::services::ItemRef;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use feed_core::VoteDirection;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// "up" or "down"
    pub direction: String,
}

async fn cast(state: &AppState, viewer: &Viewer, item: ItemRef, req: &VoteRequest) -> Result<HttpResponse> {
    let direction = req.direction.parse::<VoteDirection>()?;
    let outcome = state.votes.cast(viewer.as_str(), item, direction).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/vote",
    tag = "Votes",
    request_body = VoteRequest,
    params(
        ("post_id" = String, Path, description = "Post id"),
        ("X-Viewer-Id" = Option<String>, Header, description = "Viewer identity, defaults to anonymous")
    ),
    responses(
        (status = 200, description = "Vote outcome; applied is false when a vote is still pending"),
        (status = 400, description = "Unknown direction"),
        (status = 404, description = "Unknown post")
    )
)]
pub async fn vote_post(
    state: web::Data<AppState>,
    viewer: Viewer,
    post_id: web::Path<String>,
    req: web::Json<VoteRequest>,
) -> Result<HttpResponse> {
    cast(&state, &viewer, ItemRef::Post(post_id.into_inner()), &req).await
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{comment_id}/vote",
    tag = "Votes",
    request_body = VoteRequest,
    params(
        ("comment_id" = String, Path, description = "Comment id"),
        ("X-Viewer-Id" = Option<String>, Header, description = "Viewer identity, defaults to anonymous")
    ),
    responses(
        (status = 200, description = "Vote outcome; applied is false when a vote is still pending"),
        (status = 400, description = "Unknown direction"),
        (status = 404, description = "Unknown comment")
    )
)]
pub async fn vote_comment(
    state: web::Data<AppState>,
    viewer: Viewer,
    comment_id: web::Path<String>,
    req: web::Json<VoteRequest>,
) -> Result<HttpResponse> {
    cast(&state, &viewer, ItemRef::Comment(comment_id.into_inner()), &req).await
}

/// The caller's current vote on a post
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/vote",
    tag = "Votes",
    params(
        ("post_id" = String, Path, description = "Post id"),
        ("X-Viewer-Id" = Option<String>, Header, description = "Viewer identity, defaults to anonymous")
    ),
    responses(
        (status = 200, description = "Current count and the viewer's vote"),
        (status = 404, description = "Unknown post")
    )
)]
pub async fn get_post_vote(
    state: web::Data<AppState>,
    viewer: Viewer,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let outcome = state
        .votes
        .snapshot(viewer.as_str(), ItemRef::Post(post_id.into_inner()))?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{comment_id}/vote",
    tag = "Votes",
    params(
        ("comment_id" = String, Path, description = "Comment id"),
        ("X-Viewer-Id" = Option<String>, Header, description = "Viewer identity, defaults to anonymous")
    ),
    responses(
        (status = 200, description = "Current count and the viewer's vote"),
        (status = 404, description = "Unknown comment")
    )
)]
pub async fn get_comment_vote(
    state: web::Data<AppState>,
    viewer: Viewer,
    comment_id: web::Path<String>,
) -> Result<HttpResponse> {
    let outcome = state
        .votes
        .snapshot(viewer.as_str(), ItemRef::Comment(comment_id.into_inner()))?;
    Ok(HttpResponse::Ok().json(outcome))
}
