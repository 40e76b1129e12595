use crate::error::{AppError, Result};
use crate::handlers::{comments, feed, posts, reference, votes};
use actix_web::HttpResponse;
use utoipa::OpenApi;

/// OpenAPI document for the feed, post, comment, vote and reference endpoints
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Community Service API",
        description = "Community feed, comment threads, votes and post composer endpoints."
    ),
    paths(
        feed::get_feed,
        feed::get_session,
        posts::create_post,
        posts::get_post,
        posts::delete_post,
        comments::get_post_comments,
        comments::create_comment,
        comments::get_comment,
        votes::vote_post,
        votes::get_post_vote,
        votes::vote_comment,
        votes::get_comment_vote,
        reference::list_communities,
        reference::list_hashtags
    ),
    components(schemas(comments::CreateCommentRequest, votes::VoteRequest)),
    tags(
        (name = "Feed", description = "Feed pages and per-viewer feed sessions"),
        (name = "Posts", description = "Post composer and post lookup"),
        (name = "Comments", description = "Comment threads"),
        (name = "Votes", description = "Up/down votes on posts and comments"),
        (name = "Reference", description = "Communities and trending hashtags")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Result<HttpResponse> {
    let body = ApiDoc::openapi().to_json().map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        AppError::Internal("OpenAPI serialization error".to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}
