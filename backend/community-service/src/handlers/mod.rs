/// HTTP handlers for community endpoints
///
/// This module contains handlers for:
/// - Feed: stateless page derivation and per-viewer feed sessions
/// - Posts and comments: composer submissions and thread reads
/// - Votes: up/down votes on posts and comments
/// - Reference data: communities and hashtags
/// - Health probes
pub mod comments;
pub mod feed;
pub mod health;
pub mod posts;
pub mod reference;
pub mod votes;

use actix_web::web;

/// Register health, metrics, OpenAPI and every `/api/v1` route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_summary))
        .route("/metrics", web::get().to(crate::metrics::serve_metrics));

    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health::health_summary))
            .route("/health/live", web::get().to(health::liveness_check))
            .route("/health/ready", web::get().to(health::readiness_check))
            .route("/openapi.json", web::get().to(crate::openapi::openapi_json))
            .service(
                web::scope("/feed")
                    .route("", web::get().to(feed::get_feed))
                    .service(
                        web::scope("/session")
                            .route("", web::get().to(feed::get_session))
                            .route("/tab", web::put().to(feed::set_tab))
                            .route("/community", web::put().to(feed::select_community))
                            .route("/hashtags", web::delete().to(feed::clear_hashtags))
                            .route(
                                "/hashtags/{name}/toggle",
                                web::post().to(feed::toggle_hashtag),
                            )
                            .route("/search", web::put().to(feed::set_search))
                            .route("/page", web::put().to(feed::go_to_page)),
                    ),
            )
            .service(
                web::scope("/posts")
                    .service(web::resource("").route(web::post().to(posts::create_post)))
                    .service(
                        web::resource("/{post_id}")
                            .route(web::get().to(posts::get_post))
                            .route(web::delete().to(posts::delete_post)),
                    )
                    .service(
                        web::resource("/{post_id}/comments")
                            .route(web::get().to(comments::get_post_comments))
                            .route(web::post().to(comments::create_comment)),
                    )
                    .service(
                        web::resource("/{post_id}/vote")
                            .route(web::get().to(votes::get_post_vote))
                            .route(web::post().to(votes::vote_post)),
                    ),
            )
            .service(
                web::scope("/comments")
                    .route("/{comment_id}", web::get().to(comments::get_comment))
                    .service(
                        web::resource("/{comment_id}/vote")
                            .route(web::get().to(votes::get_comment_vote))
                            .route(web::post().to(votes::vote_comment)),
                    ),
            )
            .route("/communities", web::get().to(reference::list_communities))
            .route("/hashtags", web::get().to(reference::list_hashtags)),
    );
}
