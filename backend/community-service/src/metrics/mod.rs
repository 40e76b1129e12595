//! Prometheus metrics for community-service.
//!
//! Exposes vote, feed and submission collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use prometheus::{Encoder, TextEncoder};

pub mod community;

pub use community::{
    COMMENTS_CREATED_TOTAL, FEED_QUERIES_TOTAL, POSTS_CREATED_TOTAL, SUBMISSIONS_REJECTED_TOTAL,
    VOTES_TOTAL,
};

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
