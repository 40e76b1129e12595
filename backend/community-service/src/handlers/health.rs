/// Health endpoints for container probes
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use chrono::Utc;

pub async fn health_summary() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "community-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

/// Ready once the store has been seeded with reference data
pub async fn readiness_check(state: web::Data<AppState>) -> HttpResponse {
    let communities = state.store.communities().len();
    let ready = communities > 0;
    let body = serde_json::json!({
        "ready": ready,
        "posts": state.store.posts().len(),
        "communities": communities,
        "timestamp": Utc::now().to_rfc3339(),
    });

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
