/// Reference data handlers - communities and trending hashtags
use crate::state::AppState;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/v1/communities",
    tag = "Reference",
    responses((status = 200, description = "All communities"))
)]
pub async fn list_communities(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.communities())
}

#[utoipa::path(
    get,
    path = "/api/v1/hashtags",
    tag = "Reference",
    responses((status = 200, description = "Trending hashtags with search counts"))
)]
pub async fn list_hashtags(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.hashtags())
}
