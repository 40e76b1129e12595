use actix_web::{web, HttpResponse};
use feed_core::composer::hashtag_name;
use feed_core::{FeedQuery, FeedTab};
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::error::Result;
use crate::middleware::Viewer;
use crate::state::AppState;

/// Query string for the stateless feed endpoint.
///
/// `hashtags` is a comma-separated list; one leading `#` on each name is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQueryParams {
    pub tab: Option<String>,
    pub community: Option<String>,
    pub hashtags: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
}

impl FeedQueryParams {
    pub(crate) fn into_query(self) -> Result<FeedQuery> {
        let tab = match self.tab.as_deref() {
            Some(raw) => raw.parse::<FeedTab>()?,
            None => FeedTab::default(),
        };

        let mut query = FeedQuery {
            tab,
            page: self.page.unwrap_or(1),
            ..FeedQuery::default()
        };
        query.filter.community_id = self
            .community
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        query.filter.hashtags = self
            .hashtags
            .as_deref()
            .map(parse_hashtag_list)
            .unwrap_or_default();
        query.filter.search = self.q.unwrap_or_default().trim().to_string();

        Ok(query)
    }
}

fn parse_hashtag_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(hashtag_name)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Derive one feed page from explicit parameters
#[utoipa::path(
    get,
    path = "/api/v1/feed",
    tag = "Feed",
    params(
        ("tab" = Option<String>, Query, description = "new, today or best"),
        ("community" = Option<String>, Query, description = "Community id"),
        ("hashtags" = Option<String>, Query, description = "Comma-separated hashtag names"),
        ("q" = Option<String>, Query, description = "Case-insensitive title/content search"),
        ("page" = Option<usize>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Feed page with actual and display page counts"),
        (status = 400, description = "Unknown tab")
    )
)]
pub async fn get_feed(
    state: web::Data<AppState>,
    params: web::Query<FeedQueryParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query()?;
    Ok(HttpResponse::Ok().json(state.feed.query(&query)))
}

/// Current feed session of the calling viewer
#[utoipa::path(
    get,
    path = "/api/v1/feed/session",
    tag = "Feed",
    params(("X-Viewer-Id" = Option<String>, Header, description = "Viewer identity, defaults to anonymous")),
    responses((status = 200, description = "Session state and the page it renders"))
)]
pub async fn get_session(state: web::Data<AppState>, viewer: Viewer) -> HttpResponse {
    HttpResponse::Ok().json(state.feed.view(viewer.as_str()))
}

#[derive(Debug, Deserialize)]
pub struct SetTabRequest {
    pub tab: String,
}

pub async fn set_tab(
    state: web::Data<AppState>,
    viewer: Viewer,
    req: web::Json<SetTabRequest>,
) -> Result<HttpResponse> {
    let tab = req.tab.parse::<FeedTab>()?;
    Ok(HttpResponse::Ok().json(state.feed.set_tab(viewer.as_str(), tab)))
}

#[derive(Debug, Deserialize)]
pub struct SelectCommunityRequest {
    /// `null` clears the community filter
    #[serde(default)]
    pub community_id: Option<String>,
}

pub async fn select_community(
    state: web::Data<AppState>,
    viewer: Viewer,
    req: web::Json<SelectCommunityRequest>,
) -> Result<HttpResponse> {
    let community_id = req
        .into_inner()
        .community_id
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    let view = state.feed.select_community(viewer.as_str(), community_id)?;
    Ok(HttpResponse::Ok().json(view))
}

pub async fn toggle_hashtag(
    state: web::Data<AppState>,
    viewer: Viewer,
    name: web::Path<String>,
) -> Result<HttpResponse> {
    let view = state.feed.toggle_hashtag(viewer.as_str(), &name)?;
    Ok(HttpResponse::Ok().json(view))
}

pub async fn clear_hashtags(state: web::Data<AppState>, viewer: Viewer) -> HttpResponse {
    HttpResponse::Ok().json(state.feed.clear_hashtags(viewer.as_str()))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: String,
}

pub async fn set_search(
    state: web::Data<AppState>,
    viewer: Viewer,
    req: web::Json<SearchRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.feed.set_search(viewer.as_str(), &req.q))
}

#[derive(Debug, Deserialize)]
pub struct GoToPageRequest {
    pub page: usize,
}

pub async fn go_to_page(
    state: web::Data<AppState>,
    viewer: Viewer,
    req: web::Json<GoToPageRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.feed.go_to_page(viewer.as_str(), req.page))
}
