/// Feed service - derives feed pages and keeps per-viewer feed sessions
use crate::error::{AppError, Result};
use crate::metrics;
use crate::services::store::CommunityStore;
use chrono::Utc;
use dashmap::DashMap;
use feed_core::composer::hashtag_name;
use feed_core::feed::build_page;
use feed_core::{FeedPage, FeedQuery, FeedSession, FeedTab, ReferenceWindow};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// A session together with the page it currently renders
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session: FeedQuery,
    pub feed: FeedPage,
}

pub struct FeedService {
    store: Arc<CommunityStore>,
    /// Keyed by the caller-supplied viewer header and never evicted; sized
    /// for a demo audience, not for untrusted traffic.
    sessions: DashMap<String, FeedSession>,
    window: ReferenceWindow,
    track_hashtag_searches: bool,
}

impl FeedService {
    pub fn new(
        store: Arc<CommunityStore>,
        window: ReferenceWindow,
        track_hashtag_searches: bool,
    ) -> Self {
        Self {
            store,
            sessions: DashMap::new(),
            window,
            track_hashtag_searches,
        }
    }

    /// Stateless page derivation
    pub fn query(&self, query: &FeedQuery) -> FeedPage {
        let page = build_page(&self.store.posts(), query, &self.window);
        metrics::FEED_QUERIES_TOTAL
            .with_label_values(&[&query.tab.to_string()])
            .inc();
        debug!(
            tab = %query.tab,
            page = query.page,
            filtered = page.filtered_count,
            returned = page.posts.len(),
            "feed page derived"
        );
        page
    }

    pub fn session(&self, viewer: &str) -> FeedSession {
        self.sessions
            .get(viewer)
            .map(|s| s.value().clone())
            .unwrap_or_default()
    }

    pub fn view(&self, viewer: &str) -> SessionView {
        let session = self.session(viewer);
        let feed = self.query(session.query());
        SessionView {
            session: session.query().clone(),
            feed,
        }
    }

    fn update<F>(&self, viewer: &str, f: F) -> SessionView
    where
        F: FnOnce(&mut FeedSession),
    {
        {
            let mut session = self.sessions.entry(viewer.to_string()).or_default();
            f(session.value_mut());
        }
        self.view(viewer)
    }

    pub fn set_tab(&self, viewer: &str, tab: FeedTab) -> SessionView {
        debug!(viewer, %tab, "tab changed");
        self.update(viewer, |s| s.set_tab(tab))
    }

    pub fn select_community(&self, viewer: &str, community_id: Option<String>) -> Result<SessionView> {
        if let Some(id) = &community_id {
            if !self.store.has_community(id) {
                return Err(AppError::NotFound(format!("community {}", id)));
            }
        }
        debug!(viewer, community = ?community_id, "community filter changed");
        Ok(self.update(viewer, |s| s.select_community(community_id)))
    }

    pub fn toggle_hashtag(&self, viewer: &str, name: &str) -> Result<SessionView> {
        let name = hashtag_name(name);
        if name.is_empty() {
            return Err(AppError::Validation("hashtag must not be empty".to_string()));
        }

        let mut activated = false;
        let view = self.update(viewer, |s| activated = s.toggle_hashtag(name));

        if activated && self.track_hashtag_searches {
            self.store.record_hashtag_search(name, Utc::now());
            info!(hashtag = name, "hashtag search recorded");
        }
        debug!(viewer, hashtag = name, activated, "hashtag filter toggled");
        Ok(view)
    }

    pub fn clear_hashtags(&self, viewer: &str) -> SessionView {
        self.update(viewer, |s| s.clear_hashtags())
    }

    pub fn set_search(&self, viewer: &str, text: &str) -> SessionView {
        debug!(viewer, query = text, "search changed");
        self.update(viewer, |s| s.set_search(text))
    }

    pub fn go_to_page(&self, viewer: &str, page: usize) -> SessionView {
        self.update(viewer, |s| s.go_to_page(page))
    }

    pub fn reset_page(&self, viewer: &str) {
        if let Some(mut session) = self.sessions.get_mut(viewer) {
            session.reset_page();
        }
    }
}
