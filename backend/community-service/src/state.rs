use crate::config::Config;
use crate::services::{
    CommentService, CommunityStore, FeedService, InFlight, PostService, VoteService,
};
use feed_core::ids::IdGenerator;
use std::sync::Arc;

/// Shared handler state
///
/// All services see the same store and the same in-flight guard.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CommunityStore>,
    pub feed: Arc<FeedService>,
    pub votes: Arc<VoteService>,
    pub comments: Arc<CommentService>,
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Seeded state wired from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_store(config, Arc::new(CommunityStore::seeded()))
    }

    pub fn with_store(config: &Config, store: Arc<CommunityStore>) -> Self {
        let inflight = InFlight::new();
        let ids: Arc<dyn IdGenerator> = Arc::from(config.feed.id_strategy.generator());

        let feed = Arc::new(FeedService::new(
            store.clone(),
            config.feed.reference_window,
            config.feed.track_hashtag_searches,
        ));
        let votes = Arc::new(VoteService::new(
            store.clone(),
            inflight.clone(),
            config.latency.vote(),
        ));
        let comments = Arc::new(CommentService::new(
            store.clone(),
            inflight.clone(),
            ids.clone(),
            config.latency.submit(),
        ));
        let posts = Arc::new(PostService::new(
            store.clone(),
            feed.clone(),
            votes.clone(),
            inflight,
            ids,
            config.latency.submit(),
        ));

        Self {
            store,
            feed,
            votes,
            comments,
            posts,
        }
    }
}
