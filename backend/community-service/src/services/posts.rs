/// Post service - handles post creation, retrieval, and removal
use crate::error::{AppError, Result};
use crate::metrics;
use crate::services::feed::FeedService;
use crate::services::inflight::{InFlight, PendingAction};
use crate::services::store::CommunityStore;
use crate::services::votes::{ItemRef, VoteService};
use chrono::Utc;
use feed_core::composer::{compose_post, PostDraft};
use feed_core::ids::IdGenerator;
use feed_core::Post;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct PostService {
    store: Arc<CommunityStore>,
    feed: Arc<FeedService>,
    votes: Arc<VoteService>,
    inflight: InFlight,
    ids: Arc<dyn IdGenerator>,
    latency: Duration,
}

impl PostService {
    pub fn new(
        store: Arc<CommunityStore>,
        feed: Arc<FeedService>,
        votes: Arc<VoteService>,
        inflight: InFlight,
        ids: Arc<dyn IdGenerator>,
        latency: Duration,
    ) -> Self {
        Self {
            store,
            feed,
            votes,
            inflight,
            ids,
            latency,
        }
    }

    /// Get a post by ID
    pub fn get_post(&self, post_id: &str) -> Option<Post> {
        self.store.get_post(post_id)
    }

    /// Create a new post at the front of the feed.
    ///
    /// The creating viewer's feed session returns to page 1.
    pub async fn create_post(&self, viewer: &str, draft: &PostDraft) -> Result<Post> {
        if !draft.is_submittable() {
            metrics::SUBMISSIONS_REJECTED_TOTAL
                .with_label_values(&["post", "blank"])
                .inc();
            return Err(AppError::Validation(
                "title and content must not be empty".to_string(),
            ));
        }
        let community_id = draft.community_id();
        if !self.store.has_community(community_id) {
            metrics::SUBMISSIONS_REJECTED_TOTAL
                .with_label_values(&["post", "unknown_community"])
                .inc();
            return Err(AppError::Validation(format!(
                "unknown community {}",
                community_id
            )));
        }

        let action = PendingAction::SubmitPost {
            viewer: viewer.to_string(),
        };
        let Some(_permit) = self.inflight.try_acquire(action.clone()) else {
            debug!(viewer, "post ignored: submission still pending");
            metrics::SUBMISSIONS_REJECTED_TOTAL
                .with_label_values(&["post", "in_flight"])
                .inc();
            return Err(AppError::Conflict(format!("submission in flight: {}", action)));
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let post = compose_post(draft, self.ids.next_post_id(), Utc::now()).ok_or_else(|| {
            AppError::Validation("title and content must not be empty".to_string())
        })?;
        self.store.prepend_post(post.clone());
        self.feed.reset_page(viewer);

        info!(
            post_id = %post.id,
            community_id = %post.community_id,
            hashtags = post.hashtags.len(),
            viewer,
            "post created"
        );
        metrics::POSTS_CREATED_TOTAL.inc();

        Ok(post)
    }

    /// Remove a post, its thread and its votes
    pub fn delete_post(&self, post_id: &str) -> Result<()> {
        let thread = self.store.thread(post_id);
        if !self.store.remove_post(post_id) {
            return Err(AppError::NotFound(format!("post {}", post_id)));
        }

        self.votes.forget_item(&ItemRef::Post(post_id.to_string()));
        for comment in thread.map(|t| t.comments).unwrap_or_default() {
            self.votes.forget_item(&ItemRef::Comment(comment.id));
        }

        info!(post_id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::ids::SequentialIds;
    use feed_core::ReferenceWindow;

    struct Fixture {
        store: Arc<CommunityStore>,
        feed: Arc<FeedService>,
        posts: PostService,
    }

    fn fixture(latency: Duration) -> Fixture {
        let store = Arc::new(CommunityStore::seeded());
        let inflight = InFlight::new();
        let feed = Arc::new(FeedService::new(
            store.clone(),
            ReferenceWindow::default(),
            false,
        ));
        let votes = Arc::new(VoteService::new(store.clone(), inflight.clone(), Duration::ZERO));
        let posts = PostService::new(
            store.clone(),
            feed.clone(),
            votes,
            inflight,
            Arc::new(SequentialIds::new()),
            latency,
        );
        Fixture { store, feed, posts }
    }

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
            community_id: Some("2".to_string()),
            hashtags: "react, #typescript ,  , webdev".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_prepends_and_resets_page() {
        let fx = fixture(Duration::ZERO);
        fx.feed.go_to_page("v", 4);

        let post = fx.posts.create_post("v", &draft("Title", "Body")).await.unwrap();
        assert_eq!(post.id, "post-1001");
        assert_eq!(post.hashtags, vec!["react", "typescript", "webdev"]);
        assert_eq!(fx.store.posts()[0].id, "post-1001");
        assert_eq!(fx.feed.session("v").page(), 1);
    }

    #[tokio::test]
    async fn test_blank_draft_rejected() {
        let fx = fixture(Duration::ZERO);
        let err = fx.posts.create_post("v", &draft("  ", "Body")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(fx.store.posts().len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_community_rejected() {
        let fx = fixture(Duration::ZERO);
        let mut d = draft("Title", "Body");
        d.community_id = Some("42".to_string());
        assert!(matches!(
            fx.posts.create_post("v", &d).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_pending_submission_blocks_second() {
        let fx = fixture(Duration::from_millis(50));
        let first_draft = draft("a", "b");
        let second_draft = draft("c", "d");
        let (first, second) = tokio::join!(fx.posts.create_post("v", &first_draft), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            fx.posts.create_post("v", &second_draft).await
        });
        assert!(first.is_ok());
        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(fx.store.posts().len(), 7);
    }

    #[test]
    fn test_delete_post() {
        let fx = fixture(Duration::ZERO);
        fx.posts.delete_post("1").unwrap();
        assert!(fx.posts.get_post("1").is_none());
        assert!(fx.store.get_comment("1").is_none());
        assert!(matches!(
            fx.posts.delete_post("1"),
            Err(AppError::NotFound(_))
        ));
    }
}
