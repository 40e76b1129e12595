/// Comment service - handles comment threads for posts
use crate::error::{AppError, Result};
use crate::metrics;
use crate::services::inflight::{InFlight, PendingAction};
use crate::services::store::CommunityStore;
use chrono::Utc;
use feed_core::comments::compose_comment;
use feed_core::ids::IdGenerator;
use feed_core::Comment;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct CommentService {
    store: Arc<CommunityStore>,
    inflight: InFlight,
    ids: Arc<dyn IdGenerator>,
    latency: Duration,
}

impl CommentService {
    pub fn new(
        store: Arc<CommunityStore>,
        inflight: InFlight,
        ids: Arc<dyn IdGenerator>,
        latency: Duration,
    ) -> Self {
        Self {
            store,
            inflight,
            ids,
            latency,
        }
    }

    /// Comments for a post in append order
    pub fn get_post_comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.store
            .thread(post_id)
            .map(|thread| thread.comments)
            .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))
    }

    pub fn get_comment(&self, comment_id: &str) -> Option<Comment> {
        self.store.get_comment(comment_id)
    }

    /// Create a new comment at the end of the post's thread
    pub async fn create_comment(&self, viewer: &str, post_id: &str, text: &str) -> Result<Comment> {
        if text.trim().is_empty() {
            metrics::SUBMISSIONS_REJECTED_TOTAL
                .with_label_values(&["comment", "blank"])
                .inc();
            return Err(AppError::Validation("comment must not be empty".to_string()));
        }
        if !self.store.has_post(post_id) {
            return Err(AppError::NotFound(format!("post {}", post_id)));
        }

        let action = PendingAction::SubmitComment {
            viewer: viewer.to_string(),
            post_id: post_id.to_string(),
        };
        let Some(_permit) = self.inflight.try_acquire(action.clone()) else {
            debug!(viewer, post_id, "comment ignored: submission still pending");
            metrics::SUBMISSIONS_REJECTED_TOTAL
                .with_label_values(&["comment", "in_flight"])
                .inc();
            return Err(AppError::Conflict(format!("submission in flight: {}", action)));
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let comment = compose_comment(self.ids.next_comment_id(), post_id, text, Utc::now())
            .ok_or_else(|| AppError::Validation("comment must not be empty".to_string()))?;
        let comment = self
            .store
            .append_comment(comment)
            .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))?;

        info!(comment_id = %comment.id, post_id, viewer, "comment created");
        metrics::COMMENTS_CREATED_TOTAL.inc();

        Ok(comment)
    }
}
