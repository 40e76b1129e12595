/// Vote service - optimistic up/down votes on posts and comments
///
/// Each viewer has at most one active vote per item, recorded in a ledger
/// keyed by (item, viewer). A click waits out the configured latency before
/// it is applied; clicks on the same item while one is pending are ignored.
use crate::error::{AppError, Result};
use crate::metrics;
use crate::services::inflight::{InFlight, PendingAction};
use crate::services::store::CommunityStore;
use dashmap::DashMap;
use feed_core::{cast_vote, VoteDirection, VoteState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A votable entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ItemRef {
    Post(String),
    Comment(String),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Post(id) => write!(f, "post {}", id),
            ItemRef::Comment(id) => write!(f, "comment {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    pub item: ItemRef,
    pub upvotes: i64,
    pub state: VoteState,
    pub has_upvoted: bool,
    pub has_downvoted: bool,
    /// False when the click was swallowed by a pending vote
    pub applied: bool,
}

impl VoteOutcome {
    fn new(item: ItemRef, upvotes: i64, state: VoteState, applied: bool) -> Self {
        Self {
            item,
            upvotes,
            state,
            has_upvoted: state == VoteState::Upvoted,
            has_downvoted: state == VoteState::Downvoted,
            applied,
        }
    }
}

pub struct VoteService {
    store: Arc<CommunityStore>,
    /// One entry per (item, viewer) with an active vote. Viewer ids come from
    /// an unauthenticated header and entries only leave on retract or delete.
    ledger: DashMap<(ItemRef, String), VoteState>,
    inflight: InFlight,
    latency: Duration,
}

impl VoteService {
    pub fn new(store: Arc<CommunityStore>, inflight: InFlight, latency: Duration) -> Self {
        Self {
            store,
            ledger: DashMap::new(),
            inflight,
            latency,
        }
    }

    pub fn state_of(&self, viewer: &str, item: &ItemRef) -> VoteState {
        self.ledger
            .get(&(item.clone(), viewer.to_string()))
            .map(|state| *state)
            .unwrap_or_default()
    }

    fn current_upvotes(&self, item: &ItemRef) -> Option<i64> {
        match item {
            ItemRef::Post(id) => self.store.get_post(id).map(|p| p.upvotes),
            ItemRef::Comment(id) => self.store.get_comment(id).map(|c| c.upvotes),
        }
    }

    /// Current count and the viewer's vote, without voting
    pub fn snapshot(&self, viewer: &str, item: ItemRef) -> Result<VoteOutcome> {
        let upvotes = self
            .current_upvotes(&item)
            .ok_or_else(|| AppError::NotFound(item.to_string()))?;
        let state = self.state_of(viewer, &item);
        Ok(VoteOutcome::new(item, upvotes, state, false))
    }

    pub async fn cast(
        &self,
        viewer: &str,
        item: ItemRef,
        direction: VoteDirection,
    ) -> Result<VoteOutcome> {
        if self.current_upvotes(&item).is_none() {
            return Err(AppError::NotFound(item.to_string()));
        }

        let action = PendingAction::Vote {
            viewer: viewer.to_string(),
            item: item.clone(),
        };
        let Some(_permit) = self.inflight.try_acquire(action) else {
            debug!(%item, viewer, %direction, "vote ignored: previous vote still pending");
            metrics::VOTES_TOTAL.with_label_values(&["ignored"]).inc();
            return self.snapshot(viewer, item);
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let state = self.state_of(viewer, &item);
        let key = (item.clone(), viewer.to_string());
        let mut next_state = state;
        // Ledger is written under the store lock so a concurrent delete
        // either sees the entry and forgets it, or the update finds nothing.
        let record = |next: VoteState| {
            if next == VoteState::None {
                self.ledger.remove(&key);
            } else {
                self.ledger.insert(key.clone(), next);
            }
        };
        let updated = match &item {
            ItemRef::Post(id) => self
                .store
                .update_post(id, |post| {
                    let (updated, tally) = cast_vote(post, direction, state);
                    next_state = tally.state;
                    record(next_state);
                    updated
                })
                .map(|post| post.upvotes),
            ItemRef::Comment(id) => self
                .store
                .update_comment(id, |comment| {
                    let (updated, tally) = cast_vote(comment, direction, state);
                    next_state = tally.state;
                    record(next_state);
                    updated
                })
                .map(|comment| comment.upvotes),
        };
        // None here means the item was deleted while the vote was pending
        let upvotes = updated.ok_or_else(|| AppError::NotFound(item.to_string()))?;

        info!(%item, viewer, %direction, upvotes, state = ?next_state, "vote applied");
        metrics::VOTES_TOTAL.with_label_values(&["applied"]).inc();

        Ok(VoteOutcome::new(item, upvotes, next_state, true))
    }

    /// Drop every ledger entry for an item, used when the item is deleted
    pub fn forget_item(&self, item: &ItemRef) {
        self.ledger.retain(|(key, _), _| key != item);
    }
}
