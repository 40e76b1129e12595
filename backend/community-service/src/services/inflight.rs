//! Re-entrancy guard for simulated-latency actions
//!
//! While a permit for a key is alive, further attempts on the same key are
//! refused. The permit releases its key on drop, including when the request
//! future is cancelled mid-delay.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::votes::ItemRef;

/// A logical action that may only have one pending completion at a time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PendingAction {
    Vote { viewer: String, item: ItemRef },
    SubmitComment { viewer: String, post_id: String },
    SubmitPost { viewer: String },
}

impl fmt::Display for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingAction::Vote { viewer, item } => write!(f, "vote on {} by {}", item, viewer),
            PendingAction::SubmitComment { viewer, post_id } => {
                write!(f, "comment on post {} by {}", post_id, viewer)
            }
            PendingAction::SubmitPost { viewer } => write!(f, "post submission by {}", viewer),
        }
    }
}

#[derive(Clone, Default)]
pub struct InFlight {
    pending: Arc<DashMap<PendingAction, ()>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the action is already pending
    pub fn try_acquire(&self, action: PendingAction) -> Option<InFlightPermit> {
        match self.pending.entry(action.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(());
                Some(InFlightPermit {
                    pending: Arc::clone(&self.pending),
                    action,
                })
            }
        }
    }

    pub fn is_pending(&self, action: &PendingAction) -> bool {
        self.pending.contains_key(action)
    }
}

pub struct InFlightPermit {
    pending: Arc<DashMap<PendingAction, ()>>,
    action: PendingAction,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.pending.remove(&self.action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(viewer: &str) -> PendingAction {
        PendingAction::SubmitPost {
            viewer: viewer.to_string(),
        }
    }

    #[test]
    fn test_second_acquire_is_refused() {
        let inflight = InFlight::new();
        let permit = inflight.try_acquire(submit("a"));
        assert!(permit.is_some());
        assert!(inflight.try_acquire(submit("a")).is_none());
        assert!(inflight.is_pending(&submit("a")));
    }

    #[test]
    fn test_drop_releases() {
        let inflight = InFlight::new();
        {
            let _permit = inflight.try_acquire(submit("a")).unwrap();
        }
        assert!(!inflight.is_pending(&submit("a")));
        assert!(inflight.try_acquire(submit("a")).is_some());
    }

    #[test]
    fn test_keys_are_independent() {
        let inflight = InFlight::new();
        let _a = inflight.try_acquire(submit("a")).unwrap();
        assert!(inflight.try_acquire(submit("b")).is_some());

        let vote = |id: &str| PendingAction::Vote {
            viewer: "a".to_string(),
            item: ItemRef::Post(id.to_string()),
        };
        let _v = inflight.try_acquire(vote("1")).unwrap();
        assert!(inflight.try_acquire(vote("2")).is_some());
        assert!(inflight.try_acquire(vote("1")).is_none());
    }
}
