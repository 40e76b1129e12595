//! Optimistic up/down voting
//!
//! A viewer holds at most one active vote per item. The stored count is a net
//! score, so switching sides moves it by two.

use crate::error::{FeedError, Result};
use crate::models::{Comment, Post};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl FromStr for VoteDirection {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            other => Err(FeedError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => write!(f, "up"),
            VoteDirection::Down => write!(f, "down"),
        }
    }
}

/// A viewer's current vote on one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteState {
    #[default]
    None,
    Upvoted,
    Downvoted,
}

/// Count plus the viewer's vote, the unit the vote rules operate on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub upvotes: i64,
    pub state: VoteState,
}

impl VoteTally {
    pub fn new(upvotes: i64, state: VoteState) -> Self {
        Self { upvotes, state }
    }

    pub fn has_upvoted(&self) -> bool {
        self.state == VoteState::Upvoted
    }

    pub fn has_downvoted(&self) -> bool {
        self.state == VoteState::Downvoted
    }
}

/// Apply one vote click.
///
/// Clicking the active direction retracts it; clicking the opposite direction
/// switches sides (net ±2); clicking from neutral casts a fresh vote (net ±1).
pub fn apply_vote(direction: VoteDirection, current: VoteTally) -> VoteTally {
    use VoteDirection::*;
    use VoteState::*;

    let (delta, state) = match (direction, current.state) {
        (Up, Upvoted) => (-1, None),
        (Up, Downvoted) => (2, Upvoted),
        (Up, None) => (1, Upvoted),
        (Down, Downvoted) => (1, None),
        (Down, Upvoted) => (-2, Downvoted),
        (Down, None) => (-1, Downvoted),
    };

    VoteTally {
        upvotes: current.upvotes + delta,
        state,
    }
}

/// Entities that carry a net vote count
pub trait Votable: Clone {
    fn id(&self) -> &str;
    fn upvotes(&self) -> i64;
    /// Copy of `self` with only the count changed
    fn with_upvotes(&self, upvotes: i64) -> Self;
}

impl Votable for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn upvotes(&self) -> i64 {
        self.upvotes
    }

    fn with_upvotes(&self, upvotes: i64) -> Self {
        Post {
            upvotes,
            ..self.clone()
        }
    }
}

impl Votable for Comment {
    fn id(&self) -> &str {
        &self.id
    }

    fn upvotes(&self) -> i64 {
        self.upvotes
    }

    fn with_upvotes(&self, upvotes: i64) -> Self {
        Comment {
            upvotes,
            ..self.clone()
        }
    }
}

/// Apply a click to `item` given the viewer's current state.
/// Returns the updated entity and the resulting tally.
pub fn cast_vote<T: Votable>(item: &T, direction: VoteDirection, state: VoteState) -> (T, VoteTally) {
    let tally = apply_vote(direction, VoteTally::new(item.upvotes(), state));
    (item.with_upvotes(tally.upvotes), tally)
}

/// Replace the entry whose id matches `updated`, leaving the rest untouched.
pub fn replace_by_id<T: Votable>(items: &[T], updated: &T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.id() == updated.id() {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}
