//! Identifier generation
//!
//! `SequentialIds` keeps two namespaced counters seeded above every mock id;
//! they restart with the process, so `RandomIds` is the default outside tests.

use crate::error::{FeedError, Result};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub const POST_ID_SEED: u64 = 1000;
pub const COMMENT_ID_SEED: u64 = 2000;

pub trait IdGenerator: Send + Sync {
    fn next_post_id(&self) -> String;
    fn next_comment_id(&self) -> String;
}

#[derive(Debug)]
pub struct SequentialIds {
    posts: AtomicU64,
    comments: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self {
            posts: AtomicU64::new(POST_ID_SEED),
            comments: AtomicU64::new(COMMENT_ID_SEED),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_post_id(&self) -> String {
        format!("post-{}", self.posts.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn next_comment_id(&self) -> String {
        format!("comment-{}", self.comments.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_post_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn next_comment_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(RandomIds),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" => Ok(IdStrategy::Sequential),
            other => Err(FeedError::UnknownIdStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_counters_are_namespaced() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_post_id(), "post-1001");
        assert_eq!(ids.next_post_id(), "post-1002");
        assert_eq!(ids.next_comment_id(), "comment-2001");
        assert_eq!(ids.next_post_id(), "post-1003");
    }

    #[test]
    fn test_random_ids_are_unique() {
        let ids = RandomIds;
        let seen: HashSet<String> = (0..100).map(|_| ids.next_comment_id()).collect();
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("UUID".parse::<IdStrategy>().unwrap(), IdStrategy::Uuid);
        assert_eq!(
            "sequential".parse::<IdStrategy>().unwrap(),
            IdStrategy::Sequential
        );
        assert!("snowflake".parse::<IdStrategy>().is_err());
    }
}
