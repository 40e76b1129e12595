use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a feed entry belonging to one community
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Net score; goes negative once downvotes outweigh upvotes
    pub upvotes: i64,
    pub community_id: String,
    /// Insertion order preserved, duplicates allowed
    pub hashtags: Vec<String>,
}

impl Post {
    /// Case-insensitive substring match against title, content or any hashtag.
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .hashtags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    pub fn has_any_hashtag<'a, I>(&self, wanted: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        wanted
            .into_iter()
            .any(|tag| self.hashtags.iter().any(|own| own == tag))
    }
}

/// Comment entity - a flat reply attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: i64,
}

/// Community reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    pub color: String,
}

/// Hashtag reference data with search statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    pub name: String,
    pub search_count: u64,
    pub last_searched: DateTime<Utc>,
}

/// Returns a copy of `hashtags` with the named entry's search count bumped.
/// Unknown names leave the list unchanged.
pub fn record_hashtag_search(hashtags: &[Hashtag], name: &str, at: DateTime<Utc>) -> Vec<Hashtag> {
    hashtags
        .iter()
        .map(|tag| {
            if tag.name == name {
                Hashtag {
                    name: tag.name.clone(),
                    search_count: tag.search_count + 1,
                    last_searched: at,
                }
            } else {
                tag.clone()
            }
        })
        .collect()
}
