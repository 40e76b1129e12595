//! Post composer
//!
//! Validates a draft and turns it into a `Post` with a zero score.

use crate::models::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Community preselected in the composer
pub const DEFAULT_COMMUNITY_ID: &str = "1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub community_id: Option<String>,
    /// Comma-separated, `#` optional
    #[serde(default)]
    pub hashtags: String,
}

impl PostDraft {
    /// Title and content both non-blank after trimming
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn community_id(&self) -> &str {
        self.community_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_COMMUNITY_ID)
    }
}

/// Trimmed tag name with at most one leading `#` removed.
///
/// Composer input and feed filters both go through this, so a tag typed
/// as `##b` is stored as `#b` and matched by a filter typed as `##b`.
pub fn hashtag_name(raw: &str) -> &str {
    let tag = raw.trim();
    tag.strip_prefix('#').unwrap_or(tag)
}

/// Split on commas, trim, drop one leading `#`, skip empties.
/// Order is kept and duplicates are not removed.
pub fn parse_hashtags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(hashtag_name)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns `None` when the draft is not submittable.
pub fn compose_post(draft: &PostDraft, id: String, now: DateTime<Utc>) -> Option<Post> {
    if !draft.is_submittable() {
        return None;
    }

    Some(Post {
        id,
        title: draft.title.trim().to_string(),
        content: draft.content.trim().to_string(),
        created_at: now,
        updated_at: now,
        upvotes: 0,
        community_id: draft.community_id().to_string(),
        hashtags: parse_hashtags(&draft.hashtags),
    })
}

/// New collection with `post` in front
pub fn prepend_post(posts: &[Post], post: Post) -> Vec<Post> {
    let mut next = Vec::with_capacity(posts.len() + 1);
    next.push(post);
    next.extend_from_slice(posts);
    next
}
