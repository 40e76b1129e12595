use crate::models::Comment;
use crate::votes::replace_by_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build a comment from raw input. Blank or whitespace-only text yields `None`.
pub fn compose_comment(
    id: String,
    post_id: &str,
    text: &str,
    now: DateTime<Utc>,
) -> Option<Comment> {
    let content = text.trim();
    if content.is_empty() {
        return None;
    }

    Some(Comment {
        id,
        post_id: post_id.to_string(),
        content: content.to_string(),
        created_at: now,
        upvotes: 0,
    })
}

/// Comments for one post, in append order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    pub post_id: String,
    pub comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            comments: Vec::new(),
        }
    }

    /// Keep only `comments` that belong to `post_id`, preserving their order.
    pub fn from_comments(post_id: impl Into<String>, comments: &[Comment]) -> Self {
        let post_id = post_id.into();
        let comments = comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        Self { post_id, comments }
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn get(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// New thread with `comment` appended at the end
    pub fn appended(&self, comment: Comment) -> Self {
        let mut comments = self.comments.clone();
        comments.push(comment);
        Self {
            post_id: self.post_id.clone(),
            comments,
        }
    }

    /// New thread with the matching comment replaced in place
    pub fn updated(&self, comment: &Comment) -> Self {
        Self {
            post_id: self.post_id.clone(),
            comments: replace_by_id(&self.comments, comment),
        }
    }
}
