/// In-memory owner of posts, comment threads and reference data.
///
/// Collections are replaced wholesale on every mutation; readers get snapshots.
use chrono::{DateTime, Utc};
use feed_core::comments::CommentThread;
use feed_core::composer::prepend_post;
use feed_core::models::record_hashtag_search;
use feed_core::votes::replace_by_id;
use feed_core::{seed, Comment, Community, Hashtag, Post};
use parking_lot::RwLock;
use std::collections::HashMap;

pub struct CommunityStore {
    posts: RwLock<Vec<Post>>,
    threads: RwLock<HashMap<String, CommentThread>>,
    communities: Vec<Community>,
    hashtags: RwLock<Vec<Hashtag>>,
}

impl CommunityStore {
    pub fn new(
        posts: Vec<Post>,
        comments: Vec<Comment>,
        communities: Vec<Community>,
        hashtags: Vec<Hashtag>,
    ) -> Self {
        let threads = posts
            .iter()
            .map(|post| {
                (
                    post.id.clone(),
                    CommentThread::from_comments(post.id.clone(), &comments),
                )
            })
            .collect();

        Self {
            posts: RwLock::new(posts),
            threads: RwLock::new(threads),
            communities,
            hashtags: RwLock::new(hashtags),
        }
    }

    /// Store loaded with the mock data set
    pub fn seeded() -> Self {
        Self::new(
            seed::posts(),
            seed::comments(),
            seed::communities(),
            seed::hashtags(),
        )
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    pub fn get_post(&self, post_id: &str) -> Option<Post> {
        self.posts.read().iter().find(|p| p.id == post_id).cloned()
    }

    pub fn has_post(&self, post_id: &str) -> bool {
        self.posts.read().iter().any(|p| p.id == post_id)
    }

    pub fn prepend_post(&self, post: Post) {
        let mut posts = self.posts.write();
        self.threads
            .write()
            .entry(post.id.clone())
            .or_insert_with(|| CommentThread::new(post.id.clone()));
        *posts = prepend_post(&posts, post);
    }

    /// Recompute one post under the write lock and store the result by id.
    pub fn update_post<F>(&self, post_id: &str, f: F) -> Option<Post>
    where
        F: FnOnce(&Post) -> Post,
    {
        let mut posts = self.posts.write();
        let current = posts.iter().find(|p| p.id == post_id)?;
        let updated = f(current);
        *posts = replace_by_id(&posts, &updated);
        Some(updated)
    }

    /// Removes the post and its thread. Returns false when it did not exist.
    pub fn remove_post(&self, post_id: &str) -> bool {
        let mut posts = self.posts.write();
        if !posts.iter().any(|p| p.id == post_id) {
            return false;
        }
        *posts = posts.iter().filter(|p| p.id != post_id).cloned().collect();
        self.threads.write().remove(post_id);
        true
    }

    pub fn thread(&self, post_id: &str) -> Option<CommentThread> {
        self.threads.read().get(post_id).cloned()
    }

    pub fn get_comment(&self, comment_id: &str) -> Option<Comment> {
        self.threads
            .read()
            .values()
            .find_map(|thread| thread.get(comment_id).cloned())
    }

    /// Append to the post's thread; `None` when the post no longer exists.
    pub fn append_comment(&self, comment: Comment) -> Option<Comment> {
        let mut threads = self.threads.write();
        let thread = threads.get_mut(&comment.post_id)?;
        *thread = thread.appended(comment.clone());
        Some(comment)
    }

    pub fn update_comment<F>(&self, comment_id: &str, f: F) -> Option<Comment>
    where
        F: FnOnce(&Comment) -> Comment,
    {
        let mut threads = self.threads.write();
        let thread = threads
            .values_mut()
            .find(|thread| thread.get(comment_id).is_some())?;
        let updated = f(thread.get(comment_id)?);
        *thread = thread.updated(&updated);
        Some(updated)
    }

    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    pub fn has_community(&self, community_id: &str) -> bool {
        self.communities.iter().any(|c| c.id == community_id)
    }

    pub fn hashtags(&self) -> Vec<Hashtag> {
        self.hashtags.read().clone()
    }

    pub fn record_hashtag_search(&self, name: &str, at: DateTime<Utc>) {
        let mut hashtags = self.hashtags.write();
        *hashtags = record_hashtag_search(&hashtags, name, at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::Votable;

    #[test]
    fn test_seeded_threads_follow_posts() {
        let store = CommunityStore::seeded();
        assert_eq!(store.posts().len(), 6);
        assert_eq!(store.thread("1").map(|t| t.len()), Some(2));
        assert_eq!(store.thread("6").map(|t| t.len()), Some(1));
        assert!(store.thread("missing").is_none());
    }

    #[test]
    fn test_update_post_replaces_by_id() {
        let store = CommunityStore::seeded();
        let updated = store.update_post("3", |p| p.with_upvotes(-4)).unwrap();
        assert_eq!(updated.upvotes, -4);
        assert_eq!(store.get_post("3").unwrap().upvotes, -4);
        assert_eq!(store.posts()[2].id, "3");
        assert!(store.update_post("missing", |p| p.clone()).is_none());
    }

    #[test]
    fn test_prepend_and_remove_post() {
        let store = CommunityStore::seeded();
        let mut post = store.get_post("1").unwrap();
        post.id = "post-1001".to_string();

        store.prepend_post(post);
        assert_eq!(store.posts()[0].id, "post-1001");
        assert!(store.thread("post-1001").unwrap().is_empty());

        assert!(store.remove_post("post-1001"));
        assert!(!store.remove_post("post-1001"));
        assert!(store.thread("post-1001").is_none());
        assert_eq!(store.posts().len(), 6);
    }

    #[test]
    fn test_comment_updates() {
        let store = CommunityStore::seeded();
        let updated = store.update_comment("4", |c| c.with_upvotes(0)).unwrap();
        assert_eq!(updated.post_id, "2");
        assert_eq!(store.get_comment("4").unwrap().upvotes, 0);
        assert!(store.update_comment("missing", |c| c.clone()).is_none());
    }

    #[test]
    fn test_append_comment_to_missing_post() {
        let store = CommunityStore::seeded();
        let mut comment = store.get_comment("1").unwrap();
        comment.post_id = "missing".to_string();
        assert!(store.append_comment(comment).is_none());
    }
}
