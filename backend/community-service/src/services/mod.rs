/// Business logic layer for community-service
///
/// This module provides high-level operations:
/// - Store: in-memory posts, comment threads, communities and hashtags
/// - Feed: filter/sort/paginate pipeline and per-viewer feed sessions
/// - Votes: per-viewer up/down votes on posts and comments
/// - Comments and posts: composer submissions with simulated latency
pub mod comments;
pub mod feed;
pub mod inflight;
pub mod posts;
pub mod store;
pub mod votes;

// Re-export commonly used services
pub use comments::CommentService;
pub use feed::{FeedService, SessionView};
pub use inflight::{InFlight, PendingAction};
pub use posts::PostService;
pub use store::CommunityStore;
pub use votes::{ItemRef, VoteOutcome, VoteService};
