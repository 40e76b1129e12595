use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

lazy_static! {
    /// Vote clicks by outcome (applied/ignored).
    pub static ref VOTES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "community_votes_total",
        "Vote clicks segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register community_votes_total");

    /// Feed pages derived, by tab.
    pub static ref FEED_QUERIES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "community_feed_queries_total",
        "Feed pages derived segmented by tab",
        &["tab"]
    )
    .expect("failed to register community_feed_queries_total");

    pub static ref POSTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "community_posts_created_total",
        "Posts created through the composer"
    )
    .expect("failed to register community_posts_created_total");

    pub static ref COMMENTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "community_comments_created_total",
        "Comments appended to threads"
    )
    .expect("failed to register community_comments_created_total");

    /// Rejected post/comment submissions (blank, unknown_community, in_flight).
    pub static ref SUBMISSIONS_REJECTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "community_submissions_rejected_total",
        "Rejected submissions segmented by kind and reason",
        &["kind", "reason"]
    )
    .expect("failed to register community_submissions_rejected_total");
}
