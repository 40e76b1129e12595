//! Feed Core
//!
//! Domain logic for the community feed: entities, the optimistic vote rules,
//! the filter/sort/paginate pipeline, per-viewer feed sessions, comment threads
//! and the post composer. Everything here is synchronous and free of I/O so the
//! service layer can own state, latency and transport.
//!
//! # Modules
//!
//! - `models`: posts, comments, communities, hashtags
//! - `votes`: vote state transitions shared by posts and comments
//! - `feed`: tab semantics, filtering and pagination
//! - `session`: feed view state with page-reset rules
//! - `comments`: comment construction and thread updates
//! - `composer`: post drafts and hashtag parsing
//! - `ids`: identifier generation strategies
//! - `seed`: the static mock data set
pub mod comments;
pub mod composer;
pub mod error;
pub mod feed;
pub mod ids;
pub mod models;
pub mod seed;
pub mod session;
pub mod votes;

pub use error::{FeedError, Result};
pub use feed::{FeedPage, FeedQuery, FeedTab, ReferenceWindow};
pub use models::{Comment, Community, Hashtag, Post};
pub use session::FeedSession;
pub use votes::{apply_vote, cast_vote, VoteDirection, VoteState, VoteTally, Votable};
