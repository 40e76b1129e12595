/// Error types for feed-core
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Unknown feed tab: {0}")]
    UnknownTab(String),

    #[error("Unknown vote direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown id strategy: {0}")]
    UnknownIdStrategy(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
